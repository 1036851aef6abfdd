//! A library for checking arguments in propositional and first-order predicate logic.
//!
//! wff_prover checks an argument in two ways:
//! - By building a [tableau](crate::procedures::tableau) from the premises together with the negated conclusion.
//!   The argument is valid exactly when every branch of the tableau closes.
//! - By searching for a [natural deduction](crate::procedures::deduction) of the conclusion from the premises.
//!   A found proof is returned as a list of numbered lines, each justified by a rule and earlier lines.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [context].
//! A context holds a [configuration](crate::config), counters, and the [report](crate::reports) of the most recent procedure.
//!
//! Useful starting points may be:
//! - The [structures] to see how wffs, constants, and the steps of a derivation are represented.
//! - The [procedures] to inspect the dynamics of the tableau and deduction searches.
//! - The [database module](crate::db) to inspect the nodes built by a procedure.
//!
//! # Examples
//!
//! + Check an argument by a tableau, and then by natural deduction.
//!
//! ```rust
//! # use wff_prover::context::Context;
//! # use wff_prover::procedures::deduction::ProofType;
//! # use wff_prover::reports::Report;
//! # use wff_prover::structures::wff::Wff;
//! let p = Wff::atom('P');
//! let q = Wff::atom('Q');
//! let r = Wff::atom('R');
//! let premises = [Wff::implies(p.clone(), q.clone()), Wff::implies(q.clone(), r.clone())];
//! let conclusion = Wff::implies(p.clone(), r.clone());
//!
//! let mut the_context = Context::default();
//! assert_eq!(the_context.check_argument(&premises, &conclusion), Ok(Report::Valid));
//!
//! let proof = the_context
//!     .prove(&premises, &conclusion, ProofType::Direct)
//!     .unwrap()
//!     .unwrap();
//! for (number, line) in proof.iter().enumerate() {
//!     println!("{}. {line}", number + 1);
//! }
//! assert_eq!(proof.len(), 3);
//! ```
//!
//! + Find a counterexample to an invalid argument.
//!
//! ```rust
//! # use wff_prover::context::Context;
//! # use wff_prover::db::tableau::Tableau;
//! # use wff_prover::procedures::argument::counterexample_wff;
//! # use wff_prover::reports::Report;
//! # use wff_prover::structures::wff::Wff;
//! let p = Wff::atom('P');
//! let q = Wff::atom('Q');
//!
//! let mut the_context = Context::default();
//! let tableau = the_context
//!     .build_tableau(&counterexample_wff(&[Wff::or(p.clone(), q.clone())], &p))
//!     .unwrap();
//!
//! assert_eq!(the_context.report(), Report::Open);
//! assert!(tableau.has_some_closed());
//! assert!(!tableau.has_all_closed());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of closed branches can be filtered with `RUST_LOG=closure …` or,
//! - Counts of passes without the rules applied can be found with `RUST_LOG=deduction=info …`

#![allow(clippy::single_match)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
