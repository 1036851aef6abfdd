//! Key structures: formulas, constants, and the steps of a derivation.
//!
//! # Formulas
//!
//! A [wff](wff::Wff) is a tree, and is shared by both the [tableau](crate::procedures::tableau) and [natural deduction](crate::procedures::deduction) procedures.
//! Wffs are values, and are cloned freely.
//!
//! # Constants
//!
//! Both procedures introduce [constants](constant) when handling quantifiers, drawn from a fixed range of twenty symbols.

pub mod constant;
pub mod step;
pub mod wff;
