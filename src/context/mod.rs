/*!
The context --- within which tableaux are expanded and derivations are searched for.

A context bundles everything a run may write to: [counters](Counters), a list of [diagnostics](Diagnostic), and the [report](Report) of the most recent run.
Nothing is shared between contexts, and so independent runs may be made from independent contexts without interference.

Each entry point to a procedure ([build_tableau](Context::build_tableau), [prove](Context::prove), and [check_argument](Context::check_argument)) begins with a call to [reset](Context::reset), so no state from one run carries over to the next.

# Example
```rust
# use wff_prover::context::Context;
# use wff_prover::config::Config;
# use wff_prover::reports::Report;
# use wff_prover::structures::wff::Wff;
let mut the_context = Context::from_config(Config::default());

let p = Wff::atom('P');
let contradiction = Wff::and(p.clone(), p.negate());

let tableau = the_context.build_tableau(&contradiction).unwrap();
assert!(tableau.has_all_closed());
assert_eq!(the_context.report(), Report::Closed);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    reports::{Diagnostic, Report},
};

/// A context for runs of the procedures.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the most recent run.
    pub counters: Counters,

    /// Notes on the most recent run.
    diagnostics: Vec<Diagnostic>,

    /// The verdict of the most recent run.
    report: Report,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            diagnostics: Vec::default(),
            report: Report::Unknown,
        }
    }

    /// Clears the counters, diagnostics, and report of the context, keeping the configuration.
    pub fn reset(&mut self) {
        self.counters = Counters::default();
        self.diagnostics.clear();
        self.report = Report::Unknown;
    }

    /// A report on the most recent run.
    pub fn report(&self) -> Report {
        self.report
    }

    /// Diagnostics noted during the most recent run.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if the most recent run stopped due to some limit.
    pub fn timed_out(&self) -> bool {
        self.diagnostics.iter().any(|diagnostic| {
            matches!(
                diagnostic,
                Diagnostic::TableauTimeout { .. } | Diagnostic::DeductionTimeout { .. }
            )
        })
    }

    pub(crate) fn note(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn set_report(&mut self, report: Report) {
        self.report = report;
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
