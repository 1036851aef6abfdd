/*!
Reports for the context.

A [Report] is the verdict of the most recent procedure run within a context.
Only [Unknown](Report::Unknown) fails to be a verdict, and the [diagnostics](Diagnostic) of the context give the reason.
*/

use serde::Serialize;

/// High-level reports regarding a run.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Report {
    /// Every branch of the tableau is closed, and so the root formula is unsatisfiable.
    Closed,

    /// Some branch of a finished tableau is open, and so the root formula is satisfiable.
    Open,

    /// The conclusion of the argument follows from the premises.
    Valid,

    /// The conclusion of the argument does not follow from the premises.
    Invalid,

    /// A derivation of the conclusion was found.
    Proved,

    /// The search for a derivation finished without finding the conclusion.
    NotProved,

    /// Nothing has been run, or the run stopped for some reason before reaching a verdict.
    Unknown,
}

impl Report {
    /// True if the report is a (definitive) verdict.
    pub fn is_verdict(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "Closed"),
            Self::Open => write!(f, "Open"),
            Self::Valid => write!(f, "Valid"),
            Self::Invalid => write!(f, "Invalid"),
            Self::Proved => write!(f, "Proved"),
            Self::NotProved => write!(f, "Not proved"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Notes made during a run, typically on why a run stopped without a verdict.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Diagnostic {
    /// The tableau dispatched as many nodes as permitted.
    TableauTimeout { dispatches: usize },

    /// The derivation search made as many passes as permitted.
    DeductionTimeout { passes: usize },

    /// The derivation search reached a fixpoint without the conclusion or a contradiction.
    DeductionExhausted { passes: usize },

    /// A fresh constant was required, but all constants were in use.
    ConstantsExhausted,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableauTimeout { dispatches } => {
                write!(f, "Timeout: the tableau stopped after {dispatches} dispatches")
            }
            Self::DeductionTimeout { passes } => {
                write!(f, "Timeout: the derivation stopped after {passes} passes")
            }
            Self::DeductionExhausted { passes } => {
                write!(f, "No further derivations after {passes} passes")
            }
            Self::ConstantsExhausted => write!(f, "All constants are in use"),
        }
    }
}
