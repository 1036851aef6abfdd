//! Error types used in the library.
//!
//! - Most of these signal a broken contract between some caller and the library, e.g. a predicate built with a parameter which is not a term.
//!   Such errors are returned so the caller can report them, but no procedure attempts to recover from one.
//! - Limits on a search (the dispatch ceiling of a tableau, the pass ceiling of a derivation, or running out of constants) are *not* errors.
//!   Instead, these are noted as [diagnostics](crate::reports::Diagnostic) and lead to an [unknown](crate::reports::Report::Unknown) report.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Constant(ConstantError),
    Deduction(DeductionError),
    Tableau(TableauError),
    Wff(WffError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config error: {e:?}"),
            Self::Constant(e) => write!(f, "Constant error: {e:?}"),
            Self::Deduction(e) => write!(f, "Deduction error: {e:?}"),
            Self::Tableau(e) => write!(f, "Tableau error: {e:?}"),
            Self::Wff(e) => write!(f, "Wff error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the bounds of the option.
    OutOfBounds,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when allocating constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstantError {
    /// Every constant from `a` to `t` is already in use.
    Exhausted,
}

impl From<ConstantError> for ErrorKind {
    fn from(e: ConstantError) -> Self {
        ErrorKind::Constant(e)
    }
}

/// Errors during a natural deduction search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeductionError {
    /// An argument requires at least a conclusion.
    EmptyArgument,

    /// A derivation was referenced by an index outside the store.
    MissingNode,
}

impl From<DeductionError> for ErrorKind {
    fn from(e: DeductionError) -> Self {
        ErrorKind::Deduction(e)
    }
}

/// Errors during the expansion of a tableau.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableauError {
    /// Some attempt was made to add a center (stack) child to a node which already has a right child.
    CenterAfterRight,

    /// Some attempt was made to add a child where a child already exists.
    ChildOccupied,

    /// A rule was dispatched on a node whose formula is of the wrong kind.
    /// E.g. universal decomposition on a conjunction.
    UnexpectedKind,

    /// A key did not point to a node in the arena.
    MissingNode,
}

impl From<TableauError> for ErrorKind {
    fn from(e: TableauError) -> Self {
        ErrorKind::Tableau(e)
    }
}

/// Errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WffError {
    /// The variable bound by a quantifier must be exactly one character.
    VariableSymbol,

    /// The parameters of a predicate, and the sides of an identity, must be constants or variables.
    NotATerm,

    /// A node of some kind was required, and a node of some other kind was found.
    UnexpectedKind,
}

impl From<WffError> for ErrorKind {
    fn from(e: WffError) -> Self {
        ErrorKind::Wff(e)
    }
}
