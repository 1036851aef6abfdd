/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [expansion of a tableau](crate::procedures::tableau)
    pub const TABLEAU: &str = "tableau";

    /// Logs related to closing the branches of a tableau
    pub const CLOSURE: &str = "closure";

    /// Logs related to the [natural deduction search](crate::procedures::deduction)
    pub const DEDUCTION: &str = "deduction";

    /// Logs related to the instantiation of quantifiers and identities
    pub const SUBSTITUTION: &str = "substitution";

    /// Logs related to pruning and numbering a derivation
    pub const FINALIZE: &str = "finalize";
}
