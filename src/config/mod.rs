/*!
Configuration of a context.

All configuration for a context is contained within [Config], which is read (and never revised) by the procedures.

```rust
# use wff_prover::config::Config;
let mut config = Config::default();
assert_eq!(config.tableau_limit.value, 1000);

assert!(config.negation_limit.set(2).is_ok());
assert!(config.negation_limit.set(5).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use serde::Serialize;

/// The ceiling on the number of consecutive negations, also used to bound the double negation lookahead.
pub const NEGATION_MAX: usize = 4;

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// The number of nodes a tableau may dispatch before expansion stops with an unknown result.
    pub tableau_limit: ConfigOption<usize>,

    /// The number of passes over the derivations of a natural deduction search before the search stops with an unknown result.
    pub deduction_limit: ConfigOption<usize>,

    /// The number of nested negations considered when checking whether double negation introduction reaches a goal.
    pub negation_limit: ConfigOption<usize>,

    /// Revisit universal nodes of a tableau when new constants appear on their branches.
    pub requeue_universals: ConfigOption<bool>,
}

impl Default for Config {
    /// The default configuration stops runaway searches after a thousand steps, which is ample for arguments of a few premises.
    fn default() -> Self {
        Config {
            tableau_limit: ConfigOption {
                name: "tableau_limit",
                min: 1,
                max: usize::MAX,
                value: 1000,
            },

            deduction_limit: ConfigOption {
                name: "deduction_limit",
                min: 1,
                max: usize::MAX,
                value: 1000,
            },

            negation_limit: ConfigOption {
                name: "negation_limit",
                min: 0,
                max: NEGATION_MAX,
                value: NEGATION_MAX,
            },

            requeue_universals: ConfigOption {
                name: "requeue_universals",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
