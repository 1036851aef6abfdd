/// Counts for various things which count, roughly.
///
/// Counters are [reset](crate::context::Context::reset) at the start of each run.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every node popped from the worklist of a tableau.
    pub dispatches: usize,

    /// A count of every node added to a tableau, including the root.
    pub tableau_nodes: usize,

    /// A count of every pass over the derivations of a search.
    pub passes: usize,

    /// A count of every derivation made, including premises.
    pub derivations: usize,
}
