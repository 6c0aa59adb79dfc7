/// Identifier for a node in a [`crate::graph::Graph`].
///
/// This is an index into `Graph::nodes`, and is only meaningful until
/// the next removal renumbers the arena.
pub type NodeId = usize;

/// Snapshot of the aggregate simulation counters, as returned by
/// [`crate::engine::Automaton::stats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Discrete ticks elapsed since the last seed.
    pub time: u64,
    /// Current node count.
    pub nodes: usize,
    /// Current edge count (half the summed degree).
    pub edges: usize,
    /// Nodes currently in state 1.
    pub alive: usize,
    /// Total divisions since the last seed.
    pub divisions: u64,
}
