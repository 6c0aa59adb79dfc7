use crate::types::NodeId;

/// Decoder for a 16-bit automaton rule.
///
/// A rule packs two 8-bit boolean functions, both indexed by a node's
/// [`configuration`]:
///
/// - the **low byte** is R, the next-state function;
/// - the **high byte** is R′, the division trigger.
///
/// Bits are read lazily with shifts and masks; there is no decoded
/// table to keep in sync when the rule changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleTable(pub u16);

impl RuleTable {
    /// Returns R(`config`): the next state (0 or 1) for a node whose
    /// configuration is `config`.
    ///
    /// ### Parameters
    /// - `config` - Configuration index in `0..8`.
    #[inline]
    pub fn next_state(self, config: u8) -> u8 {
        ((self.0 >> config) & 1) as u8
    }

    /// Returns R′(`config`): whether a node with this configuration
    /// triggers a division.
    #[inline]
    pub fn divides(self, config: u8) -> bool {
        (self.0 >> (8 + config)) & 1 == 1
    }
}

/// Computes a node's configuration index.
///
/// `configuration = (fanout + 1) · state + Σ(neighbor states)`, where
/// `fanout` is the expected neighbor-count scale (not an enforced degree
/// bound). High-degree nodes can push the sum past the 8-bit table's
/// addressable range `0..8`; such values are clamped to 7 so the rule
/// lookup saturates instead of wrapping.
///
/// ### Parameters
/// - `state` - The node's own state, 0 or 1.
/// - `neighbor_sum` - Sum of the neighbors' states.
/// - `fanout` - Division fan-out `d` from the configuration.
#[inline]
pub fn configuration(state: u8, neighbor_sum: u32, fanout: usize) -> u8 {
    let raw = (fanout as u32 + 1) * u32::from(state) + neighbor_sum;
    raw.min(7) as u8
}

/// Convenience: configuration of node `id` given a pre-step state
/// snapshot, so a synchronous update never reads a state written
/// earlier in the same tick.
pub fn configuration_from_snapshot(
    states: &[u8],
    neighbors: &[NodeId],
    id: NodeId,
    fanout: usize,
) -> u8 {
    let sum: u32 = neighbors.iter().map(|&nb| u32::from(states[nb])).sum();
    configuration(states[id], sum, fanout)
}
