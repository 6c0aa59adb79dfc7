use crate::types::NodeId;
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct GraphNode {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Automaton state, 0 or 1.
    pub state: u8,
    /// Indices of adjacent nodes; kept symmetric by [`crate::graph::Graph`].
    pub neighbors: Vec<NodeId>,
    pub dying: bool,
    /// Ticks until removal; meaningful only while `dying`.
    pub dying_ttl: u32,
    /// Collapse target; meaningful only while `dying`.
    pub gravity_target: Vec2,
    /// Render opacity in [0, 1]; fades while dying.
    pub alpha: f32,
}

impl GraphNode {
    pub fn new(pos: Vec2, state: u8) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            state,
            neighbors: Vec::with_capacity(4),
            dying: false,
            dying_ttl: 0,
            gravity_target: Vec2::ZERO,
            alpha: 1.0,
        }
    }
}
