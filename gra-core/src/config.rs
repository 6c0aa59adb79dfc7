/// Hard cap on the node count; keeps the O(n²) repulsion pass tractable.
pub const MAX_NODES: usize = 2000;

/// Fragment scan period, in discrete ticks.
pub const SCAN_INTERVAL: u64 = 5;

/// Countdown assigned to a node when it is marked dying (~1 s at 60 ticks/s).
pub const DYING_TTL: u32 = 60;

/// Per-physics-tick alpha fade for dying nodes.
pub const ALPHA_DECAY: f32 = 1.0 / 60.0;

/// Offset range for freshly divided nodes, in world units.
pub const DIVISION_OFFSET_MIN: f32 = 20.0;
pub const DIVISION_OFFSET_MAX: f32 = 50.0;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub rule: u16,
    pub fanout: usize,
    pub repulsion: f32,
    pub spring_k: f32,
    pub spring_rest: f32,
    pub center_pull: f32,
    pub damping: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule: 2182,
            fanout: 3,
            repulsion: 900.0,
            spring_k: 0.03,
            spring_rest: 40.0,
            center_pull: 0.002,
            damping: 0.92,
        }
    }
}
