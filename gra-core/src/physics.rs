//! Force-directed layout integrator.
//!
//! One physics tick applies three forces, then a single damped
//! semi-implicit Euler step:
//!
//! 1. **Repulsion** — every unordered node pair pushes apart with
//!    magnitude `repulsion / (distance² + 1)`; the `+1` keeps the force
//!    finite at near-zero separation. O(n²), which is why the engine
//!    caps the node count.
//! 2. **Springs** — every edge pulls its endpoints toward the rest
//!    length with magnitude `spring_k · (distance − spring_rest)`.
//! 3. **Centering** — every node accelerates weakly toward the layout
//!    center (the world origin).

use crate::config::Config;
use crate::graph::Graph;
use glam::Vec2;

/// Advances the layout by one tick.
///
/// `damping` is the multiplicative per-tick velocity friction; the force
/// constants come from `cfg`. No sub-stepping is performed.
pub fn integrate(graph: &mut Graph, cfg: &Config, damping: f32) {
    let n = graph.nodes.len();
    if n == 0 {
        return;
    }

    let mut force = vec![Vec2::ZERO; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let delta = graph.nodes[i].pos - graph.nodes[j].pos;
            let push = delta.normalize_or_zero() * (cfg.repulsion / (delta.length_squared() + 1.0));
            force[i] += push;
            force[j] -= push;
        }
    }

    for i in 0..n {
        for &j in &graph.nodes[i].neighbors {
            // Each undirected edge contributes once.
            if j <= i {
                continue;
            }
            let delta = graph.nodes[j].pos - graph.nodes[i].pos;
            let pull = delta.normalize_or_zero() * (cfg.spring_k * (delta.length() - cfg.spring_rest));
            force[i] += pull;
            force[j] -= pull;
        }
    }

    for (i, node) in graph.nodes.iter().enumerate() {
        force[i] -= node.pos * cfg.center_pull;
    }

    for (node, f) in graph.nodes.iter_mut().zip(&force) {
        node.vel += *f;
        node.vel *= damping;
        node.pos += node.vel;
    }
}
