//! Fragment lifecycle: ALIVE → DYING → REMOVED.
//!
//! Every few discrete ticks a BFS component scan runs over the graph.
//! Connected components of 1–2 nodes ("fragments") are marked dying as a
//! unit; components of 3+ nodes ("constellations") persist indefinitely.
//! Dying nodes collapse toward their fragment centroid and fade over
//! [`DYING_TTL`] physics ticks, then are spliced out of the arena.

use crate::config::{ALPHA_DECAY, DYING_TTL};
use crate::graph::Graph;
use crate::types::NodeId;
use glam::Vec2;
use std::collections::VecDeque;

/// Largest component size still considered a fragment.
const FRAGMENT_MAX: usize = 2;

/// BFS connected-components pass over the non-dying nodes.
///
/// Each fragment found transitions to DYING as a unit: every member gets
/// `dying_ttl = DYING_TTL`, `gravity_target =` the fragment's mean
/// position at marking time, and `alpha = 1.0`.
pub fn scan(graph: &mut Graph) {
    let n = graph.nodes.len();
    let mut visited = vec![false; n];

    for start in 0..n {
        if visited[start] || graph.nodes[start].dying {
            continue;
        }

        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        while let Some(cur) = queue.pop_front() {
            for &nb in &graph.nodes[cur].neighbors {
                if !visited[nb] && !graph.nodes[nb].dying {
                    visited[nb] = true;
                    component.push(nb);
                    queue.push_back(nb);
                }
            }
        }

        if component.len() <= FRAGMENT_MAX {
            let centroid = component
                .iter()
                .map(|&id| graph.nodes[id].pos)
                .sum::<Vec2>()
                / component.len() as f32;
            for &id in &component {
                let node = &mut graph.nodes[id];
                node.dying = true;
                node.dying_ttl = DYING_TTL;
                node.gravity_target = centroid;
                node.alpha = 1.0;
            }
        }
    }
}

/// Accelerates each dying node toward its gravity target.
///
/// The pull strengthens as the countdown falls, so the collapse speeds
/// up rather than easing out. Runs once per physics tick, before force
/// integration.
pub fn collapse(graph: &mut Graph) {
    for node in &mut graph.nodes {
        if !node.dying {
            continue;
        }
        let spent = 1.0 - node.dying_ttl as f32 / DYING_TTL as f32;
        let strength = 0.02 + 0.3 * spent * spent;
        node.vel += (node.gravity_target - node.pos) * strength;
    }
}

/// Fades and counts down every dying node, then removes the expired
/// ones (alpha ≤ 0 or ttl = 0).
///
/// Removal iterates in descending index order so each splice leaves the
/// remaining pending indices valid.
pub fn decay(graph: &mut Graph) {
    let mut expired: Vec<NodeId> = Vec::new();
    for (id, node) in graph.nodes.iter_mut().enumerate() {
        if !node.dying {
            continue;
        }
        node.alpha -= ALPHA_DECAY;
        node.dying_ttl = node.dying_ttl.saturating_sub(1);
        if node.alpha <= 0.0 || node.dying_ttl == 0 {
            expired.push(id);
        }
    }
    for &id in expired.iter().rev() {
        graph.remove_node(id);
    }
}
