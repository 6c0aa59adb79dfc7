//! The graph-rewriting mitosis operation.
//!
//! Division replaces one node with `fanout` mutually-connected copies:
//! the original plus `fanout - 1` clones scattered around it. The
//! original's external edges are redistributed round-robin across the
//! copies, so the neighborhood is preserved exactly while the local
//! topology thickens into a clique.

use crate::config::{DIVISION_OFFSET_MAX, DIVISION_OFFSET_MIN};
use crate::graph::Graph;
use crate::node::GraphNode;
use crate::types::NodeId;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Divides node `idx` into `fanout` siblings.
///
/// 1. Spawns `fanout - 1` clones of `idx` (same state) at a random
///    angle and offset from its position, with a small random velocity.
/// 2. Connects all `fanout` siblings into a complete subgraph.
/// 3. Reattaches the i-th pre-division external neighbor to sibling
///    `i % fanout`, removing the stale edge to `idx`; neighbors whose
///    round-robin slot is `idx` itself keep their existing edge.
///
/// Adjacency stays symmetric and no duplicate edges are created; every
/// external edge is preserved exactly once.
///
/// ### Returns
/// The ids of the newly created clones, in creation order.
pub fn divide(graph: &mut Graph, idx: NodeId, fanout: usize, rng: &mut impl Rng) -> Vec<NodeId> {
    if fanout < 2 {
        return Vec::new();
    }

    let origin = graph.nodes[idx].pos;
    let state = graph.nodes[idx].state;
    let external = graph.nodes[idx].neighbors.clone();

    let mut siblings = Vec::with_capacity(fanout);
    siblings.push(idx);
    for _ in 1..fanout {
        let angle = rng.random_range(0.0..TAU);
        let offset = rng.random_range(DIVISION_OFFSET_MIN..=DIVISION_OFFSET_MAX);
        let mut node = GraphNode::new(origin + Vec2::new(angle.cos(), angle.sin()) * offset, state);
        node.vel = Vec2::new(rng.random_range(-0.5..=0.5), rng.random_range(-0.5..=0.5));
        siblings.push(graph.add_node(node));
    }

    for i in 0..siblings.len() {
        for j in (i + 1)..siblings.len() {
            graph.add_edge(siblings[i], siblings[j]);
        }
    }

    for (i, &nb) in external.iter().enumerate() {
        let target = siblings[i % fanout];
        // external was snapshotted before the clones existed, so nb is
        // never a sibling; when the target is idx the edge just stays.
        if target == idx {
            continue;
        }
        graph.remove_edge(idx, nb);
        graph.add_edge(target, nb);
    }

    siblings.split_off(1)
}
