//! Initial topology builders.
//!
//! Every seed places its nodes around the world origin with alternating
//! automaton states (`1, 0, 1, ...`), except [`SeedKind::Random`], whose
//! states and edges are drawn from the injected RNG.

use crate::graph::Graph;
use crate::node::GraphNode;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Radius of the circle the seed nodes are placed on.
const SEED_RADIUS: f32 = 80.0;

/// Inner-ring radius for the Petersen graph.
const PETERSEN_INNER_RADIUS: f32 = 40.0;

/// Node count for the randomized seed.
const RANDOM_SEED_NODES: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedKind {
    /// Complete graph K3.
    Triangle,
    /// Complete graph K4.
    Square,
    /// Complete graph K5.
    Pentagon,
    /// Complete graph K7, one node per scale degree.
    Diatonic,
    /// 6-cycle.
    Ring6,
    /// 8-cycle.
    Ring8,
    /// The Petersen graph: outer 5-cycle, inner pentagram, 5 spokes.
    Petersen,
    /// Randomized near-3-regular graph.
    Random,
}

impl SeedKind {
    pub const ALL: [SeedKind; 8] = [
        SeedKind::Triangle,
        SeedKind::Square,
        SeedKind::Pentagon,
        SeedKind::Diatonic,
        SeedKind::Ring6,
        SeedKind::Ring8,
        SeedKind::Petersen,
        SeedKind::Random,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeedKind::Triangle => "triangle",
            SeedKind::Square => "square",
            SeedKind::Pentagon => "pentagon",
            SeedKind::Diatonic => "diatonic",
            SeedKind::Ring6 => "ring6",
            SeedKind::Ring8 => "ring8",
            SeedKind::Petersen => "petersen",
            SeedKind::Random => "random",
        }
    }
}

/// Builds a fresh graph for the given seed kind.
pub fn build(kind: SeedKind, rng: &mut impl Rng) -> Graph {
    match kind {
        SeedKind::Triangle => complete(3),
        SeedKind::Square => complete(4),
        SeedKind::Pentagon => complete(5),
        SeedKind::Diatonic => complete(7),
        SeedKind::Ring6 => ring(6),
        SeedKind::Ring8 => ring(8),
        SeedKind::Petersen => petersen(),
        SeedKind::Random => random_near_regular(RANDOM_SEED_NODES, 3, rng),
    }
}

fn circle_pos(i: usize, n: usize, radius: f32) -> Vec2 {
    let angle = i as f32 / n as f32 * TAU;
    Vec2::new(angle.cos(), angle.sin()) * radius
}

fn alternating_state(i: usize) -> u8 {
    if i % 2 == 0 { 1 } else { 0 }
}

fn ring_nodes(n: usize, radius: f32) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_node(GraphNode::new(circle_pos(i, n, radius), alternating_state(i)));
    }
    graph
}

fn complete(n: usize) -> Graph {
    let mut graph = ring_nodes(n, SEED_RADIUS);
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(i, j);
        }
    }
    graph
}

fn ring(n: usize) -> Graph {
    let mut graph = ring_nodes(n, SEED_RADIUS);
    for i in 0..n {
        graph.add_edge(i, (i + 1) % n);
    }
    graph
}

/// Fixed Petersen construction: nodes 0..5 are the outer 5-cycle, nodes
/// 5..10 the inner 5-cycle with step-2 chords, plus 5 connecting spokes.
fn petersen() -> Graph {
    let mut graph = Graph::new();
    for i in 0..5 {
        graph.add_node(GraphNode::new(circle_pos(i, 5, SEED_RADIUS), alternating_state(i)));
    }
    for i in 0..5 {
        graph.add_node(GraphNode::new(
            circle_pos(i, 5, PETERSEN_INNER_RADIUS),
            alternating_state(5 + i),
        ));
    }
    for i in 0..5 {
        graph.add_edge(i, (i + 1) % 5);
        graph.add_edge(5 + i, 5 + (i + 2) % 5);
        graph.add_edge(i, 5 + i);
    }
    graph
}

/// Greedy random edge addition under a degree cap: repeatedly draws a
/// node pair and connects it unless either endpoint is at `max_degree`.
fn random_near_regular(n: usize, max_degree: usize, rng: &mut impl Rng) -> Graph {
    let mut graph = Graph::new();
    for _ in 0..n {
        let angle = rng.random_range(0.0..TAU);
        let radius = rng.random_range(0.0..=SEED_RADIUS);
        let pos = Vec2::new(angle.cos(), angle.sin()) * radius;
        graph.add_node(GraphNode::new(pos, rng.random_range(0..=1u8)));
    }
    for _ in 0..n * n {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if a == b || graph.degree(a) >= max_degree || graph.degree(b) >= max_degree {
            continue;
        }
        graph.add_edge(a, b);
    }
    graph
}
