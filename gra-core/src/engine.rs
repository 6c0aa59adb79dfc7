//! The [`Automaton`] facade.
//!
//! One instance exclusively owns a [`Graph`] and advances it through the
//! documented operations only: seeding, the discrete automaton tick, the
//! continuous physics tick, the two external stimuli, and the stats
//! query. Everything is single-threaded and synchronous; pacing is the
//! caller's job.

use crate::config::{Config, MAX_NODES, SCAN_INTERVAL};
use crate::division;
use crate::graph::Graph;
use crate::lifecycle;
use crate::physics;
use crate::rule::{self, RuleTable};
use crate::seeds::{self, SeedKind};
use crate::types::{NodeId, Stats};
use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f32::consts::TAU;

/// Number of pitch-class sectors around the layout center.
const PITCH_CLASSES: u8 = 12;

/// Nodes toggled per pitch-class flip, at most.
const FLIPS_PER_CALL: usize = 2;

pub struct Automaton {
    pub graph: Graph,
    pub cfg: Config,
    time: u64,
    divisions: u64,
}

impl Automaton {
    /// Creates an engine with an empty graph and default tunables.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            cfg: Config::default(),
            time: 0,
            divisions: 0,
        }
    }

    /// Replaces the graph with a fresh seed topology and resets the
    /// time and division counters.
    pub fn seed(&mut self, kind: SeedKind, rng: &mut impl Rng) {
        self.graph = seeds::build(kind, rng);
        self.time = 0;
        self.divisions = 0;
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    /// Advances the automaton by one discrete tick.
    ///
    /// No-op on an empty or at-cap graph. Otherwise:
    ///
    /// 1. Every non-dying node's next state and divide flag are looked
    ///    up against a pre-step state snapshot (synchronous update).
    /// 2. All next states are committed at once.
    /// 3. The first node in index order with its divide flag set
    ///    divides, capacity permitting; at most one division per tick
    ///    bounds the growth rate.
    /// 4. Every [`SCAN_INTERVAL`]-th tick also runs the fragment scan.
    ///
    /// ### Returns
    /// The ids of any nodes created by division this tick.
    pub fn step(&mut self, rng: &mut impl Rng) -> Vec<NodeId> {
        if self.graph.is_empty() || self.graph.len() >= MAX_NODES {
            return Vec::new();
        }

        let table = RuleTable(self.cfg.rule);
        let states: Vec<u8> = self.graph.nodes.iter().map(|n| n.state).collect();
        let mut next = states.clone();
        let mut divide_flags = vec![false; states.len()];

        for (id, node) in self.graph.nodes.iter().enumerate() {
            if node.dying {
                continue;
            }
            let config =
                rule::configuration_from_snapshot(&states, &node.neighbors, id, self.cfg.fanout);
            next[id] = table.next_state(config);
            divide_flags[id] = table.divides(config);
        }

        for (node, &state) in self.graph.nodes.iter_mut().zip(&next) {
            node.state = state;
        }

        let mut new_ids = Vec::new();
        let has_capacity =
            self.cfg.fanout >= 2 && self.graph.len() + self.cfg.fanout - 1 <= MAX_NODES;
        if has_capacity
            && let Some(idx) = divide_flags.iter().position(|&flag| flag)
        {
            new_ids = division::divide(&mut self.graph, idx, self.cfg.fanout, rng);
            self.divisions += 1;
        }

        self.time += 1;
        if self.time % SCAN_INTERVAL == 0 {
            lifecycle::scan(&mut self.graph);
        }
        new_ids
    }

    /// Advances the continuous layout by one physics tick: dying-node
    /// collapse, force integration, then fade / countdown / removal.
    pub fn physics(&mut self, damping: f32) {
        lifecycle::collapse(&mut self.graph);
        physics::integrate(&mut self.graph, &self.cfg, damping);
        lifecycle::decay(&mut self.graph);
    }

    /// Kicks every node with a random-direction velocity of the given
    /// magnitude.
    pub fn impulse(&mut self, strength: f32, rng: &mut impl Rng) {
        for node in &mut self.graph.nodes {
            let angle = rng.random_range(0.0..TAU);
            node.vel += Vec2::new(angle.cos(), angle.sin()) * strength;
        }
    }

    /// Toggles the state of up to [`FLIPS_PER_CALL`] randomly-chosen
    /// nodes whose angular sector around the layout center matches the
    /// pitch class `pc` (0..12).
    pub fn flip_by_pitch_class(&mut self, pc: u8, rng: &mut impl Rng) {
        let candidates: Vec<NodeId> = (0..self.graph.len())
            .filter(|&id| pitch_sector(self.graph.nodes[id].pos) == pc)
            .collect();
        let chosen: Vec<NodeId> = candidates
            .choose_multiple(rng, FLIPS_PER_CALL)
            .copied()
            .collect();
        for id in chosen {
            self.graph.nodes[id].state ^= 1;
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            time: self.time,
            nodes: self.graph.len(),
            edges: self.graph.edge_count(),
            alive: self.graph.nodes.iter().filter(|n| n.state == 1).count(),
            divisions: self.divisions,
        }
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a position to one of the 12 angular sectors around the layout
/// center, matching the pitch-class circle.
fn pitch_sector(pos: Vec2) -> u8 {
    let angle = pos.y.atan2(pos.x).rem_euclid(TAU);
    ((angle / TAU * f32::from(PITCH_CLASSES)) as u8).min(PITCH_CLASSES - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn seeded(kind: SeedKind) -> (Automaton, StdRng) {
        let mut rng = rng();
        let mut auto = Automaton::new();
        auto.seed(kind, &mut rng);
        (auto, rng)
    }

    #[test]
    fn step_on_empty_graph_is_a_no_op() {
        let mut auto = Automaton::new();
        let new_ids = auto.step(&mut rng());

        assert!(new_ids.is_empty());
        assert_eq!(auto.time(), 0);
    }

    #[test]
    fn triangle_step_follows_rule_2182_synchronously() {
        let (mut auto, mut rng) = seeded(SeedKind::Triangle);
        auto.cfg.rule = 2182;

        // Pre-step states {1, 0, 1}; configs 4·state + sum of the other
        // two: node 0 -> 5, node 1 -> 2, node 2 -> 5.
        // R of 2182 (low byte 0x86): R(5) = 0, R(2) = 1.
        auto.step(&mut rng);

        let states: Vec<u8> = auto.graph.nodes.iter().map(|n| n.state).collect();
        assert_eq!(states, vec![0, 1, 0]);

        // R' of 2182 (high byte 0x08) fires only on config 3: no division.
        assert_eq!(auto.graph.len(), 3);
        assert_eq!(auto.stats().divisions, 0);
        assert_eq!(auto.time(), 1);
    }

    #[test]
    fn division_trigger_splits_first_matching_node() {
        let (mut auto, mut rng) = seeded(SeedKind::Triangle);
        // Same R as 2182, but R' fires on config 5 (nodes 0 and 2):
        // high byte bit 5 -> rule 0x2086.
        auto.cfg.rule = (1 << 13) | 0x86;

        let new_ids = auto.step(&mut rng);

        // Only the first matching node (index 0) divides.
        assert_eq!(new_ids, vec![3, 4]);
        assert_eq!(auto.graph.len(), 5);
        assert_eq!(auto.stats().divisions, 1);
        assert!(auto.graph.is_symmetric());

        // Round-robin redistribution of node 0's two external edges.
        assert!(auto.graph.has_edge(0, 1));
        assert!(auto.graph.has_edge(3, 2));
        assert!(!auto.graph.has_edge(0, 2));
    }

    #[test]
    fn always_dividing_rule_never_exceeds_node_cap() {
        let (mut auto, mut rng) = seeded(SeedKind::Triangle);
        // R' = 1 for every configuration.
        auto.cfg.rule = 0xFF00;

        for _ in 0..1500 {
            auto.step(&mut rng);
            assert!(auto.graph.len() <= MAX_NODES);
        }
        // Growth stalls once one more division would overflow the cap,
        // without error, whatever the configured fanout.
        assert!(auto.graph.len() + auto.cfg.fanout - 1 > MAX_NODES);
        assert!(auto.graph.len() < MAX_NODES);
    }

    #[test]
    fn fragment_dies_through_step_and_physics() {
        let mut rng = rng();
        let mut auto = Automaton::new();
        // K4 with node 0 cut loose: one isolated fragment plus a
        // surviving 3-node constellation.
        auto.seed(SeedKind::Square, &mut rng);
        for nb in [1, 2, 3] {
            auto.graph.remove_edge(0, nb);
        }
        // Keep states inert so no division interferes.
        auto.cfg.rule = 0;

        // The scan runs on the 5th discrete tick.
        for _ in 0..5 {
            auto.step(&mut rng);
        }
        assert!(auto.graph.nodes[0].dying);
        assert!(auto.graph.nodes.iter().skip(1).all(|n| !n.dying));

        for _ in 0..60 {
            auto.physics(0.92);
        }
        assert_eq!(auto.graph.len(), 3);
        assert!(auto.graph.is_symmetric());
        assert_eq!(auto.graph.edge_count(), 3);
    }

    #[test]
    fn impulse_kicks_every_node() {
        let (mut auto, mut rng) = seeded(SeedKind::Ring6);

        auto.impulse(3.0, &mut rng);

        for node in &auto.graph.nodes {
            assert!((node.vel.length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn flip_by_pitch_class_toggles_at_most_two_in_sector() {
        let (mut auto, mut rng) = seeded(SeedKind::Diatonic);
        let before: Vec<u8> = auto.graph.nodes.iter().map(|n| n.state).collect();

        // Node 0 sits at angle 0 -> sector 0.
        auto.flip_by_pitch_class(0, &mut rng);

        let after: Vec<u8> = auto.graph.nodes.iter().map(|n| n.state).collect();
        let flipped: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();

        assert!(!flipped.is_empty());
        assert!(flipped.len() <= FLIPS_PER_CALL);
        for &i in &flipped {
            assert_eq!(pitch_sector(auto.graph.nodes[i].pos), 0);
        }
    }

    #[test]
    fn flip_in_empty_sector_changes_nothing() {
        let (mut auto, mut rng) = seeded(SeedKind::Triangle);
        let before: Vec<u8> = auto.graph.nodes.iter().map(|n| n.state).collect();

        // Triangle nodes sit in sectors 0, 4 and 8; sector 2 is empty.
        auto.flip_by_pitch_class(2, &mut rng);

        let after: Vec<u8> = auto.graph.nodes.iter().map(|n| n.state).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn stats_reports_counts_and_counters() {
        let (mut auto, mut rng) = seeded(SeedKind::Petersen);

        let stats = auto.stats();
        assert_eq!(stats.time, 0);
        assert_eq!(stats.nodes, 10);
        assert_eq!(stats.edges, 15);
        assert_eq!(stats.alive, 5);
        assert_eq!(stats.divisions, 0);

        auto.cfg.rule = 0xFF00;
        auto.step(&mut rng);
        let stats = auto.stats();
        assert_eq!(stats.time, 1);
        assert_eq!(stats.divisions, 1);
        assert_eq!(stats.nodes, 12);
    }

    #[test]
    fn seed_resets_counters() {
        let (mut auto, mut rng) = seeded(SeedKind::Triangle);
        auto.cfg.rule = 0xFF00;
        auto.step(&mut rng);
        assert_eq!(auto.time(), 1);

        auto.seed(SeedKind::Ring8, &mut rng);
        let stats = auto.stats();
        assert_eq!(stats.time, 0);
        assert_eq!(stats.divisions, 0);
        assert_eq!(stats.nodes, 8);
    }
}
