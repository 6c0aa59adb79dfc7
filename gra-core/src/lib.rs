//! Core graph rewriting automaton (GRA) engine.
//!
//! A discrete-state automaton on a mutable graph: Wolfram-style rules
//! generalized from fixed lattices to arbitrary evolving topologies,
//! combined with a force-directed physics layout and a connected-component
//! fragment lifecycle.
//!
//! Main components:
//! - [`rule`] — 16-bit rule decoding and node configurations.
//! - [`graph`] — dense node arena with symmetric adjacency lists.
//! - [`seeds`] — initial topology builders.
//! - [`division`] — the graph-rewriting mitosis operation.
//! - [`physics`] — repulsion / spring / centering integrator.
//! - [`lifecycle`] — fragment detection, collapse and removal.
//! - [`engine`] — the [`engine::Automaton`] facade tying it all together.
//! - [`config`] — tunables and engine constants.
//! - [`types`] — shared type aliases and the stats snapshot.

pub mod config;
pub mod division;
pub mod engine;
pub mod graph;
pub mod lifecycle;
pub mod node;
pub mod physics;
pub mod rule;
pub mod seeds;
pub mod types;
