//! Dense node arena with symmetric adjacency lists.
//!
//! All structural mutation (edge insertion, node removal, index
//! renumbering) is confined to this module so the two graph invariants
//! hold everywhere else:
//!
//! - adjacency is symmetric: `b ∈ a.neighbors` iff `a ∈ b.neighbors`,
//!   with no self-loops and no duplicate edges;
//! - node indices are dense `0..len`, renumbered on every removal.

use crate::node::GraphNode;
use crate::types::NodeId;

#[derive(Debug, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
}

impl Graph {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node and returns its index.
    pub fn add_node(&mut self, node: GraphNode) -> NodeId {
        let id: NodeId = self.nodes.len();
        self.nodes.push(node);
        id
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes[a].neighbors.contains(&b)
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.nodes[id].neighbors.len()
    }

    /// Inserts the undirected edge `a`–`b`.
    ///
    /// Self-loops and duplicate edges are silently ignored, so callers
    /// may attempt insertions without pre-checking.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if a == b || self.has_edge(a, b) {
            return;
        }
        self.nodes[a].neighbors.push(b);
        self.nodes[b].neighbors.push(a);
    }

    /// Removes the undirected edge `a`–`b` if present.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a].neighbors.retain(|&nb| nb != b);
        self.nodes[b].neighbors.retain(|&nb| nb != a);
    }

    /// Number of undirected edges: half the summed degree.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Splices out the node at `idx`, drops every reference to it, and
    /// decrements every surviving neighbor index greater than `idx` so
    /// the arena stays dense.
    ///
    /// When removing several nodes in one batch, callers must proceed in
    /// descending index order so earlier removals do not invalidate the
    /// later indices.
    pub fn remove_node(&mut self, idx: NodeId) {
        self.nodes.remove(idx);
        for node in &mut self.nodes {
            node.neighbors.retain(|&nb| nb != idx);
            for nb in &mut node.neighbors {
                if *nb > idx {
                    *nb -= 1;
                }
            }
        }
    }

    /// Checks adjacency symmetry; intended for tests and debug asserts.
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().enumerate().all(|(i, node)| {
            node.neighbors
                .iter()
                .all(|&nb| nb < self.nodes.len() && self.nodes[nb].neighbors.contains(&i))
        })
    }

    /// Checks for self-loops; intended for tests and debug asserts.
    pub fn has_self_loop(&self) -> bool {
        self.nodes
            .iter()
            .enumerate()
            .any(|(i, node)| node.neighbors.contains(&i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn node_at(x: f32, y: f32) -> GraphNode {
        GraphNode::new(Vec2::new(x, y), 0)
    }

    fn path_graph(n: usize) -> Graph {
        let mut graph = Graph::new();
        for i in 0..n {
            graph.add_node(node_at(i as f32, 0.0));
        }
        for i in 0..n.saturating_sub(1) {
            graph.add_edge(i, i + 1);
        }
        graph
    }

    #[test]
    fn add_edge_is_symmetric() {
        let mut graph = Graph::new();
        graph.add_node(node_at(0.0, 0.0));
        graph.add_node(node_at(1.0, 0.0));

        graph.add_edge(0, 1);

        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert!(graph.is_symmetric());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_rejects_self_loops_and_duplicates() {
        let mut graph = Graph::new();
        graph.add_node(node_at(0.0, 0.0));
        graph.add_node(node_at(1.0, 0.0));

        graph.add_edge(0, 0);
        assert!(!graph.has_self_loop());
        assert_eq!(graph.edge_count(), 0);

        graph.add_edge(0, 1);
        graph.add_edge(1, 0);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), 1);
    }

    #[test]
    fn remove_edge_drops_both_directions() {
        let mut graph = path_graph(3);
        graph.remove_edge(1, 0);

        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.has_edge(1, 2));
        assert!(graph.is_symmetric());
    }

    #[test]
    fn remove_node_renumbers_survivors() {
        // Path 0-1-2-3, remove node 1: survivors are 0, 2->1, 3->2
        // and the only remaining edge is old 2-3, now 1-2.
        let mut graph = path_graph(4);
        graph.remove_node(1);

        assert_eq!(graph.len(), 3);
        assert!(graph.is_symmetric());
        assert!(!graph.has_self_loop());

        assert!(graph.nodes[0].neighbors.is_empty());
        assert!(graph.has_edge(1, 2));
        assert_eq!(graph.edge_count(), 1);

        // No surviving reference may point at or beyond the new length.
        for node in &graph.nodes {
            for &nb in &node.neighbors {
                assert!(nb < graph.len());
            }
        }
    }

    #[test]
    fn remove_node_in_descending_order_keeps_indices_valid() {
        let mut graph = path_graph(5);
        // Removing 4 then 2 must leave the path 0-1-2 intact (old 0-1-2).
        graph.remove_node(4);
        graph.remove_node(2);

        assert_eq!(graph.len(), 3);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 2));
        assert!(graph.is_symmetric());
    }
}
