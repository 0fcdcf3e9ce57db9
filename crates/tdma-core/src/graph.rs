//! The connectivity graph the router and scheduler operate over: an
//! undirected simple graph over integer node identifiers.

use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::FxHashMap;

use crate::NodeId;

/// An undirected, simple connectivity graph.
///
/// Nodes are implicit: the node set is the union of endpoints appearing in
/// the constructor's edge list. Adjacency is symmetric by construction.
/// Callers never need to list both `(u, v)` and `(v, u)`.
#[derive(Debug, Clone)]
pub struct Topology {
    graph: UnGraph<NodeId, ()>,
    id2idx: FxHashMap<NodeId, NodeIndex>,
}

impl Topology {
    /// Builds a topology from a list of unordered node-id pairs.
    ///
    /// Correctness properties:
    ///
    /// - An edge may not connect a node to itself.
    /// - Parallel edges (including `(v, u)` repeating an earlier `(u, v)`)
    ///   are deduplicated silently, not rejected.
    pub fn new(edges: &[(usize, usize)]) -> Result<Self, TopologyError> {
        let mut graph = UnGraph::default();
        let mut id2idx: FxHashMap<NodeId, NodeIndex> = FxHashMap::default();
        for &(u, v) in edges {
            let (u, v) = (NodeId::new(u), NodeId::new(v));
            if u == v {
                return Err(TopologyError::SelfLoop(u));
            }
            let ui = *id2idx.entry(u).or_insert_with(|| graph.add_node(u));
            let vi = *id2idx.entry(v).or_insert_with(|| graph.add_node(v));
            if graph.find_edge(ui, vi).is_none() {
                graph.add_edge(ui, vi, ());
            }
        }
        Ok(Self { graph, id2idx })
    }

    /// Returns `N(u)`, the neighbors of `u`, in deterministic ascending
    /// order. Returns an empty vector if `u` does not appear in the
    /// topology.
    pub fn neighbors(&self, u: NodeId) -> Vec<NodeId> {
        let Some(&idx) = self.id2idx.get(&u) else {
            return Vec::new();
        };
        let mut ns: Vec<NodeId> = self.graph.neighbors(idx).map(|i| self.graph[i]).collect();
        ns.sort_unstable();
        ns
    }

    /// True iff `{u, v}` is an edge of the topology.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        match (self.id2idx.get(&u), self.id2idx.get(&v)) {
            (Some(&ui), Some(&vi)) => self.graph.find_edge(ui, vi).is_some(),
            _ => false,
        }
    }

    /// All node identifiers appearing in the topology, in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut ns: Vec<NodeId> = self.graph.node_weights().copied().collect();
        ns.sort_unstable();
        ns
    }
}

/// An error produced while constructing a [`Topology`].
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    /// A node was connected to itself.
    #[error("node {0} is adjacent to itself")]
    SelfLoop(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn neighbors_are_sorted_and_symmetric() {
        let topo = Topology::new(&testing::diamond_topology()).unwrap();
        assert_eq!(
            topo.neighbors(NodeId::new(1)),
            vec![NodeId::new(0), NodeId::new(2), NodeId::new(3)]
        );
        assert!(topo.has_edge(NodeId::new(1), NodeId::new(2)));
        assert!(topo.has_edge(NodeId::new(2), NodeId::new(1)));
    }

    #[test]
    fn has_edge_false_for_unconnected_pair() {
        let topo = Topology::new(&testing::diamond_topology()).unwrap();
        assert!(!topo.has_edge(NodeId::new(0), NodeId::new(3)));
    }

    #[test]
    fn has_edge_false_for_unknown_node() {
        let topo = Topology::new(&testing::diamond_topology()).unwrap();
        assert!(!topo.has_edge(NodeId::new(0), NodeId::new(99)));
    }

    #[test]
    fn self_loop_rejected() {
        let res = Topology::new(&[(0, 1), (2, 2)]);
        assert!(matches!(res, Err(TopologyError::SelfLoop(id)) if id == NodeId::new(2)));
    }

    #[test]
    fn parallel_edges_deduplicated() {
        let topo = Topology::new(&[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(topo.neighbors(NodeId::new(0)), vec![NodeId::new(1)]);
        assert_eq!(topo.neighbors(NodeId::new(1)), vec![NodeId::new(0)]);
    }

    #[test]
    fn nodes_lists_every_endpoint() {
        let topo = Topology::new(&testing::diamond_topology()).unwrap();
        assert_eq!(
            topo.nodes(),
            vec![
                NodeId::new(0),
                NodeId::new(1),
                NodeId::new(2),
                NodeId::new(3)
            ]
        );
    }
}
