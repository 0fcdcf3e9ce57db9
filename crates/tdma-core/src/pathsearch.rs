//! Shortest-path BFS and depth-limited all-paths DFS over a [`Topology`].

use std::collections::{HashSet, VecDeque};

use rustc_hash::FxHashMap;

use crate::graph::Topology;
use crate::NodeId;

/// Returns a shortest path `[src, ..., dst]`, or `None` if `dst` is
/// unreachable from `src`. `src == dst` returns `Some(vec![src])`.
///
/// Ties between equally short paths are broken by `Topology::neighbors`'s
/// ascending iteration order, so the result is deterministic.
pub fn bfs(topology: &Topology, src: NodeId, dst: NodeId) -> Option<Vec<NodeId>> {
    if src == dst {
        return Some(vec![src]);
    }
    let mut parent: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut visited: HashSet<NodeId> = HashSet::from([src]);
    let mut frontier = VecDeque::from([src]);
    while let Some(u) = frontier.pop_front() {
        for v in topology.neighbors(u) {
            if !visited.insert(v) {
                continue;
            }
            parent.insert(v, u);
            if v == dst {
                return Some(reconstruct(dst, src, &parent));
            }
            frontier.push_back(v);
        }
    }
    None
}

fn reconstruct(dst: NodeId, src: NodeId, parent: &FxHashMap<NodeId, NodeId>) -> Vec<NodeId> {
    let mut path = vec![dst];
    let mut cur = dst;
    while cur != src {
        cur = parent[&cur];
        path.push(cur);
    }
    path.reverse();
    path
}

/// Enumerates every simple path from `src` to `dst` whose node count is at
/// most `max_len`, in depth-first order over `Topology::neighbors`.
pub fn dfs_all_paths(
    topology: &Topology,
    src: NodeId,
    dst: NodeId,
    max_len: usize,
) -> Vec<Vec<NodeId>> {
    let mut out = Vec::new();
    let mut path = vec![src];
    walk(topology, src, dst, max_len, &mut path, &mut out);
    out
}

fn walk(
    topology: &Topology,
    cur: NodeId,
    dst: NodeId,
    max_len: usize,
    path: &mut Vec<NodeId>,
    out: &mut Vec<Vec<NodeId>>,
) {
    if cur == dst {
        // A simple path can never revisit `dst`, so nothing past this point
        // can extend back to it; recursing further would only waste work.
        out.push(path.clone());
        return;
    }
    if path.len() >= max_len {
        return;
    }
    for next in topology.neighbors(cur) {
        if path.contains(&next) {
            continue;
        }
        path.push(next);
        walk(topology, next, dst, max_len, path, out);
        path.pop();
    }
}

/// Returns the path with the fewest nodes; ties are broken by first
/// occurrence in `paths`.
pub fn shortest_path(paths: &[Vec<NodeId>]) -> Option<Vec<NodeId>> {
    paths.iter().min_by_key(|p| p.len()).cloned()
}
