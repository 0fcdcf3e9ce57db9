//! Rewrites requested end-to-end streams into routed stream blocks.
//!
//! Each requested `(src, dst)` stream becomes a primary block found by BFS,
//! and, when spatial redundancy is requested, a secondary block chosen by
//! depth-limited DFS, preferring a path whose interior nodes are disjoint
//! from the primary's. The router never mutates its input; it produces a
//! fresh block list.

use crate::graph::Topology;
use crate::pathsearch::{bfs, dfs_all_paths, shortest_path};
use crate::NodeId;

/// A single directed one-hop transmission: `0` transmits, `1` receives.
pub type Hop = (NodeId, NodeId);

/// An ordered, non-empty chain of one-hop transmissions realizing one path.
/// The destination of each hop equals the source of the next. This is the
/// atomic unit the scheduler operates on.
pub type StreamBlock = Vec<Hop>;

/// Converts each requested stream into one stream block (no redundancy, or
/// the stream is already one hop) or two (primary, then secondary), in the
/// same relative order as the input.
pub fn route(
    topology: &Topology,
    requested_streams: &[(NodeId, NodeId)],
    multipath: bool,
    extra_hops: usize,
) -> Result<Vec<StreamBlock>, RouterError> {
    let mut blocks = Vec::new();
    for &(src, dst) in requested_streams {
        if topology.has_edge(src, dst) {
            blocks.push(vec![(src, dst)]);
            continue;
        }

        let primary =
            bfs(topology, src, dst).ok_or(RouterError::UnreachableStream { src, dst })?;
        log::debug!("routed {src}->{dst} via primary path {primary:?}");
        blocks.push(path_to_block(&primary));

        if multipath {
            if let Some(secondary) = pick_secondary(topology, &primary, extra_hops) {
                log::debug!("routed {src}->{dst} via secondary path {secondary:?}");
                blocks.push(path_to_block(&secondary));
            } else {
                log::debug!(
                    "no secondary path for {src}->{dst}; falling back to temporal redundancy"
                );
            }
        }
    }
    Ok(blocks)
}

fn path_to_block(path: &[NodeId]) -> StreamBlock {
    path.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Picks a spatially redundant secondary path for `primary`, preferring one
/// whose interior nodes share nothing with `primary`'s interior. Returns
/// `None` if no alternative path exists at all, in which case the caller
/// falls back to temporal redundancy (retransmission in a later
/// slotframe, out of scope for this core).
fn pick_secondary(
    topology: &Topology,
    primary: &[NodeId],
    extra_hops: usize,
) -> Option<Vec<NodeId>> {
    let src = *primary.first()?;
    let dst = *primary.last()?;
    let max_len = primary.len() + extra_hops;
    let mut candidates = dfs_all_paths(topology, src, dst, max_len);
    if let Some(pos) = candidates.iter().position(|p| p == primary) {
        candidates.remove(pos);
    }
    if candidates.is_empty() {
        return None;
    }

    let middle = if primary.len() > 2 {
        &primary[1..primary.len() - 1]
    } else {
        &[][..]
    };
    let disjoint: Vec<Vec<NodeId>> = candidates
        .iter()
        .filter(|p| !p.iter().any(|n| middle.contains(n)))
        .cloned()
        .collect();
    if !disjoint.is_empty() {
        shortest_path(&disjoint)
    } else {
        shortest_path(&candidates)
    }
}

/// An error produced while routing requested streams.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// No path exists from `src` to `dst` in the topology.
    #[error("no path exists from {src} to {dst}")]
    UnreachableStream {
        /// The stream's source node.
        src: NodeId,
        /// The stream's destination node.
        dst: NodeId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn diamond() -> Topology {
        Topology::new(&testing::diamond_topology()).unwrap()
    }

    fn rtss() -> Topology {
        Topology::new(&testing::rtss_paper_topology()).unwrap()
    }

    #[test]
    fn one_hop_stream_is_a_singleton_block() {
        let topo = diamond();
        let blocks = route(&topo, &[(NodeId::new(0), NodeId::new(1))], false, 0).unwrap();
        assert_eq!(blocks, vec![vec![(NodeId::new(0), NodeId::new(1))]]);
    }

    #[test]
    fn multi_hop_stream_expands_along_bfs_path() {
        // S3: 6 -> 0 over the RTSS paper topology is multiple hops (3 -> 0,
        // also in S3's stream list, is a direct edge and takes the one-hop
        // shortcut instead, see DESIGN.md).
        let topo = rtss();
        let blocks = route(&topo, &[(NodeId::new(6), NodeId::new(0))], false, 0).unwrap();
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        // Consecutive hops share an endpoint, and every hop is a real edge (P8).
        for w in block.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
        for &(a, b) in block {
            assert!(topo.has_edge(a, b));
        }
        assert_eq!(block.first().unwrap().0, NodeId::new(6));
        assert_eq!(block.last().unwrap().1, NodeId::new(0));
    }

    #[test]
    fn unreachable_stream_is_an_error() {
        let topo = Topology::new(&[(0, 1), (2, 3)]).unwrap();
        let res = route(&topo, &[(NodeId::new(0), NodeId::new(3))], false, 0);
        assert!(matches!(
            res,
            Err(RouterError::UnreachableStream { src, dst })
                if src == NodeId::new(0) && dst == NodeId::new(3)
        ));
    }

    #[test]
    fn ordering_invariant_blocks_follow_input_order() {
        let topo = rtss();
        let blocks = route(
            &topo,
            &[
                (NodeId::new(3), NodeId::new(0)),
                (NodeId::new(6), NodeId::new(0)),
                (NodeId::new(4), NodeId::new(0)),
            ],
            false,
            0,
        )
        .unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].first().unwrap().0, NodeId::new(3));
        assert_eq!(blocks[1].first().unwrap().0, NodeId::new(6));
        assert_eq!(blocks[2].first().unwrap().0, NodeId::new(4));
    }

    #[test]
    fn redundancy_prefers_node_disjoint_secondary() {
        // S4 variant: stream 4 -> 0 is the multi-hop stream from S3's list
        // that actually needs BFS routing (3 -> 0 is a direct edge in this
        // topology, so it takes the one-hop shortcut and never reaches the
        // redundancy branch, see DESIGN.md).
        let topo = rtss();
        let blocks = route(
            &topo,
            &[(NodeId::new(4), NodeId::new(0))],
            true,
            2,
        )
        .unwrap();
        assert_eq!(blocks.len(), 2, "expected a primary and a secondary block");
        let primary: Vec<NodeId> = std::iter::once(blocks[0][0].0)
            .chain(blocks[0].iter().map(|&(_, d)| d))
            .collect();
        let secondary: Vec<NodeId> = std::iter::once(blocks[1][0].0)
            .chain(blocks[1].iter().map(|&(_, d)| d))
            .collect();
        assert_ne!(primary, secondary);
        // P9(a): secondary length bound.
        assert!(secondary.len() <= primary.len() + 2);
        // P9(b): if a node-disjoint alternative of bounded length exists, it's
        // the one chosen (the RTSS topology admits one for this stream).
        let middle = &primary[1..primary.len() - 1];
        let secondary_middle = &secondary[1..secondary.len().saturating_sub(1)];
        assert!(
            secondary_middle.iter().all(|n| !middle.contains(n)),
            "expected a node-disjoint secondary path"
        );
    }

    #[test]
    fn secondary_block_chains_correctly() {
        let topo = rtss();
        let blocks = route(&topo, &[(NodeId::new(4), NodeId::new(0))], true, 2).unwrap();
        for block in &blocks {
            for w in block.windows(2) {
                assert_eq!(w[0].1, w[1].0);
            }
            for &(a, b) in block {
                assert!(topo.has_edge(a, b));
            }
        }
    }
}
