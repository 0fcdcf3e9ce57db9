//! Fixture topologies for tests, ported from the reference scheduler's
//! hardcoded examples.

/// The four-node "diamond": two triangles sharing the edge `{1, 2}`.
/// Used by the TX/RX-conflict scenarios.
pub(crate) fn diamond_topology() -> Vec<(usize, usize)> {
    vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]
}

/// The nine-node topology from the RTSS paper this scheduler implements.
/// Used by the multi-hop routing and redundancy scenarios.
pub(crate) fn rtss_paper_topology() -> Vec<(usize, usize)> {
    vec![
        (0, 1),
        (0, 3),
        (0, 5),
        (0, 7),
        (1, 3),
        (1, 5),
        (1, 7),
        (2, 4),
        (2, 6),
        (2, 7),
        (2, 8),
        (3, 5),
        (4, 5),
        (4, 6),
        (4, 7),
        (4, 8),
        (5, 7),
        (5, 8),
        (6, 8),
        (7, 8),
    ]
}
