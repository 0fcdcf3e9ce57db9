#![warn(unreachable_pub, missing_debug_implementations)]

//! The core TDMA scheduling library for a single-channel, multi-hop
//! wireless mesh network. [`plan`] turns a connectivity graph and a set of
//! end-to-end traffic streams into a conflict-free [`Schedule`] over a
//! bounded number of timeslots.
//!
//! The pipeline has three stages: the [`graph`] model represents
//! connectivity, [`router`] expands each requested stream into one or two
//! chains of one-hop transmissions (a primary path, and optionally a
//! spatially redundant secondary), and [`schedule`] greedily assigns each
//! chain's hops to timeslots with block-atomic rollback on failure.

#[macro_use]
mod ident;

pub mod graph;
pub mod pathsearch;
pub mod router;
pub mod schedule;

#[cfg(test)]
pub(crate) mod testing;

identifier!(NodeId, usize);

pub use graph::{Topology, TopologyError};
pub use router::{route, RouterError, StreamBlock};
pub use schedule::{schedule as run_schedule, Activity, Schedule, ScheduleEntry, ScheduleOutcome};

/// The core entry point: routes `requested_streams` over `topology_edges`
/// into stream blocks, then greedily schedules them into `slot_count`
/// timeslots.
///
/// `multipath` enables spatial redundancy (a node-disjoint-preferring
/// secondary path per multi-hop stream); `extra_hops` bounds how much
/// longer than the primary path the secondary may be, and is ignored when
/// `multipath` is `false`.
///
/// Returns [`PlanError::Topology`] for a malformed topology, or
/// [`PlanError::Router`] the moment any requested stream turns out to be
/// unreachable. This implementation aborts the whole call rather than
/// skipping the unreachable stream and continuing (see DESIGN.md). Blocks
/// that route successfully but can't be scheduled within `slot_count` are
/// not an error: they're rolled back and reported in
/// [`ScheduleOutcome::unscheduled_blocks`].
pub fn plan(
    topology_edges: &[(usize, usize)],
    requested_streams: &[(usize, usize)],
    slot_count: usize,
    multipath: bool,
    extra_hops: usize,
) -> Result<ScheduleOutcome, PlanError> {
    let topology = Topology::new(topology_edges)?;
    let requested: Vec<(NodeId, NodeId)> = requested_streams
        .iter()
        .map(|&(src, dst)| (NodeId::new(src), NodeId::new(dst)))
        .collect();
    let blocks = route(&topology, &requested, multipath, extra_hops)?;
    Ok(run_schedule(&topology, &blocks, slot_count))
}

/// An error produced by [`plan`].
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The topology was malformed.
    #[error("invalid topology")]
    Topology(#[from] TopologyError),
    /// A requested stream could not be routed.
    #[error("failed to route a requested stream")]
    Router(#[from] RouterError),
}
