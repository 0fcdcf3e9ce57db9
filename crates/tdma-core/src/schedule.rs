//! Conflict model and greedy scheduler: assigns timeslots to every one-hop
//! transmission in a routed stream block such that no node is asked to do
//! two things at once, and no TX/RX pair of adjacent nodes collides.

use crate::graph::Topology;
use crate::router::StreamBlock;
use crate::NodeId;

/// Whether a node transmits or receives in a timeslot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Activity {
    /// The node is transmitting.
    Tx,
    /// The node is receiving.
    Rx,
}

/// One `(timeslot, node, activity)` fact in a [`Schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleEntry {
    /// The timeslot this entry occupies, in `[0, slot_count)`.
    pub timeslot: usize,
    /// The node performing the activity.
    pub node: NodeId,
    /// What the node is doing.
    pub activity: Activity,
}

/// An append-only, order-preserving sequence of [`ScheduleEntry`] facts.
///
/// A scheduled one-hop transmission `(src, dst)` at timeslot `t` always
/// contributes exactly two consecutive entries: `(t, src, Tx)` then
/// `(t, dst, Rx)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// All entries, in emission order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Aggregates consecutive TX/RX pairs into `(timeslot, src, dst)` rows.
    /// This projection is informational only (nothing in the core consumes
    /// it) and exists purely for human-readable display.
    pub fn to_human_readable(&self) -> Vec<(usize, NodeId, NodeId)> {
        self.entries
            .chunks(2)
            .filter_map(|pair| match pair {
                [tx, rx] if tx.activity == Activity::Tx && rx.activity == Activity::Rx => {
                    Some((tx.timeslot, tx.node, rx.node))
                }
                _ => None,
            })
            .collect()
    }

    fn push_hop(&mut self, timeslot: usize, src: NodeId, dst: NodeId) {
        self.entries.push(ScheduleEntry {
            timeslot,
            node: src,
            activity: Activity::Tx,
        });
        self.entries.push(ScheduleEntry {
            timeslot,
            node: dst,
            activity: Activity::Rx,
        });
    }

    fn pop_hop(&mut self) {
        self.entries.pop();
        self.entries.pop();
    }

    fn is_busy(&self, timeslot: usize, node: NodeId) -> bool {
        self.entries
            .iter()
            .any(|e| e.timeslot == timeslot && e.node == node)
    }

    fn has_activity(&self, timeslot: usize, node: NodeId, activity: Activity) -> bool {
        self.entries
            .iter()
            .any(|e| e.timeslot == timeslot && e.node == node && e.activity == activity)
    }
}

/// True iff scheduling `(src, dst)` at `timeslot` against the given
/// (already-finalized) prior schedule would violate unicity or
/// interference.
///
/// This is checked against the schedule *before* the candidate's own two
/// entries are appended. That ordering is what lets the interference checks
/// below range over `N(src)`/`N(dst)` without excluding `dst`/`src`
/// themselves: since the candidate isn't in `schedule` yet, `dst` can only
/// already hold a conflicting RX entry from a genuinely different
/// transmission, which the unicity check below catches regardless.
fn has_conflict(schedule: &Schedule, topology: &Topology, timeslot: usize, src: NodeId, dst: NodeId) -> bool {
    if schedule.is_busy(timeslot, src) || schedule.is_busy(timeslot, dst) {
        return true;
    }
    if topology
        .neighbors(src)
        .iter()
        .any(|&w| schedule.has_activity(timeslot, w, Activity::Rx))
    {
        return true;
    }
    if topology
        .neighbors(dst)
        .iter()
        .any(|&w| schedule.has_activity(timeslot, w, Activity::Tx))
    {
        return true;
    }
    false
}

/// The result of running the greedy scheduler over a routed stream-block
/// list: the finalized schedule, plus the index (into the input block list)
/// of every block that could not be placed within `slot_count`.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// The finalized schedule.
    pub schedule: Schedule,
    /// Indices of blocks that were rolled back because they could not be
    /// fully placed within `slot_count`.
    pub unscheduled_blocks: Vec<usize>,
}

/// Greedily assigns timeslots to every one-hop transmission across all
/// blocks, in order. Each block is atomic: either every hop in it is
/// scheduled, or none are.
///
/// For each hop, the earliest feasible timeslot at or after the previous
/// hop's timeslot + 1 is chosen; a block fails as soon as any hop in it
/// cannot be placed before `slot_count`, and is rolled back in full.
pub fn schedule(topology: &Topology, blocks: &[StreamBlock], slot_count: usize) -> ScheduleOutcome {
    let mut sched = Schedule::default();
    let mut unscheduled_blocks = Vec::new();

    for (block_idx, block) in blocks.iter().enumerate() {
        let mut last_ts = 0usize;
        let mut appended = 0usize;
        let mut failed = false;

        for &(src, dst) in block {
            if !topology.has_edge(src, dst) {
                log::warn!("block {block_idx}: {src}->{dst} is not an edge, cannot schedule");
                failed = true;
                break;
            }

            let mut placed = None;
            for t in last_ts..slot_count {
                if !has_conflict(&sched, topology, t, src, dst) {
                    log::debug!("block {block_idx}: scheduled {src}->{dst} at slot {t}");
                    sched.push_hop(t, src, dst);
                    appended += 1;
                    placed = Some(t);
                    break;
                }
            }

            match placed {
                // The receiver of this hop is the transmitter of the next, so
                // the next hop must start strictly later.
                Some(t) => last_ts = t + 1,
                None => {
                    log::warn!(
                        "block {block_idx}: no feasible slot for {src}->{dst} in [{last_ts}, {slot_count})"
                    );
                    failed = true;
                    break;
                }
            }
        }

        if failed {
            log::warn!("rolling back block {block_idx} ({appended} hop(s) undone)");
            for _ in 0..appended {
                sched.pop_hop();
            }
            unscheduled_blocks.push(block_idx);
        }
    }

    ScheduleOutcome {
        schedule: sched,
        unscheduled_blocks,
    }
}
