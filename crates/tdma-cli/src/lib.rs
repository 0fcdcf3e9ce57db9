//! File-based I/O for the `tdma` command-line wrapper.
//!
//! `tdma-core` has no file I/O of its own. `tdma_core::plan` takes plain
//! edge/stream lists and returns a [`tdma_core::ScheduleOutcome`]. This
//! crate's only job is turning JSON files into that shape and turning the
//! result back into something printable, the way `parsimon-driver` reads
//! `NetworkSpec`/`Flow` files around `parsimon_core::run`.

use std::path::{Path, PathBuf};

use tdma_core::ScheduleOutcome;

/// A topology plus the streams to route over it, as read from a JSON file.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct PlanSpec {
    /// Unordered node-id pairs forming the connectivity graph.
    pub edges: Vec<(usize, usize)>,
    /// Requested end-to-end `(src, dst)` streams, in priority order.
    pub streams: Vec<(usize, usize)>,
}

/// Reads a [`PlanSpec`] from a JSON file.
pub fn read_plan_spec(path: impl AsRef<Path>) -> Result<PlanSpec, Error> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&contents)?),
        _ => Err(Error::UnknownFileType(path.as_ref().into())),
    }
}

/// Routes and schedules `spec` via `tdma_core::plan`.
pub fn run_plan(
    spec: &PlanSpec,
    slot_count: usize,
    multipath: bool,
    extra_hops: usize,
) -> Result<ScheduleOutcome, Error> {
    tdma_core::plan(&spec.edges, &spec.streams, slot_count, multipath, extra_hops)
        .map_err(Error::from)
}

/// Renders a topology's edge list as Graphviz DOT syntax. This crate does
/// not render the graph itself, that's left to whatever external tool
/// consumes the DOT output (see SPEC_FULL.md, `draw` subcommand).
pub fn render_dot(edges: &[(usize, usize)]) -> String {
    let mut out = String::from("graph topology {\n");
    for &(u, v) in edges {
        out.push_str(&format!("    {u} -- {v};\n"));
    }
    out.push_str("}\n");
    out
}

/// An error produced by the `tdma` CLI's I/O layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file's extension isn't one this CLI knows how to parse.
    #[error("unknown file type: {0}")]
    UnknownFileType(PathBuf),

    /// The input file wasn't valid JSON for a [`PlanSpec`].
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// The input file couldn't be read.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// `tdma_core::plan` rejected the input.
    #[error("failed to plan a schedule")]
    Plan(#[from] tdma_core::PlanError),
}
