use std::path::PathBuf;

/// `tdma`: plan and inspect TDMA schedules for a mesh topology.
#[derive(Debug, clap::Parser)]
#[command(name = "tdma")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Route the requested streams and greedily schedule them.
    Plan {
        /// Path to a JSON file with `edges` and `streams` fields.
        #[clap(long)]
        spec: PathBuf,
        /// Number of data slots per slotframe.
        #[clap(long)]
        slots: usize,
        /// Add a spatially redundant secondary path per multi-hop stream.
        #[clap(long)]
        multipath: bool,
        /// How many hops longer than the primary path the secondary may be.
        #[clap(long, default_value_t = 0)]
        extra_hops: usize,
    },
    /// Print the topology's edge list as Graphviz DOT, for an external
    /// rendering tool to consume.
    Draw {
        /// Path to a JSON file with an `edges` field (a `streams` field, if
        /// present, is ignored).
        #[clap(long)]
        spec: PathBuf,
    },
}
