mod cli;

use clap::Parser;
use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Plan { spec, slots, multipath, extra_hops } => {
            let spec = tdma_cli::read_plan_spec(&spec)?;
            let outcome = tdma_cli::run_plan(&spec, slots, multipath, extra_hops)?;
            for (timeslot, tx, rx) in outcome.schedule.to_human_readable() {
                println!("slot {timeslot}: {tx} -> {rx}");
            }
            if !outcome.unscheduled_blocks.is_empty() {
                log::warn!(
                    "{} block(s) could not be scheduled within {slots} slots: {:?}",
                    outcome.unscheduled_blocks.len(),
                    outcome.unscheduled_blocks,
                );
            }
        }
        Command::Draw { spec } => {
            let spec = tdma_cli::read_plan_spec(&spec)?;
            print!("{}", tdma_cli::render_dot(&spec.edges));
        }
    }

    Ok(())
}
