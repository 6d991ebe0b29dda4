//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::{ModeArg, Trim};

#[derive(Parser, Debug)]
#[command(
    name = "beancounter",
    version,
    about = "Bean counter (Galton board) simulator"
)]
pub struct BeanCounterCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop beans through the board and print how many landed in each slot
    Run {
        /// Number of slots (and peg rows) on the board
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        slot_count: u32,
        /// Number of beans to drop
        bean_count: usize,
        /// Branch policy; falls back to the configured mode
        #[arg(value_enum)]
        mode: Option<ModeArg>,
        /// Print the board after every step
        #[arg(long)]
        debug: bool,
        /// Base RNG seed; bean `i` uses `seed + i`
        #[arg(long)]
        seed: Option<u64>,
        /// Keep only the upper or lower half of the settled beans after each round
        #[arg(long, value_enum)]
        trim: Option<Trim>,
        /// Replay the (possibly trimmed) population this many more times
        #[arg(long, default_value_t = 0)]
        repeat: u32,
        /// Print the final slot summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
