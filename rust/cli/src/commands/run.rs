//! Batch run command: drop a population of beans and report the slot counts.
//!
//! Each bean gets its own ChaCha20 stream seeded with `seed + index`, so a
//! run is fully reproducible from its base seed. Without `--seed` the
//! configured seed is used, and failing that a random one.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_slots};
use crate::ui;
use crate::Trim;
use beancounter_engine::bean::{Bean, BeanMode};
use beancounter_engine::board::BeanCounter;
use beancounter_engine::rng::SeededRandom;
use std::io::Write;
use tracing::info;

/// Parsed arguments of the `run` command.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub slot_count: usize,
    pub bean_count: usize,
    /// `None` falls back to the configured mode
    pub mode: Option<BeanMode>,
    pub seed: Option<u64>,
    pub debug: bool,
    pub trim: Option<Trim>,
    pub repeat: u32,
    pub json: bool,
}

pub fn handle_run_command(
    opts: &RunOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let mode = opts.mode.unwrap_or(resolved.config.mode);
    let base_seed = opts
        .seed
        .or(resolved.config.seed)
        .unwrap_or_else(rand::random);

    info!(
        slot_count = opts.slot_count,
        bean_count = opts.bean_count,
        mode = %mode,
        seed = base_seed,
        "starting run"
    );

    let beans = make_beans(opts.slot_count, opts.bean_count, mode, base_seed);
    let mut board = BeanCounter::new(opts.slot_count);
    board.reset(beans);

    for round in 0..=opts.repeat {
        if round > 0 {
            board.repeat();
        }
        if opts.debug {
            writeln!(out, "{}", format_board(&board))?;
        }
        drain(&mut board, opts.debug, out, err)?;
        match opts.trim {
            Some(Trim::Upper) => board.upper_half(),
            Some(Trim::Lower) => board.lower_half(),
            None => {}
        }
    }

    if opts.json {
        let line = board.summary().to_json().map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    writeln!(out, "Slot bean counts:")?;
    writeln!(out, "{}", format_slots(&board))?;
    if let Ok(avg) = board.average_slot_index() {
        writeln!(out, "Average slot: {:.3}", avg)?;
    }
    Ok(())
}

fn make_beans(slot_count: usize, bean_count: usize, mode: BeanMode, seed: u64) -> Vec<Bean> {
    (0..bean_count)
        .map(|i| {
            let rng = SeededRandom::new_with_seed(seed.wrapping_add(i as u64));
            Bean::new(slot_count, mode, Box::new(rng))
        })
        .collect()
}

fn drain(
    board: &mut BeanCounter,
    debug: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    loop {
        match board.step() {
            Ok(true) => {
                if debug {
                    writeln!(out, "{}", format_board(board))?;
                }
            }
            Ok(false) => return Ok(()),
            Err(e) => {
                ui::write_error(err, "Bean went out of bounds unexpectedly.  Shutting down.")?;
                return Err(e.into());
            }
        }
    }
}
