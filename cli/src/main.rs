use anyhow::Context;
use clap::Parser;
use fifteen_core::*;
use std::io::{self, BufRead, Write};

use render::BoardView;

mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Slide the tiles back into order", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of the default one
    #[arg(short, long, conflicts_with = "random_seed")]
    seed: Option<u64>,

    /// Draw a fresh seed
    #[arg(long)]
    random_seed: bool,

    /// Random steps taken while shuffling
    #[arg(long, default_value_t = SHUFFLE_STEPS)]
    steps: u32,

    /// Also print the board as JSON on every redraw
    #[arg(long)]
    json: bool,
}

impl Args {
    fn seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None if self.random_seed => rand::random(),
            None => DEFAULT_SEED,
        }
    }
}

fn draw(out: &mut impl Write, engine: &PlayEngine, json: bool) -> anyhow::Result<()> {
    write!(out, "{}", BoardView(engine.board()))?;
    if json {
        let state = serde_json::json!({
            "tiles": engine.board(),
            "won": engine.is_won(),
        });
        writeln!(out, "{state}")?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed();
    log::debug!("seed: {seed}");

    let board = RandomWalkGenerator::new(seed)
        .with_steps(args.steps)
        .generate();
    let mut engine = PlayEngine::new(board);

    let mut out = io::stdout().lock();
    draw(&mut out, &engine, args.json)?;
    if engine.is_won() {
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;
        for token in line.split_whitespace() {
            if !engine.handle_token(token).has_update() {
                continue;
            }
            draw(&mut out, &engine, args.json)?;
            if engine.is_won() {
                log::info!("Solved with seed {seed}");
                return Ok(());
            }
        }
    }

    Ok(())
}
