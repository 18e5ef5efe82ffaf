//! One-shot CLI demo: decode a cube code, run the layered solver up to a
//! requested stage, and print the resulting face turns one per line.
//!
//! This is scaffolding to exercise the library end to end (the
//! request/response wrapper remains an external collaborator, not
//! reimplemented here) — a thin `clap`-based replacement for an
//! interactive stdin loop, since a one-shot solve fits a declarative parser
//! better than a play-and-scramble REPL.

use clap::{Parser, ValueEnum};

use rubiks_solver::{SolveStage, Solver, SolverError};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StageArg {
    DownCross,
    DownLayer,
    DownAndMiddleLayers,
    DownMidLayersAndUpCross,
    DownMidLayersUpFace,
    Solved,
}

impl From<StageArg> for SolveStage {
    fn from(arg: StageArg) -> SolveStage {
        match arg {
            StageArg::DownCross => SolveStage::DownCross,
            StageArg::DownLayer => SolveStage::DownLayer,
            StageArg::DownAndMiddleLayers => SolveStage::DownAndMiddleLayers,
            StageArg::DownMidLayersAndUpCross => SolveStage::DownMidLayersAndUpCross,
            StageArg::DownMidLayersUpFace => SolveStage::DownMidLayersUpFace,
            StageArg::Solved => SolveStage::Solved,
        }
    }
}

/// Solve a 54-character Rubik's cube code via the layer-by-layer method.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The 54-character cube code (block order FRONT RIGHT BACK LEFT UP
    /// DOWN, alphabet b/r/g/o/y/w).
    cube_code: String,

    /// The stage to solve up to.
    #[arg(long, value_enum, default_value_t = StageArg::Solved)]
    stage: StageArg,
}

#[cfg(not(feature = "stats"))]
fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "stats"))]
fn run(args: &Args) -> Result<(), SolverError> {
    let mut solver = Solver::from_code(&args.cube_code, args.stage.into())?;
    for (face, direction) in solver.get_solution()? {
        println!("{face}{direction}");
    }
    Ok(())
}

/// With the `stats` feature on, the binary runs scramble/solve experiments
/// instead of the one-shot solve CLI.
#[cfg(feature = "stats")]
fn main() {
    env_logger::init();
    rubiks_solver::stats::run_batch(&[0, 5, 10, 15, 20, 25], 20, SolveStage::Solved);
}
