use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridfill::puzzle::{Puzzle, WordList};
use gridfill::render::{solution_report, LetterGrid};
use gridfill::solver::{render_stats_table, Solver};

/// Fill a crossword grid from a structure file and a word list.
#[derive(Debug, Parser)]
#[command(name = "gridfill", version, about)]
struct Args {
    /// Grid structure file: one row per line, `_` or `.` for open cells.
    structure: PathBuf,

    /// Word list file: one candidate word per line.
    words: PathBuf,

    /// Emit the solution as JSON instead of a rendered grid.
    #[arg(long)]
    json: bool,

    /// Print search statistics to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("gridfill: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> gridfill::Result<bool> {
    let puzzle = Puzzle::from_structure(&std::fs::read_to_string(&args.structure)?)?;
    let words = WordList::load(&args.words)?;

    let mut solver = Solver::new(&puzzle, &words);
    let solution = solver.solve();
    if args.stats {
        eprintln!("{}", render_stats_table(solver.stats()));
    }

    match solution {
        Some(assignment) => {
            if args.json {
                let report = solution_report(&puzzle, &assignment);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", LetterGrid::new(&puzzle, &assignment));
            }
            Ok(true)
        }
        None => {
            println!("No solution.");
            Ok(false)
        }
    }
}
