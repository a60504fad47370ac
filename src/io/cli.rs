//! Command-line interface for solving and generating jigsaw puzzles

use crate::edge::algebra::EdgeAlgebra;
use crate::generation::puzzle::{PuzzleConfig, generate_puzzle};
use crate::generation::sampling::first_edge_types;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_EDGE_TYPES, DEFAULT_MAX_ATTEMPTS, DEFAULT_ROWS, DEFAULT_SEED,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::format::{PuzzleFile, SolutionWriter, read_puzzle, write_puzzle};
use crate::io::progress::SolutionProgress;
use clap::{Args, Parser, Subcommand};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "jigtile")]
#[command(
    author,
    version,
    about = "Enumerate every tiling of an edge-matching jigsaw puzzle"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Enumerate all tilings of a puzzle file
    Solve(SolveArgs),
    /// Generate a puzzle with an essentially unique solution
    Sample(SampleArgs),
}

/// Arguments of `solve`
#[derive(Args)]
pub struct SolveArgs {
    /// Puzzle file to solve
    #[arg(value_name = "PUZZLE")]
    pub puzzle: PathBuf,

    /// Write solutions here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop after this many solutions
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments of `sample`
#[derive(Args)]
pub struct SampleArgs {
    /// Grid height
    #[arg(short = 'H', long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Grid width
    #[arg(short = 'w', long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of edge codes to use, the flat border included
    #[arg(short = 'k', long, default_value_t = DEFAULT_EDGE_TYPES)]
    pub edge_types: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grids to sample before giving up
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Write the puzzle here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the selected subcommand
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the subcommand, writing results to files or stdout
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read, the puzzle is invalid, or
    /// output cannot be written
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Solve(args) => self.solve(args),
            Command::Sample(args) => Self::sample(args),
        }
    }

    /// Enumerate solutions of `args.puzzle` into `out`, returning how many were written
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle cannot be loaded or output fails
    pub fn solve_into<W: Write>(&self, args: &SolveArgs, out: W) -> Result<usize> {
        let start_time = Instant::now();
        let puzzle = read_puzzle(&args.puzzle)?;
        let (problem, _algebra) = puzzle.problem()?;

        let label = args
            .puzzle
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mut progress = SolutionProgress::new(self.cli.should_show_progress(), &label);
        let mut writer = SolutionWriter::new(out);

        for tiling in problem.solver().take(args.limit.unwrap_or(usize::MAX)) {
            writer.write(&tiling)?;
            progress.record();
        }
        progress.finish();

        let written = writer.written();
        writer.finish()?;
        info!(
            "Enumerated {written} solutions of {} in {:.2?}",
            args.puzzle.display(),
            start_time.elapsed()
        );
        Ok(written)
    }

    fn solve(&self, args: &SolveArgs) -> Result<()> {
        match &args.output {
            Some(path) => {
                let file = File::create(path).with_path(path, "create solutions")?;
                self.solve_into(args, BufWriter::new(file))
                    .map(|_| ())
            }
            None => self.solve_into(args, io::stdout().lock()).map(|_| ()),
        }
    }

    /// Generate the puzzle described by `args`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unusable edge-type count and
    /// propagates generation errors
    pub fn generate(args: &SampleArgs) -> Result<PuzzleFile> {
        let algebra = EdgeAlgebra::jigsaw()?;
        if args.edge_types < 2 || args.edge_types > algebra.len() {
            return Err(invalid_parameter(
                "edge_types",
                &args.edge_types,
                &format!("must be between 2 and {}", algebra.len()),
            ));
        }

        let config = PuzzleConfig {
            rows: args.rows,
            cols: args.cols,
            edge_types: first_edge_types(args.edge_types),
            seed: args.seed,
            max_attempts: args.attempts,
        };
        let puzzle = generate_puzzle(&config, &algebra)?;
        Ok(PuzzleFile::from_puzzle(&puzzle))
    }

    fn sample(args: &SampleArgs) -> Result<()> {
        let puzzle = Self::generate(args)?;
        match &args.output {
            Some(path) => write_puzzle(path, &puzzle),
            None => {
                let mut out = io::stdout().lock();
                serde_json::to_writer_pretty(&mut out, &puzzle)?;
                out.write_all(b"\n")?;
                Ok(())
            }
        }
    }
}
