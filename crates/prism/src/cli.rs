//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use prism::batch::BatchConfig;
use prism::surface::Strategy;

/// Shortest surface distances between points on a box.
///
/// Reads a case count followed by nine integers per case
/// (`x y z x1 y1 z1 x2 y2 z2`) and prints one `Universe #<n>: <distance>`
/// line per case.
#[derive(Debug, Parser)]
#[command(name = "prism", version, about)]
pub struct Cli {
    /// Query file; `-` or no argument reads stdin.
    pub input: Option<PathBuf>,

    /// Solver threads (default: available parallelism).
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Decimals printed per distance.
    #[arg(short, long, default_value_t = 2)]
    pub decimals: usize,

    /// Prefix of every result line.
    #[arg(short, long, default_value = "Universe")]
    pub label: String,

    /// Which face pairings to search.
    #[arg(long, value_enum, default_value_t = StrategyArg::Exhaustive)]
    pub strategy: StrategyArg,
}

/// CLI spelling of [`Strategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Every face of each endpoint.
    Exhaustive,
    /// Default face choice only.
    Canonical,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => Strategy::Exhaustive,
            StrategyArg::Canonical => Strategy::Canonical,
        }
    }
}

impl Cli {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }

    /// Batch configuration described by the flags.
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            worker_count: self.workers,
            decimals: self.decimals,
            label: self.label.clone(),
            strategy: self.strategy.into(),
        }
    }
}
