//! evolve-query - evolve a query toward a hidden sentence
//!
//! # Usage
//!
//! ```bash
//! # Play ten rounds against a corpus with one sentence per line
//! evolve-query sentences.txt
//!
//! # Index only the first 500 lines, play 25 reproducible rounds
//! evolve-query sentences.txt --n-lines-from-file 500 --n-rounds 25 --seed 42 -vv
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::error;

use evolve_query::oracle::{MemoryIndex, ScoringOracle};
use evolve_query::session::{Session, SessionConfig};

/// Evolve a query.
#[derive(Parser)]
#[command(name = "evolve-query", version, about = "Evolve a query.")]
struct Cli {
    /// Path to language file with one sentence per line
    language_file: PathBuf,

    /// Number of rounds to play
    #[arg(long = "n-rounds", default_value_t = 10)]
    n_rounds: usize,

    /// Number of lines from file to use for indexing (default: all lines)
    #[arg(long = "n-lines-from-file")]
    n_lines_from_file: Option<usize>,

    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::default().with_rounds(self.n_rounds);
        if let Some(n) = self.n_lines_from_file {
            config = config.with_max_lines(n);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = cli.config();
    config.validate().map_err(|e| anyhow!(e))?;

    let text = fs::read_to_string(&cli.language_file)
        .with_context(|| format!("reading {}", cli.language_file.display()))?;
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let mut index = MemoryIndex::new(config.index_name.clone());
    index.ingest(config.limit_lines(&lines))?;

    let rng = config.rng();
    let mut session = Session::new(index, config, rng);

    let stdin = io::stdin();
    match session.run(stdin.lock(), io::stdout().lock()) {
        Ok(_) => Ok(()),
        Err(e) if e.is_fatal() => {
            error!("{e}");
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
