//! Synthesis CLI: print numbered duet / solo / atonement prompts.
//!
//! # Examples
//!
//! ```sh
//! # Ten duet prompts (the default)
//! noirgen-synth
//!
//! # Five solo prompts, reproducibly
//! noirgen-synth solo 5 --seed 42
//!
//! # Atonement-machine templates
//! noirgen-synth atone 20
//!
//! # Also write the run as batch JSON for downstream APIs
//! noirgen-synth duet 8 --batch-out out/duets.json
//! ```

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use noirgen::batch::{prompts_to_batch, write_batch};
use noirgen_synth::{atonement_prompt, duet_prompt, solo_prompt};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Duet,
    Solo,
    Atone,
}

/// OIP fantasy duet and psionic prompt synthesis engine.
#[derive(Parser)]
#[command(name = "noirgen-synth", version)]
struct Cli {
    /// Synthesis mode.
    #[arg(value_enum, default_value = "duet")]
    mode: Mode,

    /// Number of prompts to synthesize.
    #[arg(default_value_t = 10)]
    count: usize,

    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Additionally write the prompts as batch JSON.
    #[arg(long)]
    batch_out: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let count = cli.count.max(1);
    debug!("synthesizing {count} {:?} prompt(s)", cli.mode);
    let prompts: Vec<String> = (0..count)
        .map(|_| match cli.mode {
            Mode::Duet => duet_prompt(&mut rng),
            Mode::Solo => solo_prompt(&mut rng),
            Mode::Atone => atonement_prompt(&mut rng).to_string(),
        })
        .collect();

    for (i, prompt) in prompts.iter().enumerate() {
        println!("{}. {prompt}", i + 1);
    }

    if let Some(path) = &cli.batch_out {
        let written = write_batch(path, &prompts_to_batch(&prompts))?;
        eprintln!("Wrote {written} entries to {}", path.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("noirgen_synth=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
