//! BH prompt bundle CLI: print the seed prompt, emit generation
//! records, and convert prompt batches for downstream APIs.
//!
//! # Examples
//!
//! ```sh
//! # Print the fixed seed prompt (default; extra words are ignored)
//! noirgen
//!
//! # List available generators
//! noirgen list-generators
//!
//! # Emit a generation record as JSON
//! noirgen generate --generator flux --world BH \
//!   --themes bh_bureaucratic_shrine --styles surreal-propaganda-noir
//!
//! # Grok batch (uses XAI_API_KEY when set, local fallback otherwise)
//! noirgen generate --generator grok --num 8 --out out/bh_prompts.json
//!
//! # Render a long-form scene prompt (or the hand-written BH preset)
//! noirgen prompt --world BH --style surreal-propaganda-noir
//! noirgen prompt --preset
//!
//! # Prompt list → batch JSON
//! noirgen batch --input prompts.txt --out out/batch.json
//!
//! # Record JSON → Midjourney CSV
//! noirgen convert --input out/bh_prompts.json
//!
//! # Post a CSV to the Midjourney webhook (MJ_WEBHOOK_URL)
//! noirgen upload --csv out/bh_midjourney.csv --dry
//! ```

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use noirgen::api::XaiClient;
use noirgen::batch::{self, lines_to_batch, parse_csv, to_csv};
use noirgen::generators::{GenerateOptions, Generator, RecordEnvelope, generate_record};
use noirgen::scene::{SceneSpec, bh_project_surreal_noir};
use noirgen::seed::seed_prompt;
use noirgen::webhook::{WebhookUploader, upload_rows};

/// BH surreal-propaganda-noir prompt bundle.
///
/// Without a subcommand, prints the fixed seed prompt and exits.
#[derive(Debug, Parser)]
#[command(name = "noirgen", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the fixed seed prompt. Any further arguments are ignored.
    Seed {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },

    /// List available generators as JSON.
    ListGenerators,

    /// Emit a generation record as JSON (stdout or --out).
    Generate {
        /// Generator backend.
        #[arg(long, default_value = "midjourney")]
        generator: Generator,

        /// World tag for the prompt header.
        #[arg(long, default_value = "BH")]
        world: String,

        /// Comma-separated theme tags.
        #[arg(long, default_value = "bh_bureaucratic_shrine")]
        themes: String,

        /// Comma-separated style tags.
        #[arg(long, default_value = "surreal-propaganda-noir")]
        styles: String,

        /// Optional mode line for the prompt header.
        #[arg(long)]
        mode: Option<String>,

        /// Number of prompts for the grok generator.
        #[arg(long, default_value_t = 8)]
        num: usize,

        /// Write the record here instead of stdout (parents created).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Render a long-form scene prompt with a header block.
    Prompt {
        /// World tag for the scene header.
        #[arg(long, default_value = "OIP")]
        world: String,

        /// Style tag for the scene header.
        #[arg(long, default_value = "propaganda-noir")]
        style: String,

        /// Seed tag for the scene header.
        #[arg(long, default_value = "auto")]
        seed: String,

        /// Cinema tag for the scene header.
        #[arg(long, default_value = "35mm")]
        cinema: String,

        /// Flux tag for the scene header.
        #[arg(long, default_value = "myth-engine")]
        flux: String,

        /// Print the hand-written BH surreal-noir preset instead.
        #[arg(long)]
        preset: bool,
    },

    /// Convert newline-delimited prompts to batch JSON.
    Batch {
        /// Input text file, one prompt per line.
        #[arg(long)]
        input: PathBuf,

        /// Output batch JSON path.
        #[arg(long)]
        out: PathBuf,
    },

    /// Convert a record/prompt JSON file to a Midjourney CSV.
    Convert {
        /// Input JSON (array, or object with prompts/records/items/data).
        #[arg(long, default_value = "out/bh_prompts.json")]
        input: PathBuf,

        /// Output directory for the CSV.
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,

        /// CSV file name inside the output directory.
        #[arg(long, default_value = "bh_midjourney.csv")]
        csv: String,
    },

    /// Post CSV prompt rows to a Discord-style webhook.
    Upload {
        /// Input CSV with id,prompt[,flags] columns.
        #[arg(long, default_value = "out/synth_batch.csv")]
        csv: PathBuf,

        /// Webhook URL (falls back to MJ_WEBHOOK_URL).
        #[arg(long)]
        webhook: Option<String>,

        /// Log messages instead of sending them.
        #[arg(long)]
        dry: bool,
    },

    // Unrecognized words fall through to the seed path; the seed
    // printer ignores its arguments entirely.
    #[command(external_subcommand)]
    Other(Vec<OsString>),
}

// ── Subcommand bodies ──────────────────────────────────────────────

/// Split a comma-separated tag list, dropping empty segments.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

async fn run_generate(
    generator: Generator,
    world: String,
    themes: String,
    styles: String,
    mode: Option<String>,
    num: usize,
    out: Option<PathBuf>,
) -> Result<(), String> {
    let opts = GenerateOptions {
        generator,
        world,
        themes: split_tags(&themes),
        styles: split_tags(&styles),
        mode,
        num,
    };

    let client = XaiClient::from_env()?;
    let record = generate_record(client.as_ref(), &opts).await?;
    let envelope = RecordEnvelope::new(&opts, record);

    let json = serde_json::to_string_pretty(&envelope)
        .map_err(|e| format!("failed to serialize record: {e}"))?;

    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("failed to create '{}': {e}", parent.display()))?;
            }
            std::fs::write(&path, json)
                .map_err(|e| format!("failed to write '{}': {e}", path.display()))?;
            eprintln!("Wrote record to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_batch(input: &Path, out: &Path) -> Result<(), String> {
    let raw = std::fs::read_to_string(input)
        .map_err(|e| format!("failed to read '{}': {e}", input.display()))?;
    let batch = lines_to_batch(&raw);
    let written = batch::write_batch(out, &batch)?;
    println!("Wrote {written} entries to {}", out.display());
    Ok(())
}

fn run_convert(input: &Path, out_dir: &Path, csv_name: &str) -> Result<(), String> {
    let value = batch::read_json(input)?;
    let prompts = batch::extract_prompts(&value);

    std::fs::create_dir_all(out_dir)
        .map_err(|e| format!("failed to create '{}': {e}", out_dir.display()))?;

    let csv_path = out_dir.join(csv_name);
    std::fs::write(&csv_path, to_csv(&prompts))
        .map_err(|e| format!("failed to write '{}': {e}", csv_path.display()))?;

    println!(
        "Wrote Midjourney CSV with {} rows to {}",
        prompts.len(),
        csv_path.display()
    );
    Ok(())
}

async fn run_upload(csv: &Path, webhook: Option<String>, dry: bool) -> Result<(), String> {
    let raw = std::fs::read_to_string(csv)
        .map_err(|e| format!("failed to read '{}': {e}", csv.display()))?;
    let rows = parse_csv(&raw);
    if rows.is_empty() {
        return Err(format!("'{}' has no data rows", csv.display()));
    }

    let uploader = match WebhookUploader::resolve_url(webhook.as_deref()) {
        Some(url) => Some(WebhookUploader::new(url)?),
        None => None,
    };

    let summary = upload_rows(uploader.as_ref(), &rows, dry).await?;
    println!(
        "Done: {} sent, {} skipped, {} failed{}",
        summary.sent,
        summary.skipped,
        summary.failed,
        if dry { " (dry run)" } else { "" }
    );
    Ok(())
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        // Seed path: the fixed text plus a newline, nothing else.
        None => {
            println!("{}", seed_prompt());
            Ok(())
        }
        Some(Command::Seed { rest }) => {
            if !rest.is_empty() {
                debug!("ignoring {} extra argument(s)", rest.len());
            }
            println!("{}", seed_prompt());
            Ok(())
        }
        Some(Command::Other(args)) => {
            debug!("unrecognized arguments ignored: {args:?}");
            println!("{}", seed_prompt());
            Ok(())
        }
        Some(Command::ListGenerators) => {
            let payload = serde_json::json!({
                "generators": noirgen::generators::list_generators(),
            });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
            Ok(())
        }
        Some(Command::Generate {
            generator,
            world,
            themes,
            styles,
            mode,
            num,
            out,
        }) => run_generate(generator, world, themes, styles, mode, num, out).await,
        Some(Command::Prompt {
            world,
            style,
            seed,
            cinema,
            flux,
            preset,
        }) => {
            if preset {
                println!("{}", bh_project_surreal_noir().prompt);
            } else {
                let spec = SceneSpec {
                    world,
                    style,
                    seed,
                    cinema,
                    flux,
                };
                println!("{}", spec.render());
            }
            Ok(())
        }
        Some(Command::Batch { input, out }) => run_batch(&input, &out),
        Some(Command::Convert {
            input,
            out_dir,
            csv,
        }) => run_convert(&input, &out_dir, &csv),
        Some(Command::Upload { csv, webhook, dry }) => run_upload(&csv, webhook, dry).await,
    }
}

/// Subcommand names, as typed on the command line.
const SUBCOMMANDS: [&str; 7] = [
    "seed",
    "list-generators",
    "generate",
    "prompt",
    "batch",
    "convert",
    "upload",
];

/// Whether a parse error should route to the seed path instead of
/// aborting. Stray top-level flags fall through to the seed printer
/// (which ignores its arguments); bad flags on a real subcommand stay
/// fatal, as do help and version requests.
fn falls_back_to_seed(err: &clap::Error, first_arg: Option<&str>) -> bool {
    if !matches!(
        err.kind(),
        ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand
    ) {
        return false;
    }
    !first_arg.is_some_and(|arg| SUBCOMMANDS.contains(&arg))
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so piped stdout stays clean JSON/text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("noirgen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let first = std::env::args().nth(1);
            if falls_back_to_seed(&err, first.as_deref()) {
                debug!("unrecognized arguments ignored: {err}");
                println!("{}", seed_prompt());
                return;
            }
            err.exit();
        }
    };

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
