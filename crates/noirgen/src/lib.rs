//! Prompt-generation bundle for the BH surreal-propaganda-noir image
//! pipeline.
//!
//! `noirgen` produces image-generation prompts set in a fixed fictional
//! world ("BH"): rain-slick bureaucratic shrines, myth-engine fog,
//! propaganda-noir film language. The bundle covers the full path from
//! prompt text to a downstream batch API:
//!
//! - [`seed`] — the fixed seed prompt and its accessor. Printing this
//!   prompt is the binary's default behavior.
//! - [`lexicon`] — the shared motif vocabulary that every generator
//!   draws from.
//! - [`generators`] — per-backend prompt builders (Midjourney, DALL·E,
//!   Stable Diffusion, Flux, a structured graphics job, and a
//!   Grok-backed generator with an offline fallback).
//! - [`scene`] — long-form scene prompts with a `World:`/`Style:`
//!   header block, plus the hand-written BH preset.
//! - [`batch`] — conversions between prompt lists, batch JSON, and
//!   Midjourney-style CSV.
//! - [`webhook`] — a batch uploader that posts prompts to a
//!   Discord-style webhook.
//! - [`api`] — the async xAI chat-completions client behind the Grok
//!   generator.
//!
//! # Getting started
//!
//! ```ignore
//! use noirgen::prelude::*;
//!
//! // The seed prompt is always available, no setup required.
//! println!("{}", seed_prompt());
//!
//! // Build a Midjourney record for a custom theme.
//! let opts = GenerateOptions {
//!     generator: Generator::Midjourney,
//!     themes: vec!["bh_bureaucratic_shrine".to_string()],
//!     ..Default::default()
//! };
//! let record = generate_record(None, &opts).await?;
//! println!("{}", serde_json::to_string_pretty(&record).unwrap());
//! ```
//!
//! # Binary
//!
//! ```sh
//! # Print the seed prompt (default behavior, any extra words ignored)
//! noirgen
//!
//! # Emit a generation record as JSON
//! noirgen generate --generator flux --themes bh_bureaucratic_shrine
//!
//! # Convert prompts to batch JSON / Midjourney CSV
//! noirgen batch --input prompts.txt --out batch.json
//! noirgen convert --input out/bh_prompts.json
//! ```

pub mod api;
pub mod batch;
pub mod generators;
pub mod lexicon;
pub mod prelude;
pub mod scene;
pub mod seed;
pub mod webhook;

pub use generators::{GenerateOptions, Generator, RecordEnvelope, generate_record};
pub use seed::{SEED_PROMPT, seed_prompt};
