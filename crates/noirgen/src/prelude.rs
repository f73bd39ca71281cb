//! Convenience re-exports for common `noirgen` types.
//!
//! Meant to be glob-imported by downstream tools:
//!
//! ```ignore
//! use noirgen::prelude::*;
//! ```

// ── Seed ────────────────────────────────────────────────────────────
pub use crate::seed::{SEED_PROMPT, seed_prompt};

// ── Generation ──────────────────────────────────────────────────────
pub use crate::generators::{
    GenerateOptions, Generator, PromptRecord, RecordEnvelope, RecordOutput, build_base_prompt,
    generate_record, list_generators,
};
pub use crate::lexicon::{INTEGRATED_MOTIFS, collect_motifs};
pub use crate::scene::{ScenePreset, SceneSpec, bh_project_surreal_noir};

// ── Batch and upload ────────────────────────────────────────────────
pub use crate::batch::{BatchEntry, BatchFile, CsvRow, lines_to_batch, prompts_to_batch, to_csv};
pub use crate::webhook::{UploadSummary, WebhookUploader, upload_rows};

// ── API client ──────────────────────────────────────────────────────
pub use crate::api::{ChatRequest, Message, XaiClient};
