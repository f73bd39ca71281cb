//! Per-backend prompt generators and the generation record envelope.
//!
//! Each backend turns the shared motif vocabulary into output suited to
//! its target: the synthetic generators (Midjourney, DALL·E, Stable
//! Diffusion, Flux) append a backend-specific style line to the base
//! prompt, [`graphics`] emits a structured render job, and [`grok`]
//! asks an xAI model for a batch of prompt variations (with a local
//! fallback when no API key is configured).
//!
//! [`generate_record`] is the single dispatch point; the CLI wraps its
//! result in a [`RecordEnvelope`] with the request config and a
//! timestamp.

pub mod graphics;
pub mod grok;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::XaiClient;
use crate::lexicon::collect_motifs;
use graphics::GraphicsJob;

/// Default world tag used when none is given.
pub const DEFAULT_WORLD: &str = "BH";

// ── Generator kinds ────────────────────────────────────────────────

/// A prompt-generation backend.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    Midjourney,
    DallE,
    StableDiffusion,
    Flux,
    Graphics,
    Grok,
}

/// All generators, in listing order.
pub const ALL_GENERATORS: [Generator; 6] = [
    Generator::Midjourney,
    Generator::DallE,
    Generator::StableDiffusion,
    Generator::Flux,
    Generator::Graphics,
    Generator::Grok,
];

impl Generator {
    /// The generator's wire name (`dall_e`, `stable_diffusion`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Generator::Midjourney => "midjourney",
            Generator::DallE => "dall_e",
            Generator::StableDiffusion => "stable_diffusion",
            Generator::Flux => "flux",
            Generator::Graphics => "graphics",
            Generator::Grok => "grok",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_GENERATORS
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| format!("unknown generator: {s}"))
    }
}

/// Wire names of all generators, in listing order.
pub fn list_generators() -> Vec<&'static str> {
    ALL_GENERATORS.iter().map(|g| g.name()).collect()
}

// ── Options ────────────────────────────────────────────────────────

/// Options for a single generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub generator: Generator,
    pub world: String,
    pub themes: Vec<String>,
    pub styles: Vec<String>,
    pub mode: Option<String>,
    /// Number of prompts for the Grok generator. Default: `8`.
    pub num: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            generator: Generator::Midjourney,
            world: DEFAULT_WORLD.to_string(),
            themes: Vec::new(),
            styles: Vec::new(),
            mode: None,
            num: 8,
        }
    }
}

// ── Base prompt ────────────────────────────────────────────────────

/// Assemble the base prompt shared by every backend: a `World:` line,
/// an optional `Mode:` line, then the motif body.
pub fn build_base_prompt(
    world: &str,
    themes: &[String],
    styles: &[String],
    mode: Option<&str>,
) -> String {
    let body = collect_motifs(themes, styles).join(", ");

    let world = if world.is_empty() { DEFAULT_WORLD } else { world };
    let mut lines = vec![format!("World: {world}")];
    if let Some(mode) = mode {
        lines.push(format!("Mode: {mode}"));
    }
    lines.push(body);
    lines.join("\n")
}

/// Fixed per-backend style suffix for the synthetic generators.
fn style_suffix(generator: Generator) -> &'static str {
    match generator {
        Generator::Midjourney => {
            "\nStyle: high-contrast surreal-propaganda-noir, 3:4, cinematic, editorial."
        }
        Generator::DallE => "\nStyle: painterly yet photoreal, soft neon inks, 8K concept art.",
        Generator::StableDiffusion => {
            "\nStyle: gritty film grain, harsh rim light, fogged lenses."
        }
        Generator::Flux => {
            "\nStyle: myth-engine motion blur, time-fracture trails, editorial pacing."
        }
        // Graphics and Grok never take a plain suffix.
        Generator::Graphics | Generator::Grok => "",
    }
}

// ── Records ────────────────────────────────────────────────────────

/// Backend output: a single prompt, a prompt batch (Grok), or a
/// structured render job (graphics).
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum RecordOutput {
    Prompt { prompt: String },
    Prompts { prompts: Vec<String> },
    Job { job: GraphicsJob },
}

/// A generation record: the request tags plus the backend output.
#[derive(Serialize, Debug, Clone)]
pub struct PromptRecord {
    pub generator: Generator,
    pub world: String,
    pub themes: Vec<String>,
    pub styles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(flatten)]
    pub output: RecordOutput,
}

/// The request configuration echoed into the output envelope.
#[derive(Serialize, Debug, Clone)]
pub struct RecordConfig {
    pub generator: Generator,
    pub world: String,
    pub themes: Vec<String>,
    pub styles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// RFC 3339 UTC timestamp of the run.
    pub timestamp: String,
}

/// Top-level output document: config plus result.
#[derive(Serialize, Debug, Clone)]
pub struct RecordEnvelope {
    pub config: RecordConfig,
    pub result: PromptRecord,
}

impl RecordEnvelope {
    /// Wrap a record with its request config, timestamped now.
    pub fn new(opts: &GenerateOptions, result: PromptRecord) -> Self {
        Self {
            config: RecordConfig {
                generator: opts.generator,
                world: opts.world.clone(),
                themes: opts.themes.clone(),
                styles: opts.styles.clone(),
                mode: opts.mode.clone(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
            result,
        }
    }
}

// ── Dispatch ───────────────────────────────────────────────────────

/// Run one generation and return the record.
///
/// `client` is only consulted by the Grok generator; pass `None` to
/// force its local fallback.
pub async fn generate_record(
    client: Option<&XaiClient>,
    opts: &GenerateOptions,
) -> Result<PromptRecord, String> {
    let base = build_base_prompt(&opts.world, &opts.themes, &opts.styles, opts.mode.as_deref());

    let output = match opts.generator {
        Generator::Midjourney
        | Generator::DallE
        | Generator::StableDiffusion
        | Generator::Flux => RecordOutput::Prompt {
            prompt: format!("{base}{}", style_suffix(opts.generator)),
        },
        Generator::Graphics => RecordOutput::Job {
            job: graphics::build_graphics_job(&opts.world, &opts.themes, &opts.styles, "auto"),
        },
        Generator::Grok => RecordOutput::Prompts {
            prompts: grok::generate_grok(client, &base, opts.num).await?,
        },
    };

    Ok(PromptRecord {
        generator: opts.generator,
        world: opts.world.clone(),
        themes: opts.themes.clone(),
        styles: opts.styles.clone(),
        mode: opts.mode.clone(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::INTEGRATED_MOTIFS;

    #[test]
    fn generator_names_round_trip() {
        for generator in ALL_GENERATORS {
            assert_eq!(generator.name().parse::<Generator>().unwrap(), generator);
        }
        assert!("polaroid".parse::<Generator>().is_err());
    }

    #[test]
    fn list_generators_order() {
        assert_eq!(
            list_generators(),
            vec![
                "midjourney",
                "dall_e",
                "stable_diffusion",
                "flux",
                "graphics",
                "grok"
            ]
        );
    }

    #[test]
    fn base_prompt_layout() {
        let themes = vec!["archive_vault".to_string()];
        let prompt = build_base_prompt("OIP", &themes, &[], Some("duet"));

        let mut lines = prompt.lines();
        assert_eq!(lines.next(), Some("World: OIP"));
        assert_eq!(lines.next(), Some("Mode: duet"));
        let body = lines.next().unwrap();
        assert!(body.starts_with(INTEGRATED_MOTIFS[0]));
        assert!(body.contains("archive vault rendered as an exhausted editorial set-piece"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_world_defaults_to_bh() {
        let prompt = build_base_prompt("", &[], &[], None);
        assert!(prompt.starts_with("World: BH\n"));
    }

    #[tokio::test]
    async fn synthetic_generators_append_their_suffix() {
        for (backend, marker) in [
            (Generator::Midjourney, "3:4, cinematic, editorial."),
            (Generator::DallE, "8K concept art."),
            (Generator::StableDiffusion, "fogged lenses."),
            (Generator::Flux, "time-fracture trails"),
        ] {
            let opts = GenerateOptions {
                generator: backend,
                ..Default::default()
            };
            let record = generate_record(None, &opts).await.unwrap();
            match record.output {
                RecordOutput::Prompt { ref prompt } => {
                    assert!(prompt.starts_with("World: BH\n"));
                    assert!(prompt.contains(marker), "{backend} missing suffix");
                }
                ref other => panic!("expected plain prompt for {backend}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn graphics_generator_emits_job() {
        let opts = GenerateOptions {
            generator: Generator::Graphics,
            ..Default::default()
        };
        let record = generate_record(None, &opts).await.unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["generator"], "graphics");
        assert_eq!(json["job"]["backend"], "paper-tilt-glide");
        assert!(json.get("prompt").is_none());
    }

    #[test]
    fn record_serializes_flat_output() {
        let record = PromptRecord {
            generator: Generator::Flux,
            world: "BH".to_string(),
            themes: vec![],
            styles: vec![],
            mode: None,
            output: RecordOutput::Prompt {
                prompt: "p".to_string(),
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["generator"], "flux");
        assert_eq!(json["prompt"], "p");
        assert!(json.get("mode").is_none());
        assert!(json.get("output").is_none());
    }

    #[test]
    fn envelope_carries_config_and_timestamp() {
        let opts = GenerateOptions::default();
        let record = PromptRecord {
            generator: opts.generator,
            world: opts.world.clone(),
            themes: vec![],
            styles: vec![],
            mode: None,
            output: RecordOutput::Prompt {
                prompt: "p".to_string(),
            },
        };
        let envelope = RecordEnvelope::new(&opts, record);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["config"]["generator"], "midjourney");
        assert_eq!(json["config"]["world"], "BH");
        assert!(json["config"]["timestamp"].as_str().unwrap().contains('T'));
        assert_eq!(json["result"]["prompt"], "p");
    }
}
