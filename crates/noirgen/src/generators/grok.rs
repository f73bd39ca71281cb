//! Grok-backed prompt generation with an offline fallback.
//!
//! With an [`XaiClient`] the generator asks Grok for a JSON array of
//! prompt variations seeded by the base prompt. Without one it echoes
//! deterministic local variations instead of hitting any API, so the
//! `grok` backend always produces output.

use tracing::warn;

use crate::api::{ChatRequest, DEFAULT_GROK_MODEL, Message, XaiClient};

/// System prompt framing Grok as an image-prompt engine.
const GROK_SYSTEM_PROMPT: &str = "You are Grok, a vivid image-prompt engine. \
Output single-paragraph, dense, cinematic prompts suitable for Midjourney / Flux. \
The film is a therapy-movie about society, bureaucracy, and guilt.";

/// Maximum tokens for a Grok prompt batch.
const GROK_MAX_TOKENS: u32 = 800;

/// Generate `num` prompt variations from the base prompt.
///
/// Pass `client = None` (or fail to configure `XAI_API_KEY`) to get the
/// local fallback batch.
pub async fn generate_grok(
    client: Option<&XaiClient>,
    base: &str,
    num: usize,
) -> Result<Vec<String>, String> {
    let Some(client) = client else {
        warn!("XAI_API_KEY missing — Grok-based generation will be skipped");
        return Ok(fallback_prompts(base, num));
    };

    let user = format!("{base}\nGenerate {num} distinct prompts in a JSON array of strings.");

    let body = ChatRequest {
        model: DEFAULT_GROK_MODEL.to_string(),
        messages: vec![Message::system(GROK_SYSTEM_PROMPT), Message::user(user)],
        max_tokens: GROK_MAX_TOKENS,
        temperature: 0.7,
        ..Default::default()
    };

    let completion = client.chat(&body).await?;
    let text = completion.content.unwrap_or_else(|| "[]".to_string());

    Ok(parse_prompt_list(&text))
}

/// Parse the model reply as a JSON string array; anything else becomes
/// a one-element list holding the raw text.
fn parse_prompt_list(text: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(text) {
        Ok(prompts) => prompts,
        Err(_) => vec![text.to_string()],
    }
}

/// Local stand-in batch when no API client is available.
fn fallback_prompts(base: &str, num: usize) -> Vec<String> {
    (1..=num)
        .map(|i| {
            format!(
                "{base}\n[Fallback Grok seed #{i}] therapy-film style exploration of \
                 bureaucracy, guilt, and propaganda."
            )
        })
        .collect()
}
