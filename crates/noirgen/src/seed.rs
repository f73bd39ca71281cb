//! The fixed seed prompt for the BH image pipeline.

/// Seed prompt for BH surreal-propaganda-noir image generation.
///
/// This is the canonical one-line description of the world, used as the
/// initial input to downstream image-generation runs. It is fixed at
/// build time and never changes at runtime.
pub const SEED_PROMPT: &str = "A rain-slick bureaucratic shrine drenched in neon, \
chrome-ink operatives drifting through myth-engine fog, \
35mm propaganda-noir cinematography, exhausted editorial framing.";

/// Returns the seed prompt.
///
/// Deterministic and side-effect-free — every call returns the same
/// `'static` text.
pub fn seed_prompt() -> &'static str {
    SEED_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_prompt_matches_constant() {
        assert_eq!(seed_prompt(), SEED_PROMPT);
    }

    #[test]
    fn seed_prompt_is_stable_across_calls() {
        assert_eq!(seed_prompt(), seed_prompt());
    }

    #[test]
    fn seed_prompt_content() {
        let prompt = seed_prompt();
        assert!(prompt.starts_with("A rain-slick bureaucratic shrine"));
        assert!(prompt.ends_with("exhausted editorial framing."));
        assert!(prompt.contains("myth-engine fog"));
        assert!(prompt.contains("35mm propaganda-noir cinematography"));
    }
}
