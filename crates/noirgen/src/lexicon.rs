//! Shared motif vocabulary for the prompt generators.
//!
//! Every generator starts from the same integrated motif list and
//! extends it with per-theme and per-style derived lines. Themes and
//! styles arrive in `snake_case` / `kebab-case` identifier form
//! (`bh_bureaucratic_shrine`) and are spaced out for prose use.

/// The integrated BH motifs included in every base prompt.
pub const INTEGRATED_MOTIFS: [&str; 7] = [
    "alternate-history Vatican corridors",
    "surveillance shrines and Schismware terminals",
    "rain-slick bureaucratic plazas under neon catechisms",
    "myth-engine cathedral scaffolding in toxic fog",
    "propaganda-noir fashion editorial framing",
    "35mm film language with volumetric godrays",
    "neurophage relics hidden in archive stacks",
];

/// Turn an identifier-style tag into prose (`foo_bar` → `foo bar`).
fn spaced(tag: &str) -> String {
    tag.replace('_', " ")
}

/// Collect the motif lines for a prompt: the integrated motifs plus one
/// derived line per theme and per style.
pub fn collect_motifs(themes: &[String], styles: &[String]) -> Vec<String> {
    let mut motifs: Vec<String> = INTEGRATED_MOTIFS.iter().map(|m| m.to_string()).collect();

    motifs.extend(
        themes
            .iter()
            .map(|t| format!("{} rendered as an exhausted editorial set-piece", spaced(t))),
    );

    motifs.extend(styles.iter().map(|s| {
        format!(
            "{} color language layered over rain-slick asphalt",
            spaced(s)
        )
    }));

    motifs
}
