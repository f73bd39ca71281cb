//! High-level scene prompts: a full header block plus the motif line
//! and the therapy-movie closing note.
//!
//! Where [`crate::generators`] emits per-backend records, a scene
//! prompt is the human-facing long form: `World:` / `Style:` /
//! `Cinema:` / `Flux:` / `Seed:` header, the collected motifs, and a
//! fixed closing paragraph setting the emotional register. The
//! [`bh_project_surreal_noir`] preset is the canonical hand-written
//! scene for the BH world.

use crate::lexicon::collect_motifs;

/// Closing paragraph appended to every rendered scene prompt.
const CLOSING_NOTE: &str = "The result should feel like a therapy-movie frame about a \
bureaucracy-sick society,\neditorial, morally gray, deeply exhausted yet stylish, with \
occult relics hidden\ninside modern and future absurdities instead of swords and sandals.";

/// Header tags for a scene prompt.
#[derive(Debug, Clone)]
pub struct SceneSpec {
    pub world: String,
    pub style: String,
    pub seed: String,
    pub cinema: String,
    pub flux: String,
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self {
            world: "OIP".to_string(),
            style: "propaganda-noir".to_string(),
            seed: "auto".to_string(),
            cinema: "35mm".to_string(),
            flux: "myth-engine".to_string(),
        }
    }
}

impl SceneSpec {
    /// Render the full scene prompt: header block, motif line, closing
    /// note. The world and style tags feed the motif collector as a
    /// theme and style respectively.
    pub fn render(&self) -> String {
        let motifs = collect_motifs(
            std::slice::from_ref(&self.world),
            std::slice::from_ref(&self.style),
        );

        format!(
            "World: {}\nStyle: {}\nCinema: {}\nFlux: {}\nSeed: {}\n\n{}.\n\n{}",
            self.world,
            self.style,
            self.cinema,
            self.flux,
            self.seed,
            motifs.join(", "),
            CLOSING_NOTE,
        )
    }
}

/// A named, hand-written scene preset.
#[derive(Debug, Clone)]
pub struct ScenePreset {
    pub id: &'static str,
    pub spec: SceneSpec,
    pub prompt: &'static str,
}

/// The canonical BH surreal-noir scene.
pub fn bh_project_surreal_noir() -> ScenePreset {
    ScenePreset {
        id: "bh_project_surreal_noir",
        spec: SceneSpec {
            world: "BH".to_string(),
            style: "surreal-propaganda-noir".to_string(),
            ..Default::default()
        },
        prompt: "35mm surreal-propaganda-noir inside the BH project world:\n\
rain-slick bureaucratic shrines, neon shrine-lamps glitching through fog,\n\
chrome-ink BH operative in trenchcoat, half-face erased by static light columns,\n\
corrupted cathedral monitors flickering with surveillance saints,\n\
Soviet-brutalist geometry fused with absurdist future artifacts,\n\
sympathizer crowds dissolving into editorial silhouettes,\n\
volumetric smoke, wet asphalt reflections, muted reds and ashen blacks,\n\
Dali-like melt in architectural edges, retro-cyber Vatican circuitry,\n\
everything morally gray, exhausted, stylishly dangerous.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::INTEGRATED_MOTIFS;

    #[test]
    fn defaults_are_the_oip_header() {
        let spec = SceneSpec::default();
        assert_eq!(spec.world, "OIP");
        assert_eq!(spec.style, "propaganda-noir");
        assert_eq!(spec.seed, "auto");
        assert_eq!(spec.cinema, "35mm");
        assert_eq!(spec.flux, "myth-engine");
    }

    #[test]
    fn render_layout_has_header_motifs_and_closing() {
        let prompt = SceneSpec::default().render();
        let mut lines = prompt.lines();

        assert_eq!(lines.next(), Some("World: OIP"));
        assert_eq!(lines.next(), Some("Style: propaganda-noir"));
        assert_eq!(lines.next(), Some("Cinema: 35mm"));
        assert_eq!(lines.next(), Some("Flux: myth-engine"));
        assert_eq!(lines.next(), Some("Seed: auto"));
        assert_eq!(lines.next(), Some(""));

        let motif_line = lines.next().unwrap();
        assert!(motif_line.starts_with(INTEGRATED_MOTIFS[0]));
        assert!(motif_line.ends_with("rain-slick asphalt."));
        // World feeds the theme slot of the motif collector.
        assert!(motif_line.contains("OIP rendered as an exhausted editorial set-piece"));

        assert!(prompt.ends_with("instead of swords and sandals."));
    }

    #[test]
    fn render_spaces_underscored_world_tags() {
        let spec = SceneSpec {
            world: "bh_archive_vault".to_string(),
            ..Default::default()
        };
        let prompt = spec.render();
        assert!(prompt.starts_with("World: bh_archive_vault\n"));
        assert!(prompt.contains("bh archive vault rendered as an exhausted editorial set-piece"));
    }

    #[test]
    fn bh_preset_is_the_canonical_scene() {
        let preset = bh_project_surreal_noir();
        assert_eq!(preset.id, "bh_project_surreal_noir");
        assert_eq!(preset.spec.world, "BH");
        assert_eq!(preset.spec.style, "surreal-propaganda-noir");
        assert_eq!(preset.spec.seed, "auto");
        assert!(preset.prompt.starts_with("35mm surreal-propaganda-noir"));
        assert!(preset.prompt.contains("retro-cyber Vatican circuitry"));
        assert!(preset.prompt.ends_with("stylishly dangerous."));
    }
}
