//! Atonement-machine templates: guilt-therapy propaganda scenes.
//!
//! These are whole pre-written prompts rather than combinatorial
//! fragments; synthesis just picks one at random.

use rand::Rng;
use rand::seq::SliceRandom;

pub const TEMPLATES: [&str; 3] = [
    "young bureaucrat haunted by inherited archives, kneeling in front of propaganda poster \
     of themselves, in a hyper-clean confession booth with CRT screens, lit by harsh \
     Constructivist spotlight and floating dust, low-angle shot exaggerating ideological \
     burden, bleached photomontage with Soviet overlays",
    "state archivist with red-and-gold glasses, pressing 'atonement' button beside archive \
     machine, in a clinical dome filled with typewriters and fog, rotating propaganda \
     projector with subliminal flicker, static symmetrical frame with imposed guilt objects, \
     VHS-style grain over pastel trauma motifs",
    "middle-aged therapist holding outdated history book, rehearsing guilt ritual under \
     spotlights, in a virtual tribunal lobby filled with flickering neon indictments, slow \
     zoom-in like a 1970s European art film, desaturated with pockets of brutalist red",
];

/// Pick one atonement template at random.
pub fn atonement_prompt<R: Rng>(rng: &mut R) -> &'static str {
    TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prompt_is_always_a_known_template() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..30 {
            let prompt = atonement_prompt(&mut rng);
            assert!(TEMPLATES.contains(&prompt));
        }
    }

    #[test]
    fn all_templates_are_reachable() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(atonement_prompt(&mut rng));
        }
        assert_eq!(seen.len(), TEMPLATES.len());
    }
}
