//! Structured render-job builder for the hardware-accelerated graphics
//! backend (Paper / Tilt / Glide style pipeline).
//!
//! Unlike the text backends this one doesn't hand a prompt to a model —
//! it produces a job document a renderer consumes directly.

use serde::{Deserialize, Serialize};

/// A render job for the graphics backend.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphicsJob {
    pub backend: String,
    pub payload: GraphicsPayload,
}

/// The renderer-facing payload of a [`GraphicsJob`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphicsPayload {
    pub engine: String,
    pub seed: String,
    pub world: String,
    pub themes: Vec<String>,
    pub styles: Vec<String>,
    pub prompt: String,
}

/// Build a graphics job for the given world tags.
///
/// `seed` is the renderer's seed token; `"auto"` lets the backend pick.
pub fn build_graphics_job(
    world: &str,
    themes: &[String],
    styles: &[String],
    seed: &str,
) -> GraphicsJob {
    GraphicsJob {
        backend: "paper-tilt-glide".to_string(),
        payload: GraphicsPayload {
            engine: "rainbow".to_string(),
            seed: seed.to_string(),
            world: world.to_string(),
            themes: themes.to_vec(),
            styles: styles.to_vec(),
            prompt: [
                "alternate-history transplanetary religious-fascist bureaucracy",
                "propaganda-noir, myth-engine fog vaults, filmic language",
                "editorial layouts, volumetric light, wet asphalt reflections",
            ]
            .join(", "),
        },
    }
}
