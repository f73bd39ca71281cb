//! Universal synthesis engine for OIP fantasy duet and psionic prompts.
//!
//! Where the core `noirgen` generators work from a fixed motif list,
//! the synth engine assembles prompts combinatorially: one random pick
//! from each of several word lists (archetypes, dynamics, environments,
//! moods, lighting, camera, quality tags), slotted into a fixed
//! sentence template. The [`atonement`] module does the same with whole
//! pre-written templates.
//!
//! All synthesis goes through a caller-supplied [`rand::Rng`], so a
//! seeded generator reproduces a run exactly.
//!
//! ```ignore
//! use noirgen_synth::synth::duet_prompt;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! println!("{}", duet_prompt(&mut rng));
//! ```

pub mod atonement;
pub mod synth;

pub use atonement::atonement_prompt;
pub use synth::{duet_prompt, solo_prompt};
