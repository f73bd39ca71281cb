//! Word lists and sentence templates for duet / solo prompt synthesis.
//!
//! The lists pair tiefling and dragonborn archetypes in noir-leaning
//! fantasy scenes: zero-gravity chapels, psionic crystals, exhausted
//! romance, 35mm film language.

use rand::Rng;
use rand::seq::SliceRandom;

pub const TIEFLING_ARCHETYPES: [&str; 6] = [
    "smoke-eyed tiefling warlock in cracked velvet",
    "battle-tired tiefling paladin with scorched halo",
    "tattooed tiefling street-prophet in threadbare coat",
    "masked tiefling assassin with ember-lit horns",
    "tiefling bard in moth-eaten cabaret tuxedo",
    "tiefling witch-knight with brass rosary chains",
];

pub const DRAGONBORN_ARCHETYPES: [&str; 6] = [
    "deep-violet psionic dragonborn with faintly glowing scales",
    "amethyst gem dragonborn oracle with prismatic frills",
    "obsidian dragonborn knight, psionic runes smouldering",
    "silver-veined crystal dragonborn archivist",
    "emerald psionic dragonborn biomech pilot",
    "prism-scaled dragonborn seer in patched envoy cloak",
];

pub const DUET_DYNAMICS: [&str; 8] = [
    "standing back-to-back mid-spell, sharing the same sigil halo",
    "locked in quiet argument, fingers almost touching",
    "leaning shoulder to shoulder, both aiming psionic focus out of frame",
    "one tying the other's armor straps in exhausted silence",
    "sharing a cigarette under a flickering ward-lamp",
    "embracing like doomed lovers before a final stand",
    "checking each other's wounds in a ruined stairwell",
    "reading from the same forbidden grimoire, heads almost touching",
];

pub const ENVIRONMENTS: [&str; 8] = [
    "rain-slick alleyway beneath a leaning cathedral",
    "collapsing archive full of floating manuscripts",
    "rusted sky-dock with half-functional spell-engines",
    "fungal-overgrown ruin glowing with bioluminescent spores",
    "zero-gravity cargo chapel full of drifting icons",
    "war-torn city square lit only by burning banners",
    "underground psionic ward lined with humming crystal pylons",
    "abandoned subway shrine tagged with occult graffiti",
];

pub const MOODS: [&str; 8] = [
    "tragic but tender",
    "intimate and battle-worn",
    "paranoid yet quietly romantic",
    "defiant and exhausted",
    "melancholic, black-comedy tone",
    "resigned but still protective",
    "cynical but secretly hopeful",
    "slow-burn enemies-to-lovers tension",
];

pub const LIGHTING: [&str; 8] = [
    "sodium-orange streetlights cutting through cold blue rain",
    "prismatic godrays refracting through hovering crystals",
    "harsh interrogation spotlight with deep noir shadows",
    "neon magenta ward-glyphs reflecting off wet stone",
    "bioluminescent fungal glow and drifting dust motes",
    "single swinging overhead lamp, violent chiaroscuro",
    "backlit by psionic shockwave frozen in time",
    "film-noir window blinds shadows striping their faces",
];

pub const CAMERA: [&str; 8] = [
    "cinematic 35mm frame, shallow depth of field",
    "intimate waist-up portrait, lens breathing",
    "wide establishing shot with them as small silhouettes",
    "tight over-the-shoulder shot, focus on trembling hands",
    "low-angle heroic frame, debris falling in slow motion",
    "soft handheld feel, slight motion blur",
    "ultra-wide lens exaggerating perspective",
    "medium close-up, eyes catching all the light",
];

pub const QUALITY_TAGS: [&str; 8] = [
    "hyper-detailed, painterly, no kitsch",
    "grainy 35mm film, subtle scratches",
    "rich chiaroscuro, painterly shadows",
    "soft chromatic aberration, analog imperfections",
    "magazine editorial composition",
    "propaganda-noir layout sensibility",
    "muted color palette with violent accent highlights",
    "high-end concept art quality",
];

/// One random pick from a non-empty list.
fn pick<'a, R: Rng>(rng: &mut R, list: &'a [&'a str]) -> &'a str {
    list.choose(rng).copied().unwrap_or("")
}

/// Synthesize a two-character duet prompt.
pub fn duet_prompt<R: Rng>(rng: &mut R) -> String {
    let t = pick(rng, &TIEFLING_ARCHETYPES);
    let d = pick(rng, &DRAGONBORN_ARCHETYPES);
    let dynamic = pick(rng, &DUET_DYNAMICS);
    let env = pick(rng, &ENVIRONMENTS);
    let mood = pick(rng, &MOODS);
    let light = pick(rng, &LIGHTING);
    let cam = pick(rng, &CAMERA);
    let quality = pick(rng, &QUALITY_TAGS);

    format!(
        "{t} and {d}, {dynamic}, in a {env}, {mood} mood, {light}, {cam}, {quality}."
    )
}

/// Synthesize a single-character prompt from either archetype family.
pub fn solo_prompt<R: Rng>(rng: &mut R) -> String {
    let combined: Vec<&str> = TIEFLING_ARCHETYPES
        .iter()
        .chain(DRAGONBORN_ARCHETYPES.iter())
        .copied()
        .collect();
    let who = pick(rng, &combined);
    let env = pick(rng, &ENVIRONMENTS);
    let mood = pick(rng, &MOODS);
    let light = pick(rng, &LIGHTING);
    let cam = pick(rng, &CAMERA);
    let quality = pick(rng, &QUALITY_TAGS);

    format!("{who}, alone in a {env}, {mood} energy, {light}, {cam}, {quality}.")
}
