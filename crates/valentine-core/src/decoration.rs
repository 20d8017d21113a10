//! Randomized decoration collections, generated once per card and frozen.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ButterflyRanges, DecorationConfig, HeartRanges, StarRanges};

pub const BUTTERFLY_COUNT: usize = 15;
pub const HEART_COUNT: usize = 8;
pub const STAR_COUNT: usize = 50;

/// Floating heart on the proposal scene. `anchor` is (left %, top %).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub anchor: Vec2,
    pub delay: f32,
    pub duration: f32,
}

/// White butterfly flying over the night scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Butterfly {
    pub anchor: Vec2,
    pub delay: f32,
    pub duration: f32,
    pub scale: f32,
}

/// Twinkling star in the night sky. `size` is the dot diameter in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub anchor: Vec2,
    pub delay: f32,
    pub duration: f32,
    pub size: f32,
    pub opacity: f32,
}

/// The three collections. Fields are private so nothing can mutate them after
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecorationSet {
    butterflies: Vec<Butterfly>,
    hearts: Vec<Heart>,
    stars: Vec<Star>,
}

impl DecorationSet {
    pub fn generate(config: &DecorationConfig, rng: &mut fastrand::Rng) -> Self {
        let set = Self {
            butterflies: generate_butterflies(&config.butterflies, rng),
            hearts: generate_hearts(&config.hearts, rng),
            stars: generate_stars(&config.stars, rng),
        };
        debug!(
            butterflies = set.butterflies.len(),
            hearts = set.hearts.len(),
            stars = set.stars.len(),
            "decorations generated"
        );
        set
    }

    pub fn butterflies(&self) -> &[Butterfly] {
        &self.butterflies
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn generate_hearts(ranges: &HeartRanges, rng: &mut fastrand::Rng) -> Vec<Heart> {
    (0..HEART_COUNT)
        .map(|_| Heart {
            anchor: Vec2::new(ranges.left.sample(rng), ranges.top.sample(rng)),
            delay: ranges.delay.sample(rng),
            duration: ranges.duration.sample(rng),
        })
        .collect()
}

pub fn generate_butterflies(ranges: &ButterflyRanges, rng: &mut fastrand::Rng) -> Vec<Butterfly> {
    (0..BUTTERFLY_COUNT)
        .map(|_| Butterfly {
            anchor: Vec2::new(ranges.left.sample(rng), ranges.top.sample(rng)),
            delay: ranges.delay.sample(rng),
            duration: ranges.duration.sample(rng),
            scale: ranges.scale.sample(rng),
        })
        .collect()
}

pub fn generate_stars(ranges: &StarRanges, rng: &mut fastrand::Rng) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            anchor: Vec2::new(ranges.left.sample(rng), ranges.top.sample(rng)),
            delay: ranges.delay.sample(rng),
            duration: ranges.duration.sample(rng),
            size: ranges.size.sample(rng),
            opacity: ranges.opacity.sample(rng),
        })
        .collect()
}
