//! Host capability traits so `valentine-core` stays free of windowing, OS and asset concerns.

use serde::{Deserialize, Serialize};
use tracing::debug;
use valentine_core::motion::{Pose, Timeline};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Decoded image, straight (non-premultiplied) RGBA8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Source of the seed for decoration layout. Failing here is fatal at startup.
pub trait EntropySource {
    fn seed(&mut self) -> Result<u64>;
}

/// Fixed seed, for reproducible cards.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u64);

impl EntropySource for FixedSeed {
    fn seed(&mut self) -> Result<u64> {
        debug!("using fixed seed {}", self.0);
        Ok(self.0)
    }
}

/// Time-based interpolation over a declarative timeline.
pub trait MotionEngine {
    /// Pose of `timeline` after `elapsed` seconds since its owner appeared.
    fn sample(&self, timeline: &Timeline, elapsed: f32) -> Pose;
}

/// Resolves logical asset paths (e.g. `/fullmoon.png`) to pixels.
pub trait AssetSource {
    fn load_image(&self, logical_path: &str) -> Result<RgbaImage>;
}
