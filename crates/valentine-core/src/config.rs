use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Closed interval `[min, max]`, written as a two-element array in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span(pub f32, pub f32);

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self(min, max)
    }

    pub fn min(&self) -> f32 {
        self.0
    }

    pub fn max(&self) -> f32 {
        self.1
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.0 && value <= self.1
    }

    /// Uniform draw from the span. A degenerate span always yields its one value.
    ///
    /// Bounds may come in either order and a NaN bound is ignored, so spans built in
    /// code without [`CardConfig::validate`] still sample.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> f32 {
        let (lo, hi) = (self.0.min(self.1), self.0.max(self.1));
        let value = lo + rng.f32() * (hi - lo);
        value.max(lo).min(hi)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field}: span [{min}, {max}] is empty or not finite")]
    InvalidSpan { field: &'static str, min: f32, max: f32 },
    #[error("{field}: span [{min}, {max}] leaves allowed range [{lo}, {hi}]")]
    OutOfDomain {
        field: &'static str,
        min: f32,
        max: f32,
        lo: f32,
        hi: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartRanges {
    pub left: Span,
    pub top: Span,
    pub delay: Span,
    pub duration: Span,
}

impl Default for HeartRanges {
    fn default() -> Self {
        Self {
            left: Span::new(0.0, 100.0),
            top: Span::new(0.0, 100.0),
            delay: Span::new(0.0, 3.0),
            duration: Span::new(4.0, 6.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButterflyRanges {
    pub left: Span,
    pub top: Span,
    pub delay: Span,
    pub duration: Span,
    pub scale: Span,
}

impl Default for ButterflyRanges {
    fn default() -> Self {
        Self {
            left: Span::new(0.0, 100.0),
            top: Span::new(0.0, 100.0),
            delay: Span::new(0.0, 2.0),
            duration: Span::new(4.0, 8.0),
            scale: Span::new(0.6, 1.2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarRanges {
    pub left: Span,
    pub top: Span,
    pub delay: Span,
    pub duration: Span,
    pub size: Span,
    pub opacity: Span,
}

impl Default for StarRanges {
    fn default() -> Self {
        Self {
            left: Span::new(0.0, 100.0),
            top: Span::new(0.0, 100.0),
            delay: Span::new(0.0, 5.0),
            duration: Span::new(2.0, 2.0),
            size: Span::new(1.0, 3.0),
            opacity: Span::new(0.5, 1.0),
        }
    }
}

/// Per-collection sampling ranges. Counts are fixed, see [`crate::decoration`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    pub hearts: HeartRanges,
    pub butterflies: ButterflyRanges,
    pub stars: StarRanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Will you be my Valentine?".into(),
            width: 1024.0,
            height: 768.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory that logical asset paths resolve against.
    pub dir: PathBuf,
    /// Logical path of the full-moon image.
    pub moon: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            moon: "/fullmoon.png".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Fixed seed for reproducible decorations. `None` asks the host for entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub decorations: DecorationConfig,
    pub window: WindowConfig,
    pub assets: AssetConfig,
}

impl CardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        debug!("loaded card config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let hearts = &self.decorations.hearts;
        check_within("hearts.left", hearts.left, 0.0, 100.0)?;
        check_within("hearts.top", hearts.top, 0.0, 100.0)?;
        check_within("hearts.delay", hearts.delay, 0.0, f32::MAX)?;
        check_positive("hearts.duration", hearts.duration)?;

        let butterflies = &self.decorations.butterflies;
        check_within("butterflies.left", butterflies.left, 0.0, 100.0)?;
        check_within("butterflies.top", butterflies.top, 0.0, 100.0)?;
        check_within("butterflies.delay", butterflies.delay, 0.0, f32::MAX)?;
        check_positive("butterflies.duration", butterflies.duration)?;
        check_positive("butterflies.scale", butterflies.scale)?;

        let stars = &self.decorations.stars;
        check_within("stars.left", stars.left, 0.0, 100.0)?;
        check_within("stars.top", stars.top, 0.0, 100.0)?;
        check_within("stars.delay", stars.delay, 0.0, f32::MAX)?;
        check_positive("stars.duration", stars.duration)?;
        check_positive("stars.size", stars.size)?;
        check_within("stars.opacity", stars.opacity, 0.0, 1.0)?;
        Ok(())
    }
}

fn check_span(field: &'static str, span: Span) -> Result<(), ConfigError> {
    if !span.min().is_finite() || !span.max().is_finite() || span.min() > span.max() {
        return Err(ConfigError::InvalidSpan {
            field,
            min: span.min(),
            max: span.max(),
        });
    }
    Ok(())
}

fn check_within(field: &'static str, span: Span, lo: f32, hi: f32) -> Result<(), ConfigError> {
    check_span(field, span)?;
    if span.min() < lo || span.max() > hi {
        return Err(ConfigError::OutOfDomain {
            field,
            min: span.min(),
            max: span.max(),
            lo,
            hi,
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, span: Span) -> Result<(), ConfigError> {
    check_span(field, span)?;
    if span.min() <= 0.0 {
        return Err(ConfigError::OutOfDomain {
            field,
            min: span.min(),
            max: span.max(),
            lo: f32::MIN_POSITIVE,
            hi: f32::MAX,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        CardConfig::default().validate().unwrap();
    }

    #[test]
    fn sample_file_matches_defaults() {
        let config = CardConfig::from_toml(include_str!("../../../valentine.toml")).unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = CardConfig::from_toml("").unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let raw = r#"
seed = 7

[decorations.stars]
opacity = [0.2, 0.4]

[assets]
dir = "/usr/share/valentine"
"#;
        let config = CardConfig::from_toml(raw).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.decorations.stars.opacity, Span::new(0.2, 0.4));
        assert_eq!(config.decorations.stars.size, Span::new(1.0, 3.0));
        assert_eq!(config.assets.moon, "/fullmoon.png");
        assert_eq!(config.decorations.hearts, HeartRanges::default());
    }

    #[test]
    fn reversed_span_is_rejected() {
        let raw = "[decorations.hearts]\ndelay = [3.0, 1.0]\n";
        let err = CardConfig::from_toml(raw).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpan { field: "hearts.delay", .. }));
    }

    #[test]
    fn opacity_above_one_is_rejected() {
        let raw = "[decorations.stars]\nopacity = [0.5, 1.5]\n";
        let err = CardConfig::from_toml(raw).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfDomain { field: "stars.opacity", .. }));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let raw = "[decorations.butterflies]\nscale = [0.0, 1.0]\n";
        let err = CardConfig::from_toml(raw).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfDomain { field: "butterflies.scale", .. }));
    }

    #[test]
    fn span_sample_stays_inside() {
        let mut rng = fastrand::Rng::with_seed(42);
        let span = Span::new(20.0, 80.0);
        for _ in 0..1000 {
            assert!(span.contains(span.sample(&mut rng)));
        }
        let fixed = Span::new(2.0, 2.0);
        assert_eq!(fixed.sample(&mut rng), 2.0);
    }

    #[test]
    fn unordered_span_samples_between_its_bounds() {
        let mut rng = fastrand::Rng::with_seed(7);
        let reversed = Span::new(3.0, 1.0);
        for _ in 0..1000 {
            let value = reversed.sample(&mut rng);
            assert!((1.0..=3.0).contains(&value));
        }
        assert_eq!(Span::new(f32::NAN, 2.0).sample(&mut rng), 2.0);
        assert_eq!(Span::new(2.0, f32::NAN).sample(&mut rng), 2.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CardConfig::load(Path::new("/nonexistent/valentine.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/valentine.toml"));
    }
}
