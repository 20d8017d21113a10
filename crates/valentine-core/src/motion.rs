//! Declarative animation timelines.
//!
//! Nothing here advances time. A host `MotionEngine` samples a [`Timeline`] at
//! an elapsed time and produces a [`Pose`]; this module only describes which
//! properties move, through which keyframes, for how long and after what delay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::decoration::{Butterfly, Heart, Star};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Horizontal offset in points.
    OffsetX,
    /// Vertical offset in points, positive downwards.
    OffsetY,
    /// Rotation in degrees, clockwise.
    Rotate,
    Scale,
    /// Extra horizontal squash, used for wing flutter.
    ScaleX,
    Opacity,
    /// Horizontal sweep as a fraction of the owner's width.
    Sweep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    EaseOut,
    #[default]
    EaseInOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Repeat {
    Once,
    /// Loops forever, holding the last keyframe for `gap` seconds between runs.
    Forever { gap: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub property: Property,
    pub keyframes: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub tracks: Vec<Track>,
    pub duration: f32,
    pub delay: f32,
    pub repeat: Repeat,
    pub ease: Ease,
    /// Keyframe offsets in `[0, 1]`; used for tracks with a matching keyframe count.
    pub times: Option<Vec<f32>>,
}

impl Timeline {
    pub fn once(duration: f32) -> Self {
        Self {
            tracks: Vec::new(),
            duration,
            delay: 0.0,
            repeat: Repeat::Once,
            ease: Ease::EaseOut,
            times: None,
        }
    }

    pub fn looping(duration: f32) -> Self {
        Self {
            tracks: Vec::new(),
            duration,
            delay: 0.0,
            repeat: Repeat::Forever { gap: 0.0 },
            ease: Ease::EaseInOut,
            times: None,
        }
    }

    pub fn track(mut self, property: Property, keyframes: &[f32]) -> Self {
        self.tracks.push(Track {
            property,
            keyframes: keyframes.to_vec(),
        });
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.repeat = Repeat::Forever { gap };
        self
    }

    pub fn times(mut self, times: &[f32]) -> Self {
        self.times = Some(times.to_vec());
        self
    }

    pub fn keyframes(&self, property: Property) -> Option<&[f32]> {
        self.tracks
            .iter()
            .find(|track| track.property == property)
            .map(|track| track.keyframes.as_slice())
    }
}

/// Sampled transform for one element. Identity unless a track overrides a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub offset: Vec2,
    pub rotate: f32,
    pub scale: f32,
    pub scale_x: f32,
    pub opacity: f32,
    pub sweep: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotate: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            opacity: 1.0,
            sweep: 0.0,
        }
    }
}

impl Pose {
    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::OffsetX => self.offset.x = value,
            Property::OffsetY => self.offset.y = value,
            Property::Rotate => self.rotate = value,
            Property::Scale => self.scale = value,
            Property::ScaleX => self.scale_x = value,
            Property::Opacity => self.opacity = value,
            Property::Sweep => self.sweep = value,
        }
    }
}

pub fn heart_float(heart: &Heart) -> Timeline {
    Timeline::looping(heart.duration)
        .delay(heart.delay)
        .track(Property::OffsetY, &[-20.0, -60.0, -20.0])
        .track(Property::OffsetX, &[-10.0, 10.0, -10.0])
        .track(Property::Rotate, &[-10.0, 10.0, -10.0])
}

pub fn star_twinkle(star: &Star) -> Timeline {
    Timeline::looping(star.duration)
        .delay(star.delay)
        .track(Property::Opacity, &[0.0, star.opacity, 0.0])
}

pub fn butterfly_flight(butterfly: &Butterfly) -> Timeline {
    Timeline::looping(butterfly.duration)
        .delay(butterfly.delay)
        .times(&[0.0, 0.2, 0.6, 1.0])
        .track(Property::Opacity, &[0.0, 1.0, 1.0, 1.0])
        .track(Property::OffsetY, &[50.0, -100.0, -250.0, -400.0])
        .track(Property::OffsetX, &[0.0, 30.0, -20.0, 40.0])
        .track(Property::Rotate, &[0.0, 15.0, -10.0, 20.0, -15.0, 0.0])
}

/// Wing beat. A 15° turn about the vertical axis reads as a horizontal squash.
pub fn wing_flutter() -> Timeline {
    let squash = 15f32.to_radians().cos();
    Timeline::looping(1.5)
        .track(Property::ScaleX, &[1.0, squash, squash, 1.0])
        .track(Property::Scale, &[1.0, 1.1, 0.9, 1.0])
}

pub fn emoji_pulse() -> Timeline {
    Timeline::looping(2.0)
        .track(Property::Rotate, &[0.0, 10.0, -10.0, 0.0])
        .track(Property::Scale, &[1.0, 1.1, 1.0])
}

pub fn accept_shine() -> Timeline {
    Timeline::looping(2.0)
        .gap(1.0)
        .track(Property::Sweep, &[-1.0, 2.0])
}

/// One-shot entrance animations of the two scenes.
pub mod entrance {
    use super::{Property, Timeline};

    pub fn night_sky() -> Timeline {
        Timeline::once(1.5).track(Property::Opacity, &[0.0, 1.0])
    }

    pub fn moon() -> Timeline {
        Timeline::once(1.5).track(Property::Scale, &[0.0, 1.0])
    }

    pub fn proposal() -> Timeline {
        Timeline::once(1.0).track(Property::Opacity, &[0.0, 1.0])
    }

    pub fn heading() -> Timeline {
        Timeline::once(0.8)
            .delay(0.2)
            .track(Property::OffsetY, &[-20.0, 0.0])
            .track(Property::Opacity, &[0.0, 1.0])
    }

    pub fn subtext() -> Timeline {
        Timeline::once(0.8).delay(0.6).track(Property::Opacity, &[0.0, 1.0])
    }

    pub fn buttons() -> Timeline {
        Timeline::once(0.5)
            .delay(0.8)
            .track(Property::Scale, &[0.8, 1.0])
            .track(Property::Opacity, &[0.0, 1.0])
    }

    pub fn hint() -> Timeline {
        Timeline::once(0.8).delay(1.2).track(Property::Opacity, &[0.0, 1.0])
    }

    /// Poem text, including the half-second delay of its container.
    pub fn poem() -> Timeline {
        Timeline::once(2.0)
            .delay(0.5 + 1.2)
            .track(Property::Opacity, &[0.0, 1.0])
            .track(Property::OffsetY, &[20.0, 0.0])
    }
}
