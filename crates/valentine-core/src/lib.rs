//! Valentine card core: platform-agnostic scene state, decoration generation, and motion timelines.

pub mod config;
pub mod copy;
pub mod decoration;
pub mod layout;
pub mod motion;
pub mod scene;

pub use config::{CardConfig, ConfigError, DecorationConfig, Span};
pub use decoration::{Butterfly, DecorationSet, Heart, Star};
pub use layout::{compose, CelebrationLayout, MoonSpec, ProposalLayout, SceneLayout};
pub use motion::{Ease, Pose, Property, Repeat, Timeline, Track};
pub use scene::{CardInput, InteractionState, SceneController, ScreenPosition, Transition, SAFE_MARGIN};
