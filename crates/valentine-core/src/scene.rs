use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{DecorationConfig, Span};
use crate::decoration::DecorationSet;

/// Both axes of the decline button stay inside this band so it is never clipped.
pub const SAFE_MARGIN: Span = Span::new(20.0, 80.0);

/// Placement of the decline button, in percent of its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub top: f32,
    pub left: f32,
}

impl ScreenPosition {
    pub const INITIAL: Self = Self {
        top: 60.0,
        left: 50.0,
    };

    /// (left, top) as an x/y pair.
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn is_within_safe_margin(&self) -> bool {
        SAFE_MARGIN.contains(self.top) && SAFE_MARGIN.contains(self.left)
    }
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Proposing,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardInput {
    DeclinePointerEnter,
    DeclineClick,
    DeclineTouchStart,
    AcceptClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Transition {
    Relocated(ScreenPosition),
    Accepted,
    Unchanged,
}

/// Owns everything the card mutates. Created when the card mounts and dropped
/// with it; decorations are drawn here once and only read afterwards.
pub struct SceneController {
    state: InteractionState,
    decline_at: ScreenPosition,
    decorations: DecorationSet,
    rng: fastrand::Rng,
}

impl SceneController {
    pub fn new(config: &DecorationConfig, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let decorations = DecorationSet::generate(config, &mut rng);
        Self {
            state: InteractionState::Proposing,
            decline_at: ScreenPosition::INITIAL,
            decorations,
            rng,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn decline_position(&self) -> ScreenPosition {
        self.decline_at
    }

    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    pub fn handle(&mut self, input: CardInput) -> Transition {
        match input {
            CardInput::DeclinePointerEnter
            | CardInput::DeclineClick
            | CardInput::DeclineTouchStart => Transition::Relocated(self.request_decline()),
            CardInput::AcceptClick => {
                if self.request_accept() {
                    Transition::Accepted
                } else {
                    Transition::Unchanged
                }
            }
        }
    }

    /// Moves the decline button somewhere else inside [`SAFE_MARGIN`].
    pub fn request_decline(&mut self) -> ScreenPosition {
        self.decline_at = ScreenPosition {
            top: SAFE_MARGIN.sample(&mut self.rng),
            left: SAFE_MARGIN.sample(&mut self.rng),
        };
        debug!(
            top = self.decline_at.top,
            left = self.decline_at.left,
            "decline button relocated"
        );
        self.decline_at
    }

    /// Returns `true` only for the call that actually switched scenes.
    pub fn request_accept(&mut self) -> bool {
        if self.state == InteractionState::Accepted {
            return false;
        }
        self.state = InteractionState::Accepted;
        info!("proposal accepted, switching to night scene");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(seed: u64) -> SceneController {
        SceneController::new(&DecorationConfig::default(), seed)
    }

    #[test]
    fn starts_proposing_at_initial_position() {
        let card = controller(1);
        assert_eq!(card.state(), InteractionState::Proposing);
        assert_eq!(card.decline_position(), ScreenPosition { top: 60.0, left: 50.0 });
    }

    #[test]
    fn decline_always_lands_in_safe_margin() {
        let mut card = controller(2);
        for _ in 0..5_000 {
            let position = card.request_decline();
            assert!(position.is_within_safe_margin(), "{position:?}");
            assert_eq!(position, card.decline_position());
        }
        assert_eq!(card.state(), InteractionState::Proposing);
    }

    #[test]
    fn decline_keeps_moving() {
        let mut card = controller(3);
        let first = card.request_decline();
        let second = card.request_decline();
        assert_ne!(first, second);
    }

    #[test]
    fn accept_is_idempotent() {
        let mut card = controller(4);
        assert!(card.request_accept());
        let position = card.decline_position();
        assert!(!card.request_accept());
        assert_eq!(card.state(), InteractionState::Accepted);
        assert_eq!(card.decline_position(), position);
    }

    #[test]
    fn no_input_returns_to_proposing() {
        let mut card = controller(5);
        card.request_accept();
        for input in [
            CardInput::DeclinePointerEnter,
            CardInput::DeclineClick,
            CardInput::DeclineTouchStart,
            CardInput::AcceptClick,
        ] {
            card.handle(input);
            assert_eq!(card.state(), InteractionState::Accepted);
        }
    }

    #[test]
    fn inputs_map_to_transitions() {
        let mut card = controller(6);
        assert!(matches!(card.handle(CardInput::DeclinePointerEnter), Transition::Relocated(_)));
        assert!(matches!(card.handle(CardInput::DeclineClick), Transition::Relocated(_)));
        assert!(matches!(card.handle(CardInput::DeclineTouchStart), Transition::Relocated(_)));
        assert_eq!(card.handle(CardInput::AcceptClick), Transition::Accepted);
        assert_eq!(card.handle(CardInput::AcceptClick), Transition::Unchanged);
    }

    #[test]
    fn decorations_unchanged_by_interaction() {
        let mut card = controller(7);
        let before = card.decorations().clone();
        for _ in 0..20 {
            card.request_decline();
        }
        card.request_accept();
        assert_eq!(card.decorations(), &before);
    }
}
