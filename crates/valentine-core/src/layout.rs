use crate::copy::{ProposalCopy, MOON_ALT, POEM, PROPOSAL};
use crate::decoration::{Butterfly, Heart, Star};
use crate::scene::{InteractionState, SceneController, ScreenPosition};

/// Daytime proposal: floating hearts, the question and the evasive decline button.
pub struct ProposalLayout<'a> {
    pub hearts: &'a [Heart],
    pub decline_at: ScreenPosition,
    pub copy: &'static ProposalCopy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoonSpec<'a> {
    pub logical_path: &'a str,
    pub alt: &'static str,
    /// Diameter in points.
    pub diameter: f32,
    /// Distance from the top edge in points.
    pub top: f32,
    /// Distance of the moon's right edge from the right edge, as a fraction of width.
    pub right_fraction: f32,
}

/// Night scene after acceptance: stars, moon, poem and butterflies.
pub struct CelebrationLayout<'a> {
    pub stars: &'a [Star],
    pub butterflies: &'a [Butterfly],
    pub moon: MoonSpec<'a>,
    pub poem: &'static [&'static str],
}

pub enum SceneLayout<'a> {
    Proposal(ProposalLayout<'a>),
    Celebration(CelebrationLayout<'a>),
}

impl SceneLayout<'_> {
    pub fn state(&self) -> InteractionState {
        match self {
            SceneLayout::Proposal(_) => InteractionState::Proposing,
            SceneLayout::Celebration(_) => InteractionState::Accepted,
        }
    }
}

/// Picks the composition for the controller's current state.
pub fn compose<'a>(controller: &'a SceneController, moon_path: &'a str) -> SceneLayout<'a> {
    let decorations = controller.decorations();
    match controller.state() {
        InteractionState::Proposing => SceneLayout::Proposal(ProposalLayout {
            hearts: decorations.hearts(),
            decline_at: controller.decline_position(),
            copy: &PROPOSAL,
        }),
        InteractionState::Accepted => SceneLayout::Celebration(CelebrationLayout {
            stars: decorations.stars(),
            butterflies: decorations.butterflies(),
            moon: MoonSpec {
                logical_path: moon_path,
                alt: MOON_ALT,
                diameter: 160.0,
                top: 40.0,
                right_fraction: 1.0 / 3.0,
            },
            poem: POEM,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecorationConfig;

    #[test]
    fn proposal_shows_hearts_and_decline_button() {
        let mut card = SceneController::new(&DecorationConfig::default(), 11);
        let moved = card.request_decline();
        match compose(&card, "/fullmoon.png") {
            SceneLayout::Proposal(layout) => {
                assert_eq!(layout.hearts.len(), 8);
                assert_eq!(layout.decline_at, moved);
                assert_eq!(layout.copy.question, "my Valentine?");
            }
            SceneLayout::Celebration(_) => panic!("expected proposal"),
        }
    }

    #[test]
    fn celebration_shows_night_decorations() {
        let mut card = SceneController::new(&DecorationConfig::default(), 12);
        card.request_accept();
        let layout = compose(&card, "/fullmoon.png");
        assert_eq!(layout.state(), InteractionState::Accepted);
        let SceneLayout::Celebration(night) = layout else {
            panic!("expected celebration");
        };
        assert_eq!(night.stars.len(), 50);
        assert_eq!(night.butterflies.len(), 15);
        assert_eq!(night.moon.logical_path, "/fullmoon.png");
        assert_eq!(night.moon.alt, "Full Moon");
        assert_eq!(night.poem.len(), 12);
    }

    #[test]
    fn layout_borrows_frozen_collections() {
        let card = SceneController::new(&DecorationConfig::default(), 13);
        let SceneLayout::Proposal(first) = compose(&card, "/m.png") else {
            panic!("expected proposal");
        };
        let SceneLayout::Proposal(second) = compose(&card, "/m.png") else {
            panic!("expected proposal");
        };
        assert!(std::ptr::eq(first.hearts, second.hearts));
    }
}
