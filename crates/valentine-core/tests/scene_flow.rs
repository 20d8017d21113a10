use valentine_core::{
    compose, CardConfig, CardInput, InteractionState, SceneController, SceneLayout,
    ScreenPosition, Transition,
};

#[test]
fn decline_then_accept_switches_scene() {
    let config = CardConfig::default();
    let mut card = SceneController::new(&config.decorations, 2024);

    assert_eq!(card.state(), InteractionState::Proposing);
    assert_eq!(card.decline_position(), ScreenPosition { top: 60.0, left: 50.0 });

    let Transition::Relocated(moved) = card.handle(CardInput::DeclinePointerEnter) else {
        panic!("decline should relocate the button");
    };
    assert!((20.0..=80.0).contains(&moved.top));
    assert!((20.0..=80.0).contains(&moved.left));
    assert_eq!(card.state(), InteractionState::Proposing);
    assert!(matches!(
        compose(&card, &config.assets.moon),
        SceneLayout::Proposal(_)
    ));

    assert_eq!(card.handle(CardInput::AcceptClick), Transition::Accepted);
    match compose(&card, &config.assets.moon) {
        SceneLayout::Celebration(night) => {
            assert_eq!(night.stars.len(), 50);
            assert_eq!(night.butterflies.len(), 15);
        }
        SceneLayout::Proposal(_) => panic!("hearts and decline button should be gone"),
    }
}

#[test]
fn decorations_survive_repeated_renders() {
    let config = CardConfig::default();
    let mut card = SceneController::new(&config.decorations, 77);
    let snapshot = card.decorations().clone();

    for _ in 0..10 {
        let _ = compose(&card, &config.assets.moon);
        card.handle(CardInput::DeclineTouchStart);
    }
    card.handle(CardInput::AcceptClick);
    for _ in 0..10 {
        let _ = compose(&card, &config.assets.moon);
    }

    assert_eq!(card.decorations(), &snapshot);
}

#[test]
fn seed_reproduces_the_whole_card() {
    let config = CardConfig::default();
    let mut a = SceneController::new(&config.decorations, 5);
    let mut b = SceneController::new(&config.decorations, 5);
    assert_eq!(a.decorations(), b.decorations());
    assert_eq!(a.request_decline(), b.request_decline());
}
