//! End-to-end walkthrough of deck navigation through the public API

#![allow(clippy::unwrap_used)]

use motion_deck::deck::{DeckCommand, DeckState, Direction, command_for_key};
use motion_deck::slides::deck_slides;
use motion_deck::transition::{SLIDE_DURATION_MS, SLIDE_OFFSET_PX, SlidePhase, TransitionSpec};

#[test]
fn presenter_walks_the_real_deck_front_to_back_and_back_again() {
    let slides = deck_slides();
    let mut deck = DeckState::new(slides.len()).unwrap();

    assert!(deck.is_first());
    assert!((deck.progress() - 0.0).abs() < f64::EPSILON);

    // Forward through every slide
    let mut visited = vec![deck.position()];
    while !deck.is_last() {
        deck = deck.go(Direction::Forward);
        visited.push(deck.position());
    }
    assert_eq!(visited, (0..slides.len()).collect::<Vec<_>>());
    assert!((deck.progress() - 100.0).abs() < f64::EPSILON);

    // Overshoot is absorbed
    let clamped = deck.go(Direction::Forward);
    assert_eq!(clamped.position(), deck.position());

    // All the way back
    while !deck.is_first() {
        deck = deck.go(Direction::Backward);
    }
    assert_eq!(deck.position(), 0);
    assert!((deck.progress() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn keyboard_driven_session_matches_button_driven_session() {
    let len = deck_slides().len();

    let press = |deck: DeckState, key: &str| match command_for_key(key) {
        Some(DeckCommand::NextSlide) => deck.go(Direction::Forward),
        Some(DeckCommand::PrevSlide) => deck.go(Direction::Backward),
        _ => deck,
    };

    let mut by_key = DeckState::new(len).unwrap();
    for key in ["ArrowRight", "d", "ArrowRight", "ArrowLeft", "a"] {
        by_key = press(by_key, key);
    }

    let by_button = DeckState::new(len)
        .unwrap()
        .go(Direction::Forward)
        .go(Direction::Forward)
        .go(Direction::Forward)
        .go(Direction::Backward)
        .go(Direction::Backward);

    assert_eq!(by_key, by_button);
}

#[test]
fn transition_for_each_step_mirrors_the_travel_direction() {
    let mut deck = DeckState::new(deck_slides().len()).unwrap();

    deck = deck.go(Direction::Forward);
    let enter = TransitionSpec::enter(deck.direction());
    let exit = TransitionSpec::exit(deck.direction());
    assert!((enter.start.translate_x - SLIDE_OFFSET_PX).abs() < f64::EPSILON);
    assert!((exit.end.translate_x + SLIDE_OFFSET_PX).abs() < f64::EPSILON);

    deck = deck.go(Direction::Backward);
    let enter = TransitionSpec::enter(deck.direction());
    let exit = TransitionSpec::exit(deck.direction());
    assert!((enter.start.translate_x + SLIDE_OFFSET_PX).abs() < f64::EPSILON);
    assert!((exit.end.translate_x - SLIDE_OFFSET_PX).abs() < f64::EPSILON);
}

#[test]
fn slide_lifecycle_runs_to_removal_within_one_duration_each_step() {
    // Entering settles after one duration; exiting is removed after one
    // duration; both constants are the same timer
    assert!(SLIDE_DURATION_MS > 0);

    let mut phase = SlidePhase::Entering;
    phase = phase.next().unwrap();
    assert_eq!(phase, SlidePhase::Settled);
    phase = phase.next().unwrap();
    assert_eq!(phase, SlidePhase::Exiting);
    phase = phase.next().unwrap();
    assert_eq!(phase, SlidePhase::Removed);
    assert!(phase.next().is_none());
}
