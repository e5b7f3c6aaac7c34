//! Behavioral tests for keyboard command mapping

use super::keys::{DeckCommand, command_for_key};

// ============================================================================
// SLIDE COMMAND BEHAVIORS
// ============================================================================

#[test]
fn given_arrow_right_when_decoded_then_next_slide() {
    assert_eq!(command_for_key("ArrowRight"), Some(DeckCommand::NextSlide));
}

#[test]
fn given_arrow_left_when_decoded_then_prev_slide() {
    assert_eq!(command_for_key("ArrowLeft"), Some(DeckCommand::PrevSlide));
}

#[test]
fn given_letter_d_when_decoded_then_next_slide_any_case() {
    assert_eq!(command_for_key("d"), Some(DeckCommand::NextSlide));
    assert_eq!(command_for_key("D"), Some(DeckCommand::NextSlide));
}

#[test]
fn given_letter_a_when_decoded_then_prev_slide_any_case() {
    assert_eq!(command_for_key("a"), Some(DeckCommand::PrevSlide));
    assert_eq!(command_for_key("A"), Some(DeckCommand::PrevSlide));
}

// ============================================================================
// VIEWPORT COMMAND BEHAVIORS
// ============================================================================

#[test]
fn given_vertical_arrows_when_decoded_then_scroll_commands() {
    assert_eq!(command_for_key("ArrowUp"), Some(DeckCommand::ScrollUp));
    assert_eq!(command_for_key("ArrowDown"), Some(DeckCommand::ScrollDown));
}

#[test]
fn given_ws_letters_when_decoded_then_scroll_commands_any_case() {
    assert_eq!(command_for_key("w"), Some(DeckCommand::ScrollUp));
    assert_eq!(command_for_key("W"), Some(DeckCommand::ScrollUp));
    assert_eq!(command_for_key("s"), Some(DeckCommand::ScrollDown));
    assert_eq!(command_for_key("S"), Some(DeckCommand::ScrollDown));
}

#[test]
fn given_home_and_end_when_decoded_then_jump_commands() {
    assert_eq!(command_for_key("Home"), Some(DeckCommand::JumpToTop));
    assert_eq!(command_for_key("End"), Some(DeckCommand::JumpToBottom));
}

// ============================================================================
// UNRECOGNIZED KEY BEHAVIORS
// ============================================================================

#[test]
fn given_unbound_keys_when_decoded_then_none() {
    for key in ["Enter", "Escape", "Tab", " ", "q", "ArrowRight2", ""] {
        assert_eq!(command_for_key(key), None, "key {key:?} should be unbound");
    }
}

#[test]
fn given_multi_char_words_when_decoded_then_not_mistaken_for_letters() {
    // "Delete" starts with 'd' but must not decode as NextSlide
    assert_eq!(command_for_key("Delete"), None);
    assert_eq!(command_for_key("Shift"), None);
}
