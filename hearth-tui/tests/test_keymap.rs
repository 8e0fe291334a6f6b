//! Global keybindings and overlay behavior.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hearth_tui::app::{reduce, Action, AppState, Screen};

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn completed() -> AppState {
    let mut state = AppState::new();
    state.has_completed_onboarding = true;
    state.current_screen = Screen::Home;
    state
}

#[test]
fn test_q_quits() {
    let state = press(completed(), KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_q_does_not_quit() {
    let state = reduce(
        completed(),
        Action::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
    );
    assert!(!state.should_quit);
}

#[test]
fn test_digit_keys_switch_tabs() {
    let mut state = completed();

    state = press(state, KeyCode::Char('2'));
    assert_eq!(state.current_screen, Screen::Upload);
    state = press(state, KeyCode::Char('3'));
    assert_eq!(state.current_screen, Screen::Store);
    state = press(state, KeyCode::Char('4'));
    assert_eq!(state.current_screen, Screen::Profile);
    state = press(state, KeyCode::Char('1'));
    assert_eq!(state.current_screen, Screen::Home);
}

#[test]
fn test_f1_toggles_help() {
    let mut state = completed();

    state = press(state, KeyCode::F(1));
    assert!(state.help_visible);
    state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_help_overlay_swallows_other_keys() {
    let mut state = completed();
    state = press(state, KeyCode::F(1));

    // q normally quits; with help open it does nothing
    state = press(state, KeyCode::Char('q'));
    assert!(!state.should_quit);
    assert!(state.help_visible);

    state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
}

#[test]
fn test_esc_dismisses_error_overlay() {
    let mut state = completed();
    state = reduce(state, Action::ShowError("Photo not found".to_string()));

    // Other keys are swallowed while the error shows
    state = press(state, KeyCode::Char('3'));
    assert_eq!(state.current_screen, Screen::Home);
    assert!(state.error.is_some());

    state = press(state, KeyCode::Esc);
    assert!(state.error.is_none());
}

#[test]
fn test_profile_has_no_screen_bindings() {
    let mut state = completed();
    state = press(state, KeyCode::Char('4'));

    let before = state.clone();
    let after = press(state, KeyCode::Char('j'));
    assert_eq!(after.current_screen, before.current_screen);
    assert_eq!(after.user.points, before.user.points);
}
