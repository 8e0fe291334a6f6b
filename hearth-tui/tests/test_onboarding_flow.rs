//! Onboarding end to end: welcome, feature slides, details form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hearth_tui::app::{reduce, Action, AppState, Screen};
use libhearth::onboarding::OnboardingStep;

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[test]
fn test_full_onboarding_with_details() {
    let mut state = AppState::new();
    assert_eq!(state.onboarding.flow.step, OnboardingStep::Welcome);

    // Welcome and the three feature slides
    state = press(state, KeyCode::Enter);
    assert_eq!(state.onboarding.flow.step, OnboardingStep::Slide(1));
    state = press(state, KeyCode::Enter);
    state = press(state, KeyCode::Enter);
    assert_eq!(state.onboarding.flow.step, OnboardingStep::Slide(3));
    state = press(state, KeyCode::Enter);
    assert_eq!(state.onboarding.flow.step, OnboardingStep::Details);

    // Name field has focus first
    state = reduce(state, Action::InputChanged("Mei".to_string()));
    state = reduce(state, Action::FocusNext);
    state = reduce(state, Action::InputChanged("China".to_string()));

    state = press(state, KeyCode::Enter);

    assert!(state.has_completed_onboarding);
    assert_eq!(state.current_screen, Screen::Home);
    assert_eq!(state.user.name, "Mei");
    assert_eq!(state.user.country, "China");
    // Points are untouched by onboarding
    assert_eq!(state.user.points, 45);
}

#[test]
fn test_submit_refused_until_both_fields_filled() {
    let mut state = AppState::new();
    for _ in 0..4 {
        state = press(state, KeyCode::Enter);
    }
    assert_eq!(state.onboarding.flow.step, OnboardingStep::Details);

    // Enter with both fields blank goes nowhere
    state = press(state, KeyCode::Enter);
    assert!(!state.has_completed_onboarding);
    assert_eq!(state.onboarding.flow.step, OnboardingStep::Details);

    // Name alone is not enough
    state = reduce(state, Action::InputChanged("Mei".to_string()));
    state = press(state, KeyCode::Enter);
    assert!(!state.has_completed_onboarding);
}

#[test]
fn test_skip_from_slide_applies_defaults() {
    let mut state = AppState::new();
    state = press(state, KeyCode::Enter); // Welcome -> Slide 1
    state = press(state, KeyCode::Char('s'));

    assert!(state.has_completed_onboarding);
    assert_eq!(state.current_screen, Screen::Home);
    assert_eq!(state.user.name, "Guest");
    assert_eq!(state.user.country, "International");
}

#[test]
fn test_skip_unavailable_on_welcome() {
    let state = AppState::new();
    let state = press(state, KeyCode::Char('s'));

    assert!(!state.has_completed_onboarding);
    assert_eq!(state.onboarding.flow.step, OnboardingStep::Welcome);
}

#[test]
fn test_tab_switches_details_focus() {
    let mut state = AppState::new();
    for _ in 0..4 {
        state = press(state, KeyCode::Enter);
    }

    let first = state.focused_input().expect("name focused").id;
    state = press(state, KeyCode::Tab);
    let second = state.focused_input().expect("country focused").id;
    assert_ne!(first, second);

    state = press(state, KeyCode::Tab);
    assert_eq!(state.focused_input().expect("wrapped").id, first);
}

#[test]
fn test_tab_bar_locked_until_onboarding_completes() {
    let state = AppState::new();
    let state = press(state, KeyCode::Char('3'));

    assert_eq!(state.current_screen, Screen::Onboarding);
}
