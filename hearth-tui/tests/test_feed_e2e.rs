//! Browsing and liking recipes on the home feed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hearth_tui::app::{reduce, Action, AppState, Screen};

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn at_home() -> AppState {
    let mut state = AppState::new();
    state.has_completed_onboarding = true;
    state.current_screen = Screen::Home;
    state
}

#[test]
fn test_like_first_recipe() {
    let mut state = at_home();
    assert_eq!(state.home.feed.get(0).unwrap().likes, 245);

    state = press(state, KeyCode::Enter);

    let first = state.home.feed.get(0).unwrap();
    assert!(first.is_liked);
    assert_eq!(first.likes, 246);
}

#[test]
fn test_unlike_restores_count() {
    let mut state = at_home();

    state = press(state, KeyCode::Enter);
    state = press(state, KeyCode::Enter);

    let first = state.home.feed.get(0).unwrap();
    assert!(!first.is_liked);
    assert_eq!(first.likes, 245);
}

#[test]
fn test_unlike_a_seeded_like() {
    let mut state = at_home();

    // Recipe "2" boots already liked
    state = press(state, KeyCode::Char('j'));
    state = press(state, KeyCode::Char(' '));

    let second = state.home.feed.get(1).unwrap();
    assert!(!second.is_liked);
    assert_eq!(second.likes, 188);
}

#[test]
fn test_selection_moves_with_vi_and_arrow_keys() {
    let mut state = at_home();

    state = press(state, KeyCode::Char('j'));
    assert_eq!(state.home.selected, 1);
    state = press(state, KeyCode::Down);
    assert_eq!(state.home.selected, 2);
    state = press(state, KeyCode::Char('k'));
    assert_eq!(state.home.selected, 1);
    state = press(state, KeyCode::Up);
    assert_eq!(state.home.selected, 0);
}

#[test]
fn test_likes_do_not_survive_leaving_home() {
    let mut state = at_home();
    state = press(state, KeyCode::Enter);
    assert_eq!(state.home.feed.get(0).unwrap().likes, 246);

    state = press(state, KeyCode::Char('4'));
    state = press(state, KeyCode::Char('1'));

    let first = state.home.feed.get(0).unwrap();
    assert!(!first.is_liked);
    assert_eq!(first.likes, 245);
    assert_eq!(state.home.selected, 0);
}

#[test]
fn test_like_leaves_other_recipes_alone() {
    let mut state = at_home();
    state = press(state, KeyCode::Enter);

    let likes: Vec<u32> = state
        .home
        .feed
        .recipes()
        .iter()
        .map(|r| r.likes)
        .collect();
    assert_eq!(likes, vec![246, 189, 312, 267]);
}
