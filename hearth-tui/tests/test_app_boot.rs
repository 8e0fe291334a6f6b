//! Initial state of a freshly started app.

use hearth_tui::app::{AppState, Screen};

#[test]
fn test_boot_lands_on_onboarding() {
    let state = AppState::new();

    assert_eq!(state.current_screen, Screen::Onboarding);
    assert!(!state.has_completed_onboarding);
    assert!(!state.should_quit);
    assert!(!state.help_visible);
    assert!(state.error.is_none());
    assert!(state.status.message.is_none());
}

#[test]
fn test_boot_user_is_seed_user() {
    let state = AppState::new();

    assert_eq!(state.user.name, "Yiming Cheng");
    assert_eq!(state.user.country, "China");
    assert_eq!(state.user.points, 45);
    assert_eq!(state.user.recipes_uploaded, 3);
}

#[test]
fn test_boot_feed_is_seeded() {
    let state = AppState::new();

    assert_eq!(state.home.feed.len(), 4);
    assert_eq!(state.home.selected, 0);
    let first = state.home.feed.get(0).expect("first recipe");
    assert_eq!(first.id, "1");
    assert_eq!(first.likes, 245);
}

#[test]
fn test_boot_store_catalog_loaded() {
    let state = AppState::new();

    assert_eq!(state.store.stores.len(), 3);
    assert_eq!(state.store.products.len(), 3);
    assert_eq!(state.store.selected, 0);
}

#[test]
fn test_boot_upload_wizard_is_blank() {
    let state = AppState::new();

    assert!(state.upload.wizard.photo.is_none());
    assert!(state.upload.wizard.title.is_empty());
    assert_eq!(state.upload.wizard.ingredients, vec![String::new()]);
    assert_eq!(state.upload.wizard.steps, vec![String::new()]);
    assert!(!state.upload.loading_photo);
    assert!(state.upload.pending_award.is_none());
}

#[test]
fn test_no_text_input_focused_before_details_step() {
    let state = AppState::new();
    assert!(state.focused_input().is_none());
}
