//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! every event that can modify application state.

use crossterm::event::KeyEvent;
use libhearth::photo::Photo;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick; drives the celebration countdown
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Switch to a different screen via the tab bar
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Onboarding ===
    /// "Get Started" / "Next" / "Continue" / "Start Cooking"
    OnboardingAdvance,

    /// "Skip" from a feature slide
    OnboardingSkip,

    // === Text input ===
    /// Move focus to the next input field on the current form
    FocusNext,

    /// The focused input field's content changed
    InputChanged(String),

    // === List selection ===
    SelectNext,
    SelectPrev,

    // === Home feed ===
    /// Toggle the like on the selected recipe
    ToggleLike,

    // === Ingredient store ===
    /// Activate the selected product's deal link
    OpenDeal,

    // === Upload wizard ===
    /// Advance to the next wizard step (guard permitting)
    WizardNext,

    /// Go back one wizard step (no data loss)
    WizardBack,

    /// Append a blank ingredient/step entry
    WizardAddEntry,

    /// Remove the focused ingredient/step entry (refused at one entry)
    WizardRemoveEntry,

    /// Start loading the photo from the typed path
    WizardLoadPhotoRequested,

    /// Photo load finished
    WizardPhotoLoaded(Photo),

    /// Photo load failed
    WizardPhotoFailed(String),

    /// Discard the loaded photo
    WizardClearPhoto,

    /// Submit the draft recipe
    WizardSubmit,

    /// Celebration delay elapsed; apply the award and return home
    UploadFinished,

    /// Cancel the wizard, discarding the draft
    UploadCancelled,

    // === Error Handling ===
    ShowError(String),
    DismissError,

    // === Status Bar ===
    SetStatus(String),
    ClearStatus,
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome flow; only reachable before completion
    Onboarding,

    /// Community recipe feed
    Home,

    /// Recipe upload wizard
    Upload,

    /// Ingredient store directory
    Store,

    /// User profile and achievements
    Profile,
}
