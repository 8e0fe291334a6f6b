//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> State
//!
//! All cross-screen effects (onboarding completion, upload completion,
//! navigation) flow through typed actions interpreted by the reducer;
//! there is no ambient shared state.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Screen};
pub use reducer::reduce;
pub use state::{
    AppState, DetailsField, FocusedInput, HomeState, InputId, OnboardingState, StatusBarState,
    StoreState, UiConfig, UploadState, WizardField,
};
