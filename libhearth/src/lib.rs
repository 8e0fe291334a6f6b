//! Hearthshare - a community kitchen for international students
//!
//! This library provides the domain model for the Hearthshare application:
//! the recipe feed, the onboarding and upload flows, reward accounting, and
//! the mock store/profile catalogs. All data lives in memory; there is no
//! persistence or network layer.

pub mod data;
pub mod error;
pub mod feed;
pub mod logging;
pub mod onboarding;
pub mod photo;
pub mod rewards;
pub mod types;
pub mod wizard;

// Re-export commonly used types
pub use error::{HearthError, Result};
pub use feed::Feed;
pub use onboarding::{OnboardingFlow, OnboardingOutcome, OnboardingStep};
pub use photo::Photo;
pub use types::{Achievement, Product, Recipe, StoreLocation, User, UserRecipe};
pub use wizard::{UploadWizard, WizardStep};
