//! Application state
//!
//! The root state is the single source of truth. Each screen receives the
//! slice it needs and reports back through actions; transitions happen in
//! the reducer (see `reducer.rs`).

use libhearth::data;
use libhearth::feed::Feed;
use libhearth::onboarding::{OnboardingFlow, OnboardingStep};
use libhearth::types::{Product, StoreLocation, User};
use libhearth::wizard::{UploadWizard, WizardStep};

use super::actions::Screen;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub current_screen: Screen,

    /// Set once onboarding completes; gates the tab bar
    pub has_completed_onboarding: bool,

    /// The authoritative user record
    pub user: User,

    /// Onboarding screen state
    pub onboarding: OnboardingState,

    /// Home feed state; recreated on every entry to the home screen
    pub home: HomeState,

    /// Upload wizard state; recreated on cancel, completion, or navigation
    pub upload: UploadState,

    /// Ingredient store state
    pub store: StoreState,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Onboarding screen state: the flow plus which details field has focus.
#[derive(Debug, Clone)]
pub struct OnboardingState {
    pub flow: OnboardingFlow,
    pub focus: DetailsField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsField {
    Name,
    Country,
}

/// Home feed state
#[derive(Debug, Clone)]
pub struct HomeState {
    pub feed: Feed,
    pub selected: usize,
}

/// Upload wizard screen state
#[derive(Debug, Clone)]
pub struct UploadState {
    pub wizard: UploadWizard,
    pub focus: WizardField,
    /// One outstanding photo load at a time
    pub loading_photo: bool,
    /// Points waiting to be applied when the celebration delay elapses
    pub pending_award: Option<u32>,
}

/// Which wizard form field has focus. `Entry` indexes into whichever list
/// the current step edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardField {
    PhotoPath,
    Title,
    Cuisine,
    Entry(usize),
}

/// Ingredient store state
#[derive(Debug, Clone)]
pub struct StoreState {
    pub stores: Vec<StoreLocation>,
    pub products: Vec<Product>,
    pub selected: usize,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

/// Identity of a focusable text input, for syncing the editor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    OnboardingName,
    OnboardingCountry,
    PhotoPath,
    Title,
    Cuisine,
    Ingredient(usize),
    CookingStep(usize),
}

/// The currently focused text input, if any.
pub struct FocusedInput<'a> {
    pub id: InputId,
    pub content: &'a str,
    pub placeholder: &'static str,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self {
            flow: OnboardingFlow::new(),
            focus: DetailsField::Name,
        }
    }
}

impl HomeState {
    /// A freshly seeded feed with the first recipe selected.
    pub fn new() -> Self {
        Self {
            feed: Feed::seeded(),
            selected: 0,
        }
    }
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            wizard: UploadWizard::new(),
            focus: WizardField::PhotoPath,
            loading_photo: false,
            pending_award: None,
        }
    }
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            stores: data::nearby_stores(),
            products: data::recommended_products(),
            selected: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("HEARTH_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("HEARTH_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Onboarding,
            has_completed_onboarding: false,
            user: data::seed_user(),
            onboarding: OnboardingState::new(),
            home: HomeState::new(),
            upload: UploadState::new(),
            store: StoreState::new(),
            help_visible: false,
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with seed data
    pub fn new() -> Self {
        Self::default()
    }

    /// The text input that currently has focus, or `None` when no form is
    /// active (overlays open, presentational screens, celebration).
    pub fn focused_input(&self) -> Option<FocusedInput<'_>> {
        if self.help_visible || self.error.is_some() {
            return None;
        }

        match self.current_screen {
            Screen::Onboarding if self.onboarding.flow.step == OnboardingStep::Details => {
                Some(match self.onboarding.focus {
                    DetailsField::Name => FocusedInput {
                        id: InputId::OnboardingName,
                        content: &self.onboarding.flow.name,
                        placeholder: "Enter your name",
                    },
                    DetailsField::Country => FocusedInput {
                        id: InputId::OnboardingCountry,
                        content: &self.onboarding.flow.country,
                        placeholder: "e.g., China, India, Mexico",
                    },
                })
            }
            Screen::Upload => {
                let wizard = &self.upload.wizard;
                match (wizard.step, self.upload.focus) {
                    (WizardStep::Basics, WizardField::PhotoPath) => Some(FocusedInput {
                        id: InputId::PhotoPath,
                        content: &wizard.photo_path,
                        placeholder: "Path to a photo of your dish",
                    }),
                    (WizardStep::Basics, WizardField::Title) => Some(FocusedInput {
                        id: InputId::Title,
                        content: &wizard.title,
                        placeholder: "e.g., Grandma's Dumplings",
                    }),
                    (WizardStep::Basics, WizardField::Cuisine) => Some(FocusedInput {
                        id: InputId::Cuisine,
                        content: &wizard.cuisine,
                        placeholder: "e.g., Chinese, Indian, Mexican",
                    }),
                    (WizardStep::Ingredients, WizardField::Entry(i)) => Some(FocusedInput {
                        id: InputId::Ingredient(i),
                        content: wizard.ingredients.get(i).map(String::as_str).unwrap_or(""),
                        placeholder: "e.g., 2 cups flour",
                    }),
                    (WizardStep::Steps, WizardField::Entry(i)) => Some(FocusedInput {
                        id: InputId::CookingStep(i),
                        content: wizard.steps.get(i).map(String::as_str).unwrap_or(""),
                        placeholder: "Describe this step",
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// The recipe currently selected in the feed, if any.
    pub fn selected_recipe(&self) -> Option<&libhearth::types::Recipe> {
        self.home.feed.get(self.home.selected)
    }
}
