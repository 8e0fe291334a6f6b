//! Reducer for state transitions
//!
//! `(State, Action) -> State`. The reducer computes new state values only;
//! timers and file I/O live in the event loop and report back as actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libhearth::onboarding::{OnboardingOutcome, OnboardingStep};
use libhearth::wizard::WizardStep;

use super::actions::{Action, Screen};
use super::state::{
    AppState, DetailsField, HomeState, InputId, OnboardingState, StatusBarState, UploadState,
    WizardField,
};

/// Reducer function
///
/// Takes current state and an action, returns new state. Guards that fail
/// (disabled buttons, unknown ids, refused removals) leave the state
/// unchanged rather than signaling errors.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => navigate(state, screen),

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Onboarding ===
        Action::OnboardingAdvance => {
            let mut onboarding = state.onboarding.clone();
            match onboarding.flow.advance() {
                Some(outcome) => complete_onboarding(state, outcome),
                None => AppState { onboarding, ..state },
            }
        }

        Action::OnboardingSkip => match state.onboarding.flow.skip() {
            Some(outcome) => complete_onboarding(state, outcome),
            None => state,
        },

        // === Text input ===
        Action::FocusNext => focus_next(state),

        Action::InputChanged(content) => input_changed(state, content),

        // === List selection ===
        Action::SelectNext => select(state, 1),
        Action::SelectPrev => select(state, -1),

        // === Home feed ===
        Action::ToggleLike => {
            let recipe_id = match state.selected_recipe() {
                Some(recipe) => recipe.id.clone(),
                None => return state,
            };
            let mut home = state.home.clone();
            home.feed.toggle_like(&recipe_id);
            AppState { home, ..state }
        }

        // === Ingredient store ===
        Action::OpenDeal => {
            let message = state.store.products.get(state.store.selected).map(|p| {
                tracing::info!(product = %p.name, link = %p.link, "deal opened");
                format!("Opening deal for {} ({})", p.name, p.link)
            });
            AppState {
                status: StatusBarState { message },
                ..state
            }
        }

        // === Upload wizard ===
        Action::WizardNext => {
            let mut upload = state.upload.clone();
            if upload.wizard.advance() {
                upload.focus = first_field(upload.wizard.step);
                AppState { upload, ..state }
            } else {
                state
            }
        }

        Action::WizardBack => {
            let mut upload = state.upload.clone();
            upload.wizard.back();
            upload.focus = first_field(upload.wizard.step);
            AppState { upload, ..state }
        }

        Action::WizardAddEntry => {
            let mut upload = state.upload.clone();
            match upload.wizard.step {
                WizardStep::Ingredients => {
                    upload.wizard.add_ingredient();
                    upload.focus = WizardField::Entry(upload.wizard.ingredients.len() - 1);
                }
                WizardStep::Steps => {
                    upload.wizard.add_step();
                    upload.focus = WizardField::Entry(upload.wizard.steps.len() - 1);
                }
                _ => return state,
            }
            AppState { upload, ..state }
        }

        Action::WizardRemoveEntry => remove_entry(state),

        Action::WizardLoadPhotoRequested => {
            if state.current_screen != Screen::Upload
                || state.upload.wizard.step != WizardStep::Basics
                || state.upload.loading_photo
            {
                return state;
            }
            if state.upload.wizard.photo_path.is_empty() {
                return AppState {
                    status: StatusBarState {
                        message: Some("Type a photo path first".to_string()),
                    },
                    ..state
                };
            }
            let mut upload = state.upload.clone();
            upload.loading_photo = true;
            AppState {
                upload,
                status: StatusBarState {
                    message: Some("Loading photo...".to_string()),
                },
                ..state
            }
        }

        Action::WizardPhotoLoaded(photo) => {
            // Ignore results that arrive after the wizard was torn down
            if !state.upload.loading_photo {
                return state;
            }
            let mut upload = state.upload.clone();
            upload.wizard.photo = Some(photo);
            upload.loading_photo = false;
            AppState {
                upload,
                status: StatusBarState {
                    message: Some("Photo added".to_string()),
                },
                ..state
            }
        }

        Action::WizardPhotoFailed(message) => {
            if !state.upload.loading_photo {
                return state;
            }
            let mut upload = state.upload.clone();
            upload.loading_photo = false;
            AppState {
                upload,
                error: Some(message),
                ..state
            }
        }

        Action::WizardClearPhoto => {
            let mut upload = state.upload.clone();
            upload.wizard.photo = None;
            AppState { upload, ..state }
        }

        Action::WizardSubmit => {
            let mut upload = state.upload.clone();
            match upload.wizard.submit() {
                Some(points) => {
                    upload.pending_award = Some(points);
                    AppState { upload, ..state }
                }
                None => state,
            }
        }

        Action::UploadFinished => {
            let points = match state.upload.pending_award {
                Some(points) => points,
                None => return state,
            };
            let mut user = state.user.clone();
            user.points += points;
            user.recipes_uploaded += 1;
            AppState {
                user,
                current_screen: Screen::Home,
                home: HomeState::new(),
                upload: UploadState::new(),
                status: StatusBarState {
                    message: Some(format!("Recipe uploaded! +{} pts", points)),
                },
                ..state
            }
        }

        Action::UploadCancelled => AppState {
            current_screen: Screen::Home,
            home: HomeState::new(),
            upload: UploadState::new(),
            ..state
        },

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Unconditional screen switch. Entering Home reseeds the feed and leaving
/// the upload screen discards the draft; screen-local state never survives
/// a tab switch.
fn navigate(state: AppState, screen: Screen) -> AppState {
    let previous = state.current_screen;
    let mut next = AppState {
        current_screen: screen,
        ..state
    };
    if screen == Screen::Home && previous != Screen::Home {
        next.home = HomeState::new();
    }
    if previous == Screen::Upload && screen != Screen::Upload {
        next.upload = UploadState::new();
    }
    next
}

fn complete_onboarding(state: AppState, outcome: OnboardingOutcome) -> AppState {
    let mut user = state.user.clone();
    user.name = outcome.name;
    user.country = outcome.country;
    AppState {
        user,
        has_completed_onboarding: true,
        current_screen: Screen::Home,
        home: HomeState::new(),
        onboarding: OnboardingState::new(),
        ..state
    }
}

/// Cycle focus through the current form's fields.
fn focus_next(state: AppState) -> AppState {
    match state.current_screen {
        Screen::Onboarding if state.onboarding.flow.step == OnboardingStep::Details => {
            let mut onboarding = state.onboarding.clone();
            onboarding.focus = match onboarding.focus {
                DetailsField::Name => DetailsField::Country,
                DetailsField::Country => DetailsField::Name,
            };
            AppState { onboarding, ..state }
        }
        Screen::Upload => {
            let mut upload = state.upload.clone();
            upload.focus = match upload.wizard.step {
                WizardStep::Basics => match upload.focus {
                    WizardField::PhotoPath => WizardField::Title,
                    WizardField::Title => WizardField::Cuisine,
                    _ => WizardField::PhotoPath,
                },
                WizardStep::Ingredients => match upload.focus {
                    WizardField::Entry(i) => {
                        WizardField::Entry((i + 1) % upload.wizard.ingredients.len())
                    }
                    _ => WizardField::Entry(0),
                },
                WizardStep::Steps => match upload.focus {
                    WizardField::Entry(i) => {
                        WizardField::Entry((i + 1) % upload.wizard.steps.len())
                    }
                    _ => WizardField::Entry(0),
                },
                WizardStep::Celebration => upload.focus,
            };
            AppState { upload, ..state }
        }
        _ => state,
    }
}

/// Write edited text into whichever field has focus.
fn input_changed(state: AppState, content: String) -> AppState {
    let id = match state.focused_input() {
        Some(focused) => focused.id,
        None => return state,
    };
    match id {
        InputId::OnboardingName => {
            let mut onboarding = state.onboarding.clone();
            onboarding.flow.name = content;
            AppState { onboarding, ..state }
        }
        InputId::OnboardingCountry => {
            let mut onboarding = state.onboarding.clone();
            onboarding.flow.country = content;
            AppState { onboarding, ..state }
        }
        InputId::PhotoPath => {
            let mut upload = state.upload.clone();
            upload.wizard.photo_path = content;
            AppState { upload, ..state }
        }
        InputId::Title => {
            let mut upload = state.upload.clone();
            upload.wizard.title = content;
            AppState { upload, ..state }
        }
        InputId::Cuisine => {
            let mut upload = state.upload.clone();
            upload.wizard.cuisine = content;
            AppState { upload, ..state }
        }
        InputId::Ingredient(i) => {
            let mut upload = state.upload.clone();
            upload.wizard.update_ingredient(i, content);
            AppState { upload, ..state }
        }
        InputId::CookingStep(i) => {
            let mut upload = state.upload.clone();
            upload.wizard.update_step(i, content);
            AppState { upload, ..state }
        }
    }
}

/// Move the selection on list screens. Clamps at both ends.
fn select(state: AppState, delta: i32) -> AppState {
    match state.current_screen {
        Screen::Home => {
            let len = state.home.feed.len();
            if len == 0 {
                return state;
            }
            let mut home = state.home.clone();
            home.selected = step_index(home.selected, delta, len);
            AppState { home, ..state }
        }
        Screen::Store => {
            let len = state.store.products.len();
            if len == 0 {
                return state;
            }
            let mut store = state.store.clone();
            store.selected = step_index(store.selected, delta, len);
            AppState { store, ..state }
        }
        _ => state,
    }
}

fn step_index(current: usize, delta: i32, len: usize) -> usize {
    if delta > 0 {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    }
}

fn remove_entry(state: AppState) -> AppState {
    let index = match state.upload.focus {
        WizardField::Entry(i) => i,
        _ => return state,
    };
    let mut upload = state.upload.clone();
    let removed = match upload.wizard.step {
        WizardStep::Ingredients => upload.wizard.remove_ingredient(index),
        WizardStep::Steps => upload.wizard.remove_step(index),
        _ => false,
    };
    if !removed {
        return state;
    }
    let len = match upload.wizard.step {
        WizardStep::Ingredients => upload.wizard.ingredients.len(),
        _ => upload.wizard.steps.len(),
    };
    upload.focus = WizardField::Entry(index.min(len - 1));
    AppState { upload, ..state }
}

/// The field that takes focus when a wizard step is entered.
fn first_field(step: WizardStep) -> WizardField {
    match step {
        WizardStep::Basics => WizardField::PhotoPath,
        WizardStep::Ingredients | WizardStep::Steps => WizardField::Entry(0),
        WizardStep::Celebration => WizardField::Entry(0),
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. The event loop routes printable keys
/// into the focused text field before they reach here, so plain character
/// bindings only fire outside text entry.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Overlays swallow input until dismissed
    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => reduce(state, Action::HideHelp),
            _ => state,
        };
    }
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc => reduce(state, Action::DismissError),
            _ => state,
        };
    }

    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::F(1), _) => return reduce(state, Action::ShowHelp),
        (KeyCode::Char('q'), KeyModifiers::NONE) => return reduce(state, Action::Quit),
        _ => {}
    }

    // Tab bar, once onboarding is behind us
    if state.has_completed_onboarding {
        let target = match (key.code, key.modifiers) {
            (KeyCode::Char('1'), KeyModifiers::NONE) => Some(Screen::Home),
            (KeyCode::Char('2'), KeyModifiers::NONE) => Some(Screen::Upload),
            (KeyCode::Char('3'), KeyModifiers::NONE) => Some(Screen::Store),
            (KeyCode::Char('4'), KeyModifiers::NONE) => Some(Screen::Profile),
            _ => None,
        };
        if let Some(screen) = target {
            return reduce(state, Action::NavigateTo(screen));
        }
    }

    // Screen-specific keybindings
    match state.current_screen {
        Screen::Onboarding => handle_onboarding_key(state, key),
        Screen::Home => handle_home_key(state, key),
        Screen::Upload => handle_upload_key(state, key),
        Screen::Store => handle_store_key(state, key),
        Screen::Profile => state,
    }
}

fn handle_onboarding_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter => reduce(state, Action::OnboardingAdvance),
        KeyCode::Char('s') => reduce(state, Action::OnboardingSkip),
        KeyCode::Tab => reduce(state, Action::FocusNext),
        _ => state,
    }
}

fn handle_home_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::SelectPrev),
        KeyCode::Enter | KeyCode::Char(' ') => reduce(state, Action::ToggleLike),
        _ => state,
    }
}

fn handle_upload_key(state: AppState, key: KeyEvent) -> AppState {
    let step = state.upload.wizard.step;

    // Header X: cancel at any form step, not gated by validation
    if key.code == KeyCode::Esc && step != WizardStep::Celebration {
        return reduce(state, Action::UploadCancelled);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => reduce(state, Action::FocusNext),
        (KeyCode::Enter, _) => match step {
            WizardStep::Steps => reduce(state, Action::WizardSubmit),
            WizardStep::Celebration => state,
            _ => reduce(state, Action::WizardNext),
        },
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => reduce(state, Action::WizardNext),
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => reduce(state, Action::WizardBack),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => reduce(state, Action::WizardAddEntry),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => reduce(state, Action::WizardRemoveEntry),
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
            reduce(state, Action::WizardLoadPhotoRequested)
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => reduce(state, Action::WizardClearPhoto),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => reduce(state, Action::WizardSubmit),
        _ => state,
    }
}

fn handle_store_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::SelectPrev),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => {
            reduce(state, Action::OpenDeal)
        }
        _ => state,
    }
}
