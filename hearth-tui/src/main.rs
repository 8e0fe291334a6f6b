//! hearth-tui - Terminal UI for Hearthshare
//!
//! A community kitchen in the terminal: onboard, browse and like community
//! recipes, upload your own through a three-step wizard, and track reward
//! points. All data is in-memory; quitting forgets everything.

use std::time::Instant;

use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use hearth_tui::{
    app::{
        event::{EventHandler, TuiEvent},
        reduce, Action, AppState, InputId, Screen,
    },
    error::Result,
    services::{self, PhotoResult},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libhearth::rewards::CELEBRATION_DELAY;
use libhearth::wizard::WizardStep;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, which the alternate screen hides; only wire up the
    // subscriber when someone asked for logs explicitly.
    if std::env::var("HEARTH_LOG_LEVEL").is_ok() || std::env::var("HEARTH_LOG_FORMAT").is_ok() {
        libhearth::logging::init_default();
    }

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal);
    restore_terminal(terminal)?;

    Ok(result?)
}

/// Keys the focused text field must not swallow.
fn is_reserved_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::F(_))
        || key.modifiers.contains(KeyModifiers::CONTROL)
}

fn run_app(terminal: &mut Tui) -> Result<()> {
    let mut state = AppState::new();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Single editor widget synced with whichever field has focus
    let mut editor: Option<(InputId, TextArea<'static>)> = None;

    // Outstanding photo load, if any
    let mut photo_rx: Option<Receiver<PhotoResult>> = None;

    // Deadline for the celebration screen's deferred completion
    let mut celebration_deadline: Option<Instant> = None;

    loop {
        // Rebuild the editor when focus moves or state changed underneath it
        match state.focused_input() {
            Some(focused) => {
                let stale = match &editor {
                    Some((id, textarea)) => {
                        *id != focused.id || textarea.lines().join("\n") != focused.content
                    }
                    None => true,
                };
                if stale {
                    let mut textarea = if focused.content.is_empty() {
                        TextArea::default()
                    } else {
                        TextArea::from(
                            focused
                                .content
                                .lines()
                                .map(str::to_string)
                                .collect::<Vec<_>>(),
                        )
                    };
                    textarea.set_placeholder_text(focused.placeholder);
                    editor = Some((focused.id, textarea));
                }
            }
            None => editor = None,
        }

        terminal.draw(|frame| {
            ui::render(frame, &state, editor.as_ref().map(|(_, textarea)| textarea));
        })?;

        // Route printable keys into the focused field; everything else goes
        // through the reducer's keymap.
        let action = match (event_handler.next()?, editor.as_mut()) {
            (TuiEvent::Key(key), Some((_, textarea))) if !is_reserved_key(&key) => {
                textarea.input(key);
                Action::InputChanged(textarea.lines().join("\n"))
            }
            (other, _) => other.into(),
        };

        state = reduce(state, action);

        // Kick off a photo load when the reducer asked for one
        if state.upload.loading_photo && photo_rx.is_none() {
            photo_rx = Some(services::spawn_photo_load(
                state.upload.wizard.photo_path.clone(),
            ));
        }
        if state.current_screen != Screen::Upload {
            // Wizard torn down; any in-flight load result is stale
            photo_rx = None;
        }
        if let Some(rx) = &photo_rx {
            match rx.try_recv() {
                Ok(Ok(photo)) => {
                    state = reduce(state, Action::WizardPhotoLoaded(photo));
                    photo_rx = None;
                }
                Ok(Err(message)) => {
                    state = reduce(state, Action::WizardPhotoFailed(message));
                    photo_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => photo_rx = None,
            }
        }

        // The celebration completion is a deadline tied to the wizard's
        // lifetime: arm it when the celebration screen appears, drop it if
        // the user navigates away before it fires.
        let celebrating = state.current_screen == Screen::Upload
            && state.upload.wizard.step == WizardStep::Celebration;
        match (celebrating, celebration_deadline) {
            (true, None) => celebration_deadline = Some(Instant::now() + CELEBRATION_DELAY),
            (false, Some(_)) => celebration_deadline = None,
            _ => {}
        }
        if let Some(deadline) = celebration_deadline {
            if Instant::now() >= deadline {
                celebration_deadline = None;
                state = reduce(state, Action::UploadFinished);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
