//! UI rendering
//!
//! Rendering functions transform state into terminal frames and never
//! mutate anything. The single text editor widget is passed in from the
//! event loop and drawn wherever the focused field lives.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, Screen};

pub mod home;
pub mod onboarding;
pub mod profile;
pub mod store;
pub mod upload;

/// Brand colors: a saddle-brown kitchen palette.
const ACCENT: Color = Color::Rgb(139, 69, 19);
const MUTED: Color = Color::Rgb(160, 82, 45);

pub(crate) fn accent(state: &AppState) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    }
}

pub(crate) fn muted(state: &AppState) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(MUTED)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, editor: Option<&TextArea>) {
    let area = frame.area();

    // Pre-completion onboarding takes over the whole screen, no tab bar
    if state.current_screen == Screen::Onboarding && !state.has_completed_onboarding {
        onboarding::render(frame, area, state, editor);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Active screen
                Constraint::Length(1), // Status line
                Constraint::Length(3), // Tab bar
            ])
            .split(area);

        match state.current_screen {
            Screen::Home | Screen::Onboarding => home::render(frame, chunks[0], state),
            Screen::Upload => upload::render(frame, chunks[0], state, editor),
            Screen::Store => store::render(frame, chunks[0], state),
            Screen::Profile => profile::render(frame, chunks[0], state),
        }

        render_status_line(frame, chunks[1], state);
        render_tab_bar(frame, chunks[2], state);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match state.status.message {
        Some(ref message) => Line::from(Span::styled(message.clone(), accent(state))),
        None => Line::from(Span::styled(
            "q: Quit | F1: Help | 1-4: Switch tabs",
            muted(state),
        )),
    };
    frame.render_widget(Paragraph::new(text), area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let selected = match state.current_screen {
        Screen::Home | Screen::Onboarding => 0,
        Screen::Upload => 1,
        Screen::Store => 2,
        Screen::Profile => 3,
    };

    let tabs = Tabs::new(vec!["1 Home", "2 Upload", "3 Store", "4 Profile"])
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .style(muted(state))
        .highlight_style(accent(state).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  1-4      - Home / Upload / Store / Profile"),
        Line::from(""),
        Line::from("Lists:"),
        Line::from("  j/k, ↑/↓ - Move selection"),
        Line::from("  Enter    - Like recipe / open deal"),
        Line::from(""),
        Line::from("Forms:"),
        Line::from("  Tab      - Next field"),
        Line::from("  Enter    - Next step / submit"),
        Line::from("  Ctrl+B   - Back a step"),
        Line::from("  Ctrl+A   - Add ingredient/step"),
        Line::from("  Ctrl+D   - Remove entry"),
        Line::from("  Ctrl+P   - Load photo from path"),
        Line::from("  Esc      - Cancel upload"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(accent(state)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// A labeled single-line input field. The focused field shows the live
/// editor widget; the rest show their stored content.
pub(crate) fn render_field(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    title: &str,
    content: &str,
    placeholder: &str,
    focused: bool,
    editor: Option<&TextArea>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(if focused {
            accent(state).add_modifier(Modifier::BOLD)
        } else {
            muted(state)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match (focused, editor) {
        (true, Some(editor)) => frame.render_widget(editor, inner),
        _ => {
            let paragraph = if content.is_empty() {
                Paragraph::new(placeholder.to_string()).style(muted(state))
            } else {
                Paragraph::new(content.to_string())
            };
            frame.render_widget(paragraph, inner);
        }
    }
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
