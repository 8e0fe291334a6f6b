//! Upload wizard screen: three form steps plus the celebration splash

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use libhearth::rewards::UPLOAD_AWARD_POINTS;
use libhearth::wizard::WizardStep;

use crate::app::{AppState, WizardField};
use crate::ui::{accent, centered_rect, muted, render_field};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, editor: Option<&TextArea>) {
    if state.upload.wizard.step == WizardStep::Celebration {
        render_celebration(frame, area, state);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step header
            Constraint::Min(3),    // Form body
            Constraint::Length(2), // Hints
        ])
        .split(area);

    render_step_header(frame, chunks[0], state);

    match state.upload.wizard.step {
        WizardStep::Basics => render_basics(frame, chunks[1], state, editor),
        WizardStep::Ingredients => render_entries(
            frame,
            chunks[1],
            state,
            editor,
            "Ingredients",
            &state.upload.wizard.ingredients,
        ),
        WizardStep::Steps => render_entries(
            frame,
            chunks[1],
            state,
            editor,
            "Cooking Steps",
            &state.upload.wizard.steps,
        ),
        WizardStep::Celebration => unreachable!("handled above"),
    }

    render_hints(frame, chunks[2], state);
}

fn step_number(step: WizardStep) -> u8 {
    match step {
        WizardStep::Basics => 1,
        WizardStep::Ingredients => 2,
        WizardStep::Steps | WizardStep::Celebration => 3,
    }
}

fn render_step_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let current = step_number(state.upload.wizard.step);

    let mut segments = vec![Span::styled(
        format!("Step {} of 3  ", current),
        accent(state).add_modifier(Modifier::BOLD),
    )];
    for i in 1..=3u8 {
        let style = if i <= current {
            accent(state).add_modifier(Modifier::BOLD)
        } else {
            muted(state)
        };
        segments.push(Span::styled("━━━━ ", style));
    }

    let header = Paragraph::new(Line::from(segments)).block(
        Block::default()
            .title(" Share a Recipe ")
            .borders(Borders::ALL)
            .border_style(accent(state)),
    );
    frame.render_widget(header, area);
}

fn render_basics(frame: &mut Frame, area: Rect, state: &AppState, editor: Option<&TextArea>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Photo
            Constraint::Length(3), // Title
            Constraint::Length(3), // Cuisine
            Constraint::Min(0),
        ])
        .split(area);

    let wizard = &state.upload.wizard;
    match &wizard.photo {
        Some(photo) => {
            let loaded = Paragraph::new(Line::from(vec![
                Span::styled("Photo loaded ", accent(state).add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("({}, {} bytes)  ", photo.mime.mime_str(), photo.byte_len),
                    muted(state),
                ),
                Span::styled("Ctrl+X to remove", muted(state)),
            ]))
            .block(
                Block::default()
                    .title(" Photo ")
                    .borders(Borders::ALL)
                    .border_style(accent(state)),
            );
            frame.render_widget(loaded, chunks[0]);
        }
        None => {
            let title = if state.upload.loading_photo {
                "Photo (loading...)"
            } else {
                "Photo (Ctrl+P to load)"
            };
            render_field(
                frame,
                chunks[0],
                state,
                title,
                &wizard.photo_path,
                "Path to a photo of your dish",
                state.upload.focus == WizardField::PhotoPath,
                editor,
            );
        }
    }

    render_field(
        frame,
        chunks[1],
        state,
        "Recipe Title",
        &wizard.title,
        "e.g., Grandma's Dumplings",
        state.upload.focus == WizardField::Title,
        editor,
    );
    render_field(
        frame,
        chunks[2],
        state,
        "Cuisine Type",
        &wizard.cuisine,
        "e.g., Chinese, Indian, Mexican",
        state.upload.focus == WizardField::Cuisine,
        editor,
    );
}

fn render_entries(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    editor: Option<&TextArea>,
    label: &str,
    entries: &[String],
) {
    let mut constraints: Vec<Constraint> = entries.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, entry) in entries.iter().enumerate() {
        render_field(
            frame,
            chunks[i],
            state,
            &format!("{} {}", label, i + 1),
            entry,
            if label == "Ingredients" {
                "e.g., 2 cups flour"
            } else {
                "Describe this step"
            },
            state.upload.focus == WizardField::Entry(i),
            editor,
        );
    }
}

fn render_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let wizard = &state.upload.wizard;

    let forward = match (wizard.step, wizard.can_advance()) {
        (WizardStep::Steps, true) => Span::styled(
            "Enter/Ctrl+S: Share Recipe",
            accent(state).add_modifier(Modifier::BOLD),
        ),
        (_, true) => Span::styled("Enter: Next", accent(state).add_modifier(Modifier::BOLD)),
        (WizardStep::Basics, false) => {
            Span::styled("Add a photo, title, and cuisine to continue", muted(state))
        }
        (_, false) => Span::styled("Fill in at least one entry to continue", muted(state)),
    };

    let mut extras = vec![forward, Span::raw("  ")];
    if wizard.step != WizardStep::Basics {
        extras.push(Span::styled(
            "Ctrl+B: Back | Ctrl+A: Add | Ctrl+D: Remove",
            muted(state),
        ));
        extras.push(Span::raw("  "));
    }
    extras.push(Span::styled("Esc: Cancel", muted(state)));

    frame.render_widget(Paragraph::new(Line::from(extras)), area);
}

fn render_celebration(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup = centered_rect(60, 50, area);

    let points = state
        .upload
        .pending_award
        .unwrap_or(UPLOAD_AWARD_POINTS);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Recipe Uploaded!",
            accent(state).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("You earned {} points!", points),
            muted(state),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("+{} pts", points),
            accent(state).add_modifier(Modifier::BOLD),
        )),
    ];

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(accent(state)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(widget, popup);
}
