//! Onboarding screens: welcome splash, feature slides, details form

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use libhearth::data;
use libhearth::onboarding::{OnboardingStep, SLIDE_COUNT};

use crate::app::{AppState, DetailsField};
use crate::ui::{accent, centered_rect, muted, render_field};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, editor: Option<&TextArea>) {
    match state.onboarding.flow.step {
        OnboardingStep::Welcome => render_welcome(frame, area, state),
        OnboardingStep::Slide(i) => render_slide(frame, area, state, i),
        OnboardingStep::Details => render_details(frame, area, state, editor),
    }
}

fn render_welcome(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup = centered_rect(70, 60, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Hearthshare",
            accent(state).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A community for international students to share, explore,",
            muted(state),
        )),
        Line::from(Span::styled("and celebrate food from home", muted(state))),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to get started",
            accent(state),
        )),
    ];

    let welcome = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(accent(state)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(welcome, popup);
}

fn render_slide(frame: &mut Frame, area: Rect, state: &AppState, slide: u8) {
    let popup = centered_rect(70, 60, area);

    let slides = data::feature_slides();
    let feature = &slides[(slide as usize).saturating_sub(1).min(slides.len() - 1)];

    // Progress indicator: one segment per slide
    let mut indicator = Vec::new();
    for i in 1..=SLIDE_COUNT {
        let style = if i == slide {
            accent(state).add_modifier(Modifier::BOLD)
        } else {
            muted(state)
        };
        indicator.push(Span::styled("━━━━ ", style));
    }

    let advance_hint = if slide == SLIDE_COUNT {
        "Enter: Continue"
    } else {
        "Enter: Next"
    };

    let text = vec![
        Line::from(indicator),
        Line::from(""),
        Line::from(Span::styled(
            feature.title,
            accent(state).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(feature.description, muted(state))),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} | s: Skip", advance_hint),
            muted(state),
        )),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(accent(state)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(widget, popup);
}

fn render_details(frame: &mut Frame, area: Rect, state: &AppState, editor: Option<&TextArea>) {
    let popup = centered_rect(70, 70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(3), // Name
            Constraint::Length(3), // Country
            Constraint::Length(2), // Submit hint
            Constraint::Min(0),
        ])
        .split(popup);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Let's personalize your experience",
            accent(state).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Tell us a bit about yourself", muted(state))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let flow = &state.onboarding.flow;
    render_field(
        frame,
        chunks[1],
        state,
        "Your Name",
        &flow.name,
        "Enter your name",
        state.onboarding.focus == DetailsField::Name,
        editor,
    );
    render_field(
        frame,
        chunks[2],
        state,
        "Home Country",
        &flow.country,
        "e.g., China, India, Mexico",
        state.onboarding.focus == DetailsField::Country,
        editor,
    );

    let hint = if flow.can_submit() {
        Span::styled(
            "Enter: Start Cooking!",
            accent(state).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Fill in both fields to start cooking (Tab switches)", muted(state))
    };
    frame.render_widget(
        Paragraph::new(Line::from(hint)).alignment(Alignment::Center),
        chunks[3],
    );
}
