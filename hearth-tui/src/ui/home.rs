//! Home screen: header with reward progress, weekly challenge, recipe feed

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use libhearth::rewards;
use libhearth::types::Recipe;

use crate::app::AppState;
use crate::ui::{accent, muted};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header with reward progress
            Constraint::Length(4), // Weekly challenge
            Constraint::Min(3),    // Feed
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_challenge(frame, chunks[1], state);
    render_feed(frame, chunks[2], state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Hearthshare ")
        .borders(Borders::ALL)
        .border_style(accent(state));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tagline and points
            Constraint::Length(1), // Reward label
            Constraint::Length(1), // Progress gauge
        ])
        .split(inner);

    let points = state.user.points;
    let header_line = Line::from(vec![
        Span::styled("Discover recipes from home", muted(state)),
        Span::raw("   "),
        Span::styled(
            format!("{} pts", points),
            accent(state).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header_line), rows[0]);

    let reward_line = Line::from(vec![
        Span::styled("Free Steak Reward", accent(state)),
        Span::raw("  "),
        Span::styled(
            format!("{} pts to go!", rewards::points_to_go(points)),
            muted(state),
        ),
    ]);
    frame.render_widget(Paragraph::new(reward_line), rows[1]);

    // The raw percentage is unclamped; the gauge widget needs 0..=1
    let percent = rewards::progress_percent(points);
    let gauge = Gauge::default()
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", percent))
        .gauge_style(accent(state));
    frame.render_widget(gauge, rows[2]);
}

fn render_challenge(frame: &mut Frame, area: Rect, state: &AppState) {
    let challenge = Paragraph::new(vec![
        Line::from(Span::styled(
            "Upload 2 recipes this week to earn 10 bonus points!",
            muted(state),
        )),
        Line::from(Span::styled("Progress: 1/2 recipes", accent(state))),
    ])
    .block(
        Block::default()
            .title(" Weekly Challenge ")
            .borders(Borders::ALL)
            .border_style(muted(state)),
    );
    frame.render_widget(challenge, area);
}

fn render_feed(frame: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .home
        .feed
        .recipes()
        .iter()
        .map(|recipe| recipe_card(recipe, state))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Community Recipes ")
                .borders(Borders::ALL)
                .border_style(accent(state)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.home.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn recipe_card<'a>(recipe: &'a Recipe, state: &AppState) -> ListItem<'a> {
    let heart = match (recipe.is_liked, state.config.unicode_enabled) {
        (true, true) => Span::styled("♥", Style::default().fg(Color::Red)),
        (false, true) => Span::raw("♡"),
        (true, false) => Span::styled("*", Style::default().fg(Color::Red)),
        (false, false) => Span::raw("o"),
    };

    let mut ingredients = recipe
        .ingredients
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if recipe.ingredients.len() > 3 {
        ingredients.push_str("...");
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                recipe.title.as_str(),
                accent(state).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", recipe.cuisine), muted(state)),
        ]),
        Line::from(Span::styled(
            format!("by {} · {}", recipe.author, recipe.timestamp),
            muted(state),
        )),
        Line::from(vec![
            heart,
            Span::raw(format!(" {}   {} comments   ", recipe.likes, recipe.comments)),
            Span::styled(format!("Key ingredients: {}", ingredients), muted(state)),
        ]),
        Line::from(""),
    ];

    ListItem::new(Text::from(lines))
}
