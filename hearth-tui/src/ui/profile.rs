//! Profile screen: user card, reward progress, achievements, my recipes

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use libhearth::data::{self, PROFILE_TOTAL_LIKES};
use libhearth::rewards;

use crate::app::AppState;
use crate::ui::{accent, muted};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // User card
            Constraint::Length(4), // Reward progress
            Constraint::Length(7), // Achievements
            Constraint::Min(3),    // My recipes
        ])
        .split(area);

    render_user_card(frame, chunks[0], state);
    render_reward(frame, chunks[1], state);
    render_achievements(frame, chunks[2], state);
    render_my_recipes(frame, chunks[3], state);
}

fn render_user_card(frame: &mut Frame, area: Rect, state: &AppState) {
    let user = &state.user;

    let badges = user.badges.join(" | ");
    let lines = vec![
        Line::from(Span::styled(
            user.name.as_str(),
            accent(state).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("From {}", user.country), muted(state))),
        Line::from(Span::styled(badges, accent(state))),
        Line::from(vec![
            Span::styled(format!("{} recipes", user.recipes_uploaded), muted(state)),
            Span::raw("   "),
            Span::styled(format!("{} total likes", PROFILE_TOTAL_LIKES), muted(state)),
            Span::raw("   "),
            Span::styled(
                format!("{} pts", user.points),
                accent(state).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .border_style(accent(state)),
    );
    frame.render_widget(card, area);
}

fn render_reward(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Free Premium Steak ")
        .borders(Borders::ALL)
        .border_style(muted(state));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let points = state.user.points;
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "{} / {} pts · {} pts to go!",
                points,
                rewards::REWARD_THRESHOLD_POINTS,
                rewards::points_to_go(points)
            ),
            muted(state),
        )),
        rows[0],
    );

    let percent = rewards::progress_percent(points);
    let gauge = Gauge::default()
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", percent))
        .gauge_style(accent(state));
    frame.render_widget(gauge, rows[1]);
}

fn render_achievements(frame: &mut Frame, area: Rect, state: &AppState) {
    let check = if state.config.unicode_enabled { "✓" } else { "+" };

    let lines: Vec<Line> = data::achievements()
        .into_iter()
        .map(|achievement| {
            let marker = if achievement.earned {
                Span::styled(
                    format!("{} ", check),
                    accent(state).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!("[{}%] ", achievement.progress.unwrap_or(0)),
                    muted(state),
                )
            };
            Line::from(vec![
                marker,
                Span::styled(achievement.title, accent(state)),
                Span::raw("  "),
                Span::styled(achievement.description, muted(state)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Achievements ")
            .borders(Borders::ALL)
            .border_style(muted(state)),
    );
    frame.render_widget(widget, area);
}

fn render_my_recipes(frame: &mut Frame, area: Rect, state: &AppState) {
    let heart = if state.config.unicode_enabled { "♥" } else { "*" };

    let lines: Vec<Line> = data::user_recipes()
        .into_iter()
        .map(|recipe| {
            Line::from(vec![
                Span::styled(recipe.title, accent(state)),
                Span::raw("  "),
                Span::styled(
                    format!("{} {} · +{} pts", heart, recipe.likes, recipe.points),
                    muted(state),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" My Recipes ")
            .borders(Borders::ALL)
            .border_style(muted(state)),
    );
    frame.render_widget(widget, area);
}
