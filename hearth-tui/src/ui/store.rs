//! Ingredient store screen: nearby stores, recommended products, community tip

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use libhearth::data::COMMUNITY_TIP;
use libhearth::types::Product;

use crate::app::AppState;
use crate::ui::{accent, muted};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(5), // Nearby stores
            Constraint::Min(5),    // Products
            Constraint::Length(4), // Community tip
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Ingredient Store",
            accent(state).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Find ingredients for your favorite recipes",
            muted(state),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    render_stores(frame, chunks[1], state);
    render_products(frame, chunks[2], state);

    let tip = Paragraph::new(COMMUNITY_TIP)
        .style(muted(state))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Community Tip ")
                .borders(Borders::ALL)
                .border_style(muted(state)),
        );
    frame.render_widget(tip, chunks[3]);
}

fn render_stores(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = state
        .store
        .stores
        .iter()
        .map(|store| {
            Line::from(vec![
                Span::styled(store.name.as_str(), accent(state)),
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", store.distance, store.address),
                    muted(state),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Stores Near You ")
            .borders(Borders::ALL)
            .border_style(muted(state)),
    );
    frame.render_widget(widget, area);
}

fn render_products(frame: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .store
        .products
        .iter()
        .map(|product| product_card(product, state))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Recommended for You ")
                .borders(Borders::ALL)
                .border_style(accent(state)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.store.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn product_card<'a>(product: &'a Product, state: &AppState) -> ListItem<'a> {
    let mut title_line = vec![Span::styled(
        product.name.as_str(),
        accent(state).add_modifier(Modifier::BOLD),
    )];
    if let Some(ref discount) = product.discount {
        title_line.push(Span::raw("  "));
        title_line.push(Span::styled(
            discount.as_str(),
            accent(state).add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::from(title_line),
        Line::from(Span::styled(
            format!("{} · {} · {}", product.store, product.price, product.category),
            muted(state),
        )),
        Line::from(Span::styled("Enter: View Deal", muted(state))),
        Line::from(""),
    ];

    ListItem::new(Text::from(lines))
}
