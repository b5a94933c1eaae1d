//! Pokémon list component

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::App;
use super::capitalize;
use crate::catalog::LoadStatus;
use crate::i18n::{tr, Msg};
use crate::pokeapi::extract_id;

/// Scrollable list of catalog entries
pub struct PokemonList;

impl PokemonList {
    /// Render the list, or the inline error state that replaces it
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let palette = app.palette();
        let lang = app.language();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!("{} ({})", tr(lang, Msg::AppTitle), app.browser.visible_len()))
            .title_alignment(Alignment::Center);

        // A list fetch failure replaces the list with an inline message
        if let LoadStatus::Error(message) = app.browser.status() {
            let error = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{}: {}", tr(lang, Msg::FetchFailed), message),
                    Style::default().fg(palette.danger),
                )),
                Line::from(Span::styled(
                    tr(lang, Msg::RetryHint),
                    Style::default().fg(palette.text_muted),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(error, area);
            return;
        }

        let items: Vec<ListItem> = app
            .browser
            .visible_items()
            .map(|item| {
                let id = extract_id(&item.url);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("#{id:04} "), Style::default().fg(palette.text_muted)),
                    Span::styled(capitalize(&item.name), Style::default().fg(palette.text)),
                ]))
            })
            .collect();

        if items.is_empty() {
            let message = if app.browser.is_loading() {
                tr(lang, Msg::Loading)
            } else {
                tr(lang, Msg::EmptyList)
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(palette.text_muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(palette.background)
                .bg(palette.tint)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(list, area, &mut app.list_state.clone());
    }
}
