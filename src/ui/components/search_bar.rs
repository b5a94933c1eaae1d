//! Search bar component

use ratatui::{
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::i18n::{tr, Msg};

/// Search input row above the list
pub struct SearchBar;

impl SearchBar {
    /// Render the search bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let palette = app.palette();
        let lang = app.language();
        let query = app.browser.query();

        let (text, text_style) = if query.is_empty() && !app.search_active {
            (
                tr(lang, Msg::SearchPlaceholder).to_string(),
                Style::default().fg(palette.text_muted),
            )
        } else {
            let mut text = query.to_string();
            if app.search_active {
                text.push('▏');
            }
            (text, Style::default().fg(palette.text))
        };

        let border_style = if app.search_active {
            Style::default().fg(palette.tint)
        } else {
            Style::default().fg(palette.border)
        };

        let search = Paragraph::new(text).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(tr(lang, Msg::SearchTitle)),
        );

        f.render_widget(search, area);
    }
}
