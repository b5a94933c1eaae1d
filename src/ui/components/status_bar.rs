//! Status bar component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::i18n::{tr, Msg};

/// One-line status bar at the bottom of the screen
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let palette = app.palette();
        let lang = app.language();

        let (text, color) = if app.browser.is_loading() {
            (tr(lang, Msg::Loading), palette.tint)
        } else if app.list_has_error() {
            (tr(lang, Msg::FetchFailed), palette.danger)
        } else {
            (tr(lang, Msg::StatusHints), palette.text_muted)
        };

        let status_bar = Paragraph::new(text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
