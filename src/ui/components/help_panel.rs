//! Help overlay component

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::i18n::{tr, Msg};

/// Keyboard shortcut reference overlay
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help overlay
    pub fn render(f: &mut Frame, app: &App) {
        let palette = app.palette();
        let lang = app.language();

        let area = LayoutManager::centered_rect(60, 60, f.area());
        f.render_widget(Clear, area);

        let key_style = Style::default().fg(palette.tint).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(palette.text);

        let entry = |key: &'static str, msg: Msg| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), key_style),
                Span::styled(tr(lang, msg), text_style),
            ])
        };

        let lines = vec![
            entry("j / ↓", Msg::HelpMoveDown),
            entry("k / ↑", Msg::HelpMoveUp),
            entry("g / G", Msg::HelpJump),
            entry("Enter", Msg::HelpOpenDetails),
            entry("Esc", Msg::HelpBack),
            entry("/", Msg::HelpSearch),
            entry("r", Msg::HelpRefresh),
            entry("s", Msg::HelpSettings),
            entry("?", Msg::HelpToggle),
            entry("q", Msg::HelpQuit),
        ];

        let panel = Paragraph::new(lines)
            .style(Style::default().bg(palette.surface))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .title(tr(lang, Msg::Help)),
            );

        f.render_widget(panel, area);
    }
}
