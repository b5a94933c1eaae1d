//! Settings overlay component

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::i18n::{tr, Msg};

/// Settings dialog: appearance toggles and language selection
pub struct SettingsPanel;

impl SettingsPanel {
    /// Render the settings overlay
    pub fn render(f: &mut Frame, app: &App) {
        let palette = app.palette();
        let lang = app.language();
        let appearance = app.prefs.appearance();

        let area = LayoutManager::centered_rect_lines(60, 11, f.area());
        f.render_widget(Clear, area);

        let section_style = Style::default().fg(palette.tint).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(palette.text);
        let muted = Style::default().fg(palette.text_muted);

        let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };

        // The explicit dark-mode switch is inert while following the system
        let dark_style = if appearance.use_system { muted } else { text_style };
        let dark_on = app.prefs.effective_scheme(app.system_scheme).is_dark();

        let lines = vec![
            Line::from(Span::styled(tr(lang, Msg::Appearance), section_style)),
            Line::from(Span::styled(
                format!("{} {}  (u)", checkbox(appearance.use_system), tr(lang, Msg::UseSystemTheme)),
                text_style,
            )),
            Line::from(Span::styled(
                format!("{} {}  (d)", checkbox(dark_on), tr(lang, Msg::DarkMode)),
                dark_style,
            )),
            Line::from(""),
            Line::from(Span::styled(tr(lang, Msg::LanguageLabel), section_style)),
            Line::from(Span::styled(
                format!("{}  (l)", app.prefs.language().label()),
                text_style,
            )),
            Line::from(""),
            Line::from(Span::styled(tr(lang, Msg::PersistHint), muted)),
        ];

        let panel = Paragraph::new(lines)
            .style(Style::default().bg(palette.surface))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .title(tr(lang, Msg::Settings)),
            );

        f.render_widget(panel, area);
    }
}
