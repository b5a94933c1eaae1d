//! Detail view component

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::capitalize;
use crate::constants::{STAT_BAR_MAX, STAT_BAR_WIDTH};
use crate::i18n::{tr, Msg};

/// Full-screen detail view for one Pokémon
pub struct DetailPanel;

impl DetailPanel {
    /// Render the detail screen
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let Some(detail) = app.detail.as_ref() else {
            return;
        };

        let palette = app.palette();
        let lang = app.language();

        let title = format!("#{:04} {}", detail.id, capitalize(&detail.name));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(title)
            .title_alignment(Alignment::Center);

        if let Some(error) = &detail.error {
            let body = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{}: {}", tr(lang, Msg::FetchFailed), error),
                    Style::default().fg(palette.danger),
                )),
                Line::from(Span::styled(
                    tr(lang, Msg::RetryHint),
                    Style::default().fg(palette.text_muted),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(body, area);
            return;
        }

        let Some(record) = &detail.record else {
            let body = Paragraph::new(tr(lang, Msg::Loading))
                .style(Style::default().fg(palette.text_muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(body, area);
            return;
        };

        let section_style = Style::default().fg(palette.tint).add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(palette.text_muted);

        let mut lines: Vec<Line> = Vec::new();

        // Type chips
        let mut chips: Vec<Span> = Vec::new();
        for slot in &record.types {
            if !chips.is_empty() {
                chips.push(Span::raw(" "));
            }
            chips.push(Span::styled(
                format!(" {} ", capitalize(&slot.type_ref.name)),
                Style::default().fg(palette.text).bg(palette.chip),
            ));
        }
        lines.push(Line::from(chips));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(tr(lang, Msg::Info), section_style)));
        lines.push(Line::from(format!(
            "{}: {:.1} m",
            tr(lang, Msg::Height),
            record.height as f64 / 10.0
        )));
        lines.push(Line::from(format!(
            "{}: {:.1} kg",
            tr(lang, Msg::Weight),
            record.weight as f64 / 10.0
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(tr(lang, Msg::BaseStats), section_style)));
        for slot in &record.stats {
            let value = slot.base_stat.clamp(0, STAT_BAR_MAX);
            let filled = (value as usize * STAT_BAR_WIDTH) / STAT_BAR_MAX as usize;
            lines.push(Line::from(vec![
                Span::raw(format!("{:<16} {:>3} ", capitalize(&slot.stat.name), slot.base_stat)),
                Span::styled("█".repeat(filled), Style::default().fg(palette.tint)),
                Span::styled("░".repeat(STAT_BAR_WIDTH - filled), muted),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", tr(lang, Msg::Artwork)), section_style),
            Span::styled(app.artwork_url(record.id), muted),
        ]));

        let body = Paragraph::new(lines)
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: false })
            .block(block);
        f.render_widget(body, area);
    }
}
