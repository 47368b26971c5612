//! Settings modal overlay: toggles, animation style, experimental flags,
//! export and reset actions.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::{App, SettingsRow};
use crate::theme::Palette;
use crate::ui::components::{card, toggle_span};

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let width = area.width.min(52);
    let height = (SettingsRow::ALL.len() as u16 + 4).min(area.height);
    let modal = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, modal);
    let block = card("Settings", app.settings.get(), colors);
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let settings = app.settings.get();
    let mut lines = Vec::new();
    for (i, row) in SettingsRow::ALL.iter().enumerate() {
        let selected = i == app.settings_modal.cursor;
        let marker = if selected { "> " } else { "  " };
        let label_style = if selected {
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        let line = match row {
            SettingsRow::Audio => Line::from(vec![
                Span::styled(format!("{marker}Sound Effects        "), label_style),
                toggle_span(settings.audio_enabled, colors),
            ]),
            SettingsRow::Slide => Line::from(vec![
                Span::styled(format!("{marker}Slide Navigation     "), label_style),
                toggle_span(settings.slide_enabled, colors),
            ]),
            SettingsRow::Bouncing => Line::from(vec![
                Span::styled(format!("{marker}Bouncy Animations    "), label_style),
                toggle_span(settings.bouncing_animation, colors),
            ]),
            SettingsRow::AnimationStyle => Line::from(vec![
                Span::styled(format!("{marker}Animation Style      "), label_style),
                Span::styled(
                    settings.animation_style.label(),
                    Style::default().fg(colors.accent),
                ),
            ]),
            SettingsRow::Experimental => Line::from(vec![
                Span::styled(format!("{marker}Experimental         "), label_style),
                toggle_span(settings.experimental_features, colors),
            ]),
            SettingsRow::Mode3d => {
                let style = if settings.experimental_features {
                    label_style
                } else {
                    Style::default().fg(colors.dim)
                };
                Line::from(vec![
                    Span::styled(format!("{marker}  True 3D Depth      "), style),
                    toggle_span(settings.enable_3d_mode, colors),
                ])
            }
            SettingsRow::Neon => {
                let style = if settings.experimental_features {
                    label_style
                } else {
                    Style::default().fg(colors.dim)
                };
                Line::from(vec![
                    Span::styled(format!("{marker}  Neon Mode          "), style),
                    toggle_span(settings.enable_neon, colors),
                ])
            }
            SettingsRow::Export => Line::from(Span::styled(
                format!("{marker}Export Backup"),
                label_style,
            )),
            SettingsRow::Import => Line::from(Span::styled(
                format!("{marker}Import Backup"),
                label_style,
            )),
            SettingsRow::Reset => Line::from(Span::styled(
                format!("{marker}Reset All Data"),
                if selected {
                    Style::default().fg(colors.danger).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.danger)
                },
            )),
        };
        lines.push(line);
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Enter/Space toggle  ·  Esc close",
        Style::default().fg(colors.dim),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
