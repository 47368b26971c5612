//! Shared rendering helpers for views and forms.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::stores::AppSettings;
use crate::theme::{uses_heavy_borders, Palette};
use crate::widgets::InputBox;

/// Card block in the active theme: rounded borders normally, heavy
/// double-struck borders in 3D/retro rendering.
pub fn card<'a>(title: &'a str, settings: &AppSettings, colors: &Palette) -> Block<'a> {
    let border_type = if uses_heavy_borders(settings) {
        BorderType::Double
    } else {
        BorderType::Rounded
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(
            title,
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(colors.surface).fg(colors.text))
}

/// Truncate to a display width, appending an ellipsis when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Render a labeled single-line input with a focus highlight.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &InputBox,
    placeholder: &str,
    focused: bool,
    colors: &Palette,
) {
    let border = if focused { colors.accent } else { colors.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(label.to_string());

    let inner_width = area.width.saturating_sub(2) as usize;
    let line = if input.is_empty() && !focused {
        Line::styled(placeholder.to_string(), Style::default().fg(colors.dim))
    } else {
        let mut visible = input.visible(inner_width.saturating_sub(1));
        if focused {
            visible.push('▏');
        }
        Line::styled(visible, Style::default().fg(colors.text))
    };

    frame.render_widget(
        Paragraph::new(line)
            .block(block)
            .style(Style::default().bg(colors.surface_alt)),
        area,
    );
}

/// Render a `[====|----] value` slider row.
pub fn render_slider(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: u32,
    min: u32,
    max: u32,
    focused: bool,
    colors: &Palette,
) {
    let gauge_width = area.width.saturating_sub(14) as usize;
    let filled = if max > min {
        (gauge_width as u32 * (value - min) / (max - min)) as usize
    } else {
        0
    };
    let bar: String = (0..gauge_width)
        .map(|i| if i < filled { '━' } else { '─' })
        .collect();

    let style = if focused {
        Style::default().fg(colors.accent)
    } else {
        Style::default().fg(colors.dim)
    };
    let line = Line::from(vec![
        Span::styled(format!("{label} "), Style::default().fg(colors.text)),
        Span::styled(bar, style),
        Span::styled(
            format!(" {value}"),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render a horizontal option picker, highlighting the chosen entry.
pub fn render_choice_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: usize,
    focused: bool,
    colors: &Palette,
) {
    let mut spans = vec![Span::styled(
        format!("{label} "),
        Style::default().fg(colors.text),
    )];
    for (i, option) in options.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(colors.bg)
                .bg(if focused { colors.accent } else { colors.dim })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.dim)
        };
        spans.push(Span::styled(format!(" {option} "), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// On/off toggle rendering for settings rows.
pub fn toggle_span(on: bool, colors: &Palette) -> Span<'static> {
    if on {
        Span::styled("[on] ", Style::default().fg(colors.accent))
    } else {
        Span::styled("[off]", Style::default().fg(colors.dim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_strings_unchanged() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        let out = truncate("a very long title indeed", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }
}
