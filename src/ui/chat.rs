//! Assistant chat panel, docked to the right edge of the shell.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::ChatRole;
use crate::theme::Palette;
use crate::ui::components::{card, render_input_field};
use crate::ui::spinner_frame;

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let width = (area.width / 3).clamp(30, 48).min(area.width);
    let panel = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    };

    frame.render_widget(Clear, panel);
    let block = card("Content Buddy", app.settings.get(), colors);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.chat.messages {
        let (prefix, style) = match message.role {
            ChatRole::User => ("you: ", Style::default().fg(colors.accent)),
            ChatRole::Model => ("buddy: ", Style::default().fg(colors.text)),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
            Span::styled(message.text.clone(), Style::default().fg(colors.text)),
        ]));
    }
    if app.chat.pending {
        lines.push(Line::from(Span::styled(
            format!("{} thinking…", spinner_frame(app.tick_count)),
            Style::default().fg(colors.dim),
        )));
    }

    // Keep the latest turns in view.
    let visible = chunks[0].height as usize;
    let skip = lines.len().saturating_sub(visible);
    let transcript: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(
        Paragraph::new(transcript).wrap(Wrap { trim: true }),
        chunks[0],
    );

    render_input_field(
        frame,
        chunks[1],
        "Message (Enter sends, Esc closes)",
        &app.chat.input,
        "Ask anything…",
        true,
        colors,
    );
}
