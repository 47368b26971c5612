//! Home view: greeting plus the tool launcher cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Palette;
use crate::ui::components::card;

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let first_name = app
        .profile
        .get()
        .name
        .split_whitespace()
        .next()
        .unwrap_or("Creator")
        .to_string();

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Hello, {}", first_name),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "What are we creating today?",
            Style::default().fg(colors.dim),
        )),
    ]);
    frame.render_widget(greeting, chunks[0]);

    render_tool_card(
        frame,
        chunks[1],
        app,
        colors,
        "Synopsis Generator  [s]",
        "Turn your scripts into engaging summaries with tailored modes like Suspense or Descriptive.",
        colors.accent,
    );
    render_tool_card(
        frame,
        chunks[2],
        app,
        colors,
        "Hashtag Optimizer  [h]",
        "Boost visibility with AI-driven SEO tags based on real-time search trends.",
        colors.accent_alt,
    );
    render_tool_card(
        frame,
        chunks[3],
        app,
        colors,
        "Script to Audio  [soon]",
        "Generate realistic voiceovers from your text instantly.",
        colors.dim,
    );
}

fn render_tool_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    colors: &Palette,
    title: &str,
    description: &str,
    accent: ratatui::style::Color,
) {
    let block = card(title, app.settings.get(), colors).border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(description.to_string())
            .style(Style::default().fg(colors.dim))
            .wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}
