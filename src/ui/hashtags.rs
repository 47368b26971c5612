//! Hashtag generator tool screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, HashtagField};
use crate::models::{RecordKind, MODELS};
use crate::theme::Palette;
use crate::ui::components::{card, render_choice_row, render_input_field, render_slider};
use crate::ui::spinner_frame;

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    if let Some(result) = &app.hashtags.result {
        render_result(frame, area, app, colors, result);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    render_header(frame, chunks[0], app, colors);
    render_description_box(frame, chunks[1], app, colors);
    render_script_box(frame, chunks[2], app, colors);
    render_input_field(
        frame,
        chunks[3],
        "Script File (Optional, Enter loads)",
        &app.hashtags.script_file,
        "path/to/script.txt",
        app.hashtags.focus == HashtagField::ScriptFile,
        colors,
    );
    render_slider(
        frame,
        chunks[4],
        "Hashtag Count",
        app.hashtags.amount,
        10,
        100,
        app.hashtags.focus == HashtagField::Amount,
        colors,
    );

    let model_labels: Vec<&str> = MODELS.iter().map(|m| m.name).collect();
    render_choice_row(
        frame,
        chunks[5],
        "Model",
        &model_labels,
        app.hashtags.model_index,
        app.hashtags.focus == HashtagField::Model,
        colors,
    );

    render_status(frame, chunks[6], app, colors);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let mut lines = vec![Line::from(Span::styled(
        "← Hashtag Generator",
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    ))];
    if app.history.has_favorites(RecordKind::Hashtags) {
        lines.push(Line::from(Span::styled(
            "AI Learning Active: Adapting to your preferred hashtag styles.",
            Style::default().fg(colors.favorite),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_description_box(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let focused = app.hashtags.focus == HashtagField::Description;
    let block = card("", app.settings.get(), colors)
        .title("Content Description")
        .border_style(Style::default().fg(if focused { colors.accent_alt } else { colors.border }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.hashtags.description.is_empty() {
        frame.render_widget(
            Paragraph::new(
                "Describe your video (e.g., A travel vlog visiting Kyoto focusing on street food)",
            )
            .style(Style::default().fg(colors.dim))
            .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }

    let tail = app
        .hashtags
        .description
        .tail_lines(inner.height as usize)
        .join("\n");
    frame.render_widget(Paragraph::new(tail).wrap(Wrap { trim: false }), inner);
}

fn render_script_box(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let focused = app.hashtags.focus == HashtagField::Script;
    let title = match &app.hashtags.file_name {
        Some(name) => format!("Script Context — {}", name),
        None => "Script Context (optional)".to_string(),
    };
    let block = card("", app.settings.get(), colors)
        .title(title)
        .border_style(Style::default().fg(if focused { colors.accent_alt } else { colors.border }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.hashtags.script.is_empty() {
        frame.render_widget(
            Paragraph::new("AI will analyze trends data to find high-ranking keywords for your niche.")
                .style(Style::default().fg(colors.dim))
                .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }
    let tail = app
        .hashtags
        .script
        .tail_lines(inner.height as usize)
        .join("\n");
    frame.render_widget(Paragraph::new(tail).wrap(Wrap { trim: false }), inner);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let line = if app.hashtags.pending.is_some() {
        Line::from(Span::styled(
            format!("{} Optimizing SEO...", spinner_frame(app.tick_count)),
            Style::default().fg(colors.accent_alt),
        ))
    } else if let Some(error) = &app.hashtags.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.danger),
        ))
    } else {
        Line::from(Span::styled(
            "Ctrl+G Generate Hashtags",
            Style::default().fg(colors.dim),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App, colors: &Palette, result: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let block = card("Optimized Hashtags", app.settings.get(), colors);
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    // Hashtag tokens get the accent; stray tokens render plain.
    let mut spans = Vec::new();
    for token in result.split(' ') {
        if token.trim().starts_with('#') {
            spans.push(Span::styled(
                token.to_string(),
                Style::default().fg(colors.accent_alt).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(token.to_string(), Style::default().fg(colors.text)));
        }
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        inner,
    );

    frame.render_widget(
        Paragraph::new("Esc back to edit  ·  y copy all")
            .style(Style::default().fg(colors.dim)),
        chunks[1],
    );
}
