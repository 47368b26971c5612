//! Synopsis generator tool screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, SynopsisField};
use crate::models::{RecordKind, SynopsisMode, MODELS};
use crate::theme::Palette;
use crate::ui::components::{card, render_choice_row, render_input_field, render_slider};
use crate::ui::spinner_frame;

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    if let Some(result) = &app.synopsis.result {
        render_result(frame, area, app, colors, result);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    render_header(frame, chunks[0], app, colors);
    render_script_box(frame, chunks[1], app, colors);
    render_input_field(
        frame,
        chunks[2],
        "Script File (.txt, Enter loads)",
        &app.synopsis.script_file,
        "path/to/script.txt",
        app.synopsis.focus == SynopsisField::ScriptFile,
        colors,
    );
    render_input_field(
        frame,
        chunks[3],
        "Video Title (Optional)",
        &app.synopsis.title,
        "e.g., My Vlog Ep. 1",
        app.synopsis.focus == SynopsisField::Title,
        colors,
    );
    render_slider(
        frame,
        chunks[4],
        "Word Count",
        app.synopsis.word_count,
        100,
        1000,
        app.synopsis.focus == SynopsisField::WordCount,
        colors,
    );

    let mode_labels: Vec<&str> = SynopsisMode::ALL.iter().map(|m| m.label()).collect();
    render_choice_row(
        frame,
        chunks[5],
        "Mode ",
        &mode_labels,
        app.synopsis.mode_index,
        app.synopsis.focus == SynopsisField::Mode,
        colors,
    );

    let model_labels: Vec<&str> = MODELS.iter().map(|m| m.name).collect();
    render_choice_row(
        frame,
        chunks[6],
        "Model",
        &model_labels,
        app.synopsis.model_index,
        app.synopsis.focus == SynopsisField::Model,
        colors,
    );

    render_status(frame, chunks[7], app, colors);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let mut lines = vec![Line::from(Span::styled(
        "← Synopsis Generator",
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    ))];
    if app.history.has_favorites(RecordKind::Synopsis) {
        lines.push(Line::from(Span::styled(
            "AI Learning Active: Using your past favorites to improve results.",
            Style::default().fg(colors.favorite),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_script_box(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let focused = app.synopsis.focus == SynopsisField::Script;
    let title = match &app.synopsis.file_name {
        Some(name) => format!("Script — {}", name),
        None => "Script (type or paste)".to_string(),
    };
    let block = card("", app.settings.get(), colors)
        .title(title)
        .border_style(Style::default().fg(if focused { colors.accent } else { colors.border }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.synopsis.script.is_empty() {
        frame.render_widget(
            Paragraph::new("Select or paste your video script to analyze")
                .style(Style::default().fg(colors.dim)),
            inner,
        );
        return;
    }

    let tail = app
        .synopsis
        .script
        .tail_lines(inner.height as usize)
        .join("\n");
    let footer = format!("({} words)", app.synopsis.script.word_count());
    frame.render_widget(
        Paragraph::new(format!("{}\n{}", tail, footer)).wrap(Wrap { trim: false }),
        inner,
    );
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let line = if app.synopsis.pending.is_some() {
        Line::from(Span::styled(
            format!("{} Analyzing Script...", spinner_frame(app.tick_count)),
            Style::default().fg(colors.accent),
        ))
    } else if let Some(error) = &app.synopsis.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.danger),
        ))
    } else {
        Line::from(Span::styled(
            "Ctrl+G Generate Synopsis",
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

    let block = card("Generated Synopsis", app.settings.get(), colors);
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);
    frame.render_widget(
        Paragraph::new(result.to_string()).wrap(Wrap { trim: false }),
        inner,
    );

    frame.render_widget(
        Paragraph::new("Esc back to edit  ·  y copy text")
            .style(Style::default().fg(colors.dim)),
        chunks[1],
    );
}
