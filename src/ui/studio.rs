//! Studio view: the generation history list with filtering and sorting.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::RecordKind;
use crate::stores::KindFilter;
use crate::theme::Palette;
use crate::ui::components::{card, truncate};

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .margin(1)
        .split(area);

    render_header(frame, chunks[0], app, colors);
    render_list(frame, chunks[1], app, colors);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let filter = &app.studio.filter;
    let mut summary = vec![Span::styled(
        "The Studio",
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )];
    if filter.is_active() {
        summary.push(Span::styled(
            "  ● filtered",
            Style::default().fg(colors.accent),
        ));
    }
    let lines = vec![
        Line::from(summary),
        Line::from(Span::styled(
            format!(
                "Manage your creations — {} shown, sort: {}",
                app.history.filter_and_sort(filter).len(),
                filter.sort.label()
            ),
            Style::default().fg(colors.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let records = app.history.filter_and_sort(&app.studio.filter);
    if records.is_empty() {
        frame.render_widget(
            Paragraph::new("No results found.")
                .style(Style::default().fg(colors.dim))
                .alignment(ratatui::layout::Alignment::Center),
            area,
        );
        return;
    }

    // Each entry takes four rows; scroll so the selection stays visible.
    let row_height = 4u16;
    let visible_rows = (area.height / row_height).max(1) as usize;
    let first = app
        .studio
        .selected
        .saturating_sub(visible_rows.saturating_sub(1));

    for (slot, (index, record)) in records
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_rows)
        .enumerate()
    {
        let rect = Rect {
            x: area.x,
            y: area.y + (slot as u16) * row_height,
            width: area.width,
            height: row_height.min(area.height.saturating_sub((slot as u16) * row_height)),
        };
        render_entry(frame, rect, app, colors, record, index == app.studio.selected);
    }
}

fn render_entry(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    colors: &Palette,
    record: &crate::models::GenerationRecord,
    selected: bool,
) {
    let kind_tag = match record.kind {
        RecordKind::Synopsis => Span::styled("[doc] ", Style::default().fg(colors.accent)),
        RecordKind::Hashtags => Span::styled("[tag] ", Style::default().fg(colors.accent_alt)),
    };
    let star = if record.is_favorite {
        Span::styled("★ ", Style::default().fg(colors.favorite))
    } else {
        Span::styled("☆ ", Style::default().fg(colors.dim))
    };
    let title_style = if selected {
        Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
    };

    let width = area.width.saturating_sub(4) as usize;
    let meta = format!(
        "{}  ·  {}  ·  {} words",
        record.created_at.format("%b %d %H:%M"),
        record.params.model_id.replace("gemini-", ""),
        record.word_count(),
    );

    let block = card("", app.settings.get(), colors).border_style(Style::default().fg(
        if selected { colors.accent } else { colors.border },
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            star,
            kind_tag,
            Span::styled(truncate(record.display_title(), width), title_style),
        ]),
        Line::from(Span::styled(meta, Style::default().fg(colors.dim))),
        Line::from(Span::styled(
            truncate(&record.content.replace('\n', " "), width),
            Style::default().fg(colors.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Bottom-sheet style filter panel drawn over the Studio view.
pub fn render_filter_sheet(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let height = 10u16.min(area.height);
    let sheet = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };
    frame.render_widget(Clear, sheet);
    let block = card("Filter & Sort", app.settings.get(), colors);
    let inner = block.inner(sheet);
    frame.render_widget(block, sheet);

    let filter = &app.studio.filter;
    let kind_label = match filter.kind {
        KindFilter::All => "All",
        KindFilter::Synopsis => "Synopsis",
        KindFilter::Hashtags => "Hashtags",
    };
    let models_label = if filter.models.is_empty() {
        "all models".to_string()
    } else {
        filter
            .models
            .iter()
            .map(|m| m.replace("gemini-", ""))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let rows: [(String, String); 4] = [
        ("Content Type".to_string(), kind_label.to_string()),
        ("Sort By".to_string(), filter.sort.label().to_string()),
        ("AI Model".to_string(), models_label),
        (
            "Favorites Only".to_string(),
            if filter.favorites_only { "on" } else { "off" }.to_string(),
        ),
    ];

    let mut lines = Vec::new();
    for (i, (label, value)) in rows.iter().enumerate() {
        let marker = if i == app.studio.filter_cursor { "> " } else { "  " };
        let style = if i == app.studio.filter_cursor {
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{label}: "), style),
            Span::styled(value.clone(), Style::default().fg(colors.dim)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Show {} results — arrows change, Esc close",
            app.history.filter_and_sort(filter).len()
        ),
        Style::default().fg(colors.dim),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
