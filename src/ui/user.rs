//! User view: profile card, inline edit form, theme picker.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::Theme;
use crate::theme::Palette;
use crate::ui::components::{card, render_input_field, truncate};

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Profile",
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    if app.profile_edit.active {
        render_edit_form(frame, chunks[1], app, colors);
    } else {
        render_profile_card(frame, chunks[1], app, colors);
    }
    render_theme_picker(frame, chunks[2], app, colors);
}

fn render_profile_card(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let profile = app.profile.get();
    let block = card("", app.settings.get(), colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = if profile.is_logged_in {
        Span::styled("● Content Creator", Style::default().fg(colors.accent))
    } else {
        Span::styled("○ Guest User", Style::default().fg(colors.dim))
    };
    let avatar = truncate(&profile.avatar_url, inner.width.saturating_sub(10) as usize);

    let lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(status),
        Line::raw(""),
        Line::from(vec![
            Span::styled("avatar: ", Style::default().fg(colors.dim)),
            Span::styled(avatar, Style::default().fg(colors.dim)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "[e] Edit Profile",
            Style::default().fg(colors.accent),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_edit_form(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let block = card("Edit Profile", app.settings.get(), colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    render_input_field(
        frame,
        rows[0],
        "Display Name",
        &app.profile_edit.name,
        "Creator",
        !app.profile_edit.editing_avatar,
        colors,
    );
    render_input_field(
        frame,
        rows[1],
        "Avatar (URL or image path)",
        &app.profile_edit.avatar,
        "https://…",
        app.profile_edit.editing_avatar,
        colors,
    );
    frame.render_widget(
        Paragraph::new("Tab switch field  Enter save  Esc cancel")
            .style(Style::default().fg(colors.dim)),
        rows[2],
    );
}

fn render_theme_picker(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let settings = app.settings.get();
    let block = card("Visual Theme", settings, colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut themes = vec![Theme::Light, Theme::Dark, Theme::Glass, Theme::OneUiDark];
    if settings.experimental_features {
        // Experimental-only theme shows up only while the flag is on.
        themes.push(Theme::Retro3d);
    }

    let mut spans = Vec::new();
    for theme in themes {
        let style = if settings.theme == theme {
            Style::default()
                .fg(colors.bg)
                .bg(colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.dim)
        };
        spans.push(Span::styled(format!(" {} ", theme.label()), style));
        spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "left/right to switch  ·  [s] all settings",
            Style::default().fg(colors.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
