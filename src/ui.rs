//! UI rendering.
//!
//! `render` is the single dispatch site: it matches on the app's
//! [`RenderMode`] and draws either the navigation shell (three views laid
//! out side by side with a slide offset, plus the bottom nav) or a
//! full-screen tool. Overlays (settings modal, chat panel, filter sheet)
//! draw on top of the shell.

pub mod bottom_nav;
pub mod chat;
pub mod components;
pub mod hashtags;
pub mod home;
pub mod settings_modal;
pub mod studio;
pub mod synopsis;
pub mod user;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, RenderMode};
use crate::models::{AppView, ToolMode};
use crate::theme::{palette, Palette};

/// Spinner frames advanced by the app tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 8) as usize % SPINNER_FRAMES.len()]
}

/// Render the UI for the current render mode.
pub fn render(frame: &mut Frame, app: &App) {
    let colors = palette(app.settings.get());
    let area = frame.area();

    // Paint the themed background first.
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.text)),
        area,
    );

    match app.render_mode() {
        RenderMode::Tool(tool) => {
            match tool {
                ToolMode::Synopsis => synopsis::render(frame, area, app, &colors),
                ToolMode::Hashtags => hashtags::render(frame, area, app, &colors),
            }
            render_footer(frame, area, app, &colors);
        }
        RenderMode::Shell(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);

            render_shell_views(frame, chunks[0], app, &colors);
            bottom_nav::render(frame, chunks[1], app, &colors);
            render_footer(frame, chunks[0], app, &colors);

            if app.chat.open && !app.settings_modal.open {
                chat::render(frame, chunks[0], app, &colors);
            }
            if app.nav.current() == AppView::Studio && app.studio.filter_open {
                studio::render_filter_sheet(frame, area, app, &colors);
            }
            if app.settings_modal.open {
                settings_modal::render(frame, area, app, &colors);
            }
        }
    }
}

/// Lay the three views out side by side and apply the slide offset; with
/// sliding disabled only the active view is mounted.
fn render_shell_views(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    if !app.settings.get().slide_enabled {
        render_view(frame, area, app, app.nav.current(), colors);
        return;
    }

    let offset = app.nav.offset(area.width, app.tick_count);
    for (i, view) in AppView::ORDER.iter().enumerate() {
        let left = i as f32 * area.width as f32 + offset;
        let right = left + area.width as f32;
        if right <= 0.0 || left >= area.width as f32 {
            continue;
        }
        let clip_left = left.max(0.0).round() as u16;
        let clip_right = (right.min(area.width as f32).round() as u16).min(area.width);
        if clip_right <= clip_left {
            continue;
        }
        let rect = Rect {
            x: area.x + clip_left,
            y: area.y,
            width: clip_right - clip_left,
            height: area.height,
        };
        render_view(frame, rect, app, *view, colors);
    }
}

fn render_view(frame: &mut Frame, area: Rect, app: &App, view: AppView, colors: &Palette) {
    match view {
        AppView::Home => home::render(frame, area, app, colors),
        AppView::Studio => studio::render(frame, area, app, colors),
        AppView::User => user::render(frame, area, app, colors),
    }
}

/// One-line footer: transient notice, or context key hints.
fn render_footer(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    if area.height < 2 {
        return;
    }
    let line = if let Some(notice) = &app.notice {
        Line::styled(notice.text.clone(), Style::default().fg(colors.accent))
    } else {
        let hints = match app.render_mode() {
            RenderMode::Tool(_) => "Tab fields  Enter apply  Ctrl+G generate  Esc back",
            RenderMode::Shell(AppView::Home) => "s synopsis  h hashtags  b buddy  1/2/3 views  q quit",
            RenderMode::Shell(AppView::Studio) => "up/down select  f fav  c copy  F filter  x clear",
            RenderMode::Shell(AppView::User) => "e edit  s settings  left/right theme  l login",
        };
        Line::styled(hints.to_string(), Style::default().fg(colors.dim))
    };
    let rect = Rect {
        x: area.x + 1,
        y: area.y + area.height - 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(Paragraph::new(line), rect);
}
