//! Bottom navigation bar: three equal tap targets.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::AppView;
use crate::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (i, view) in AppView::ORDER.iter().enumerate() {
        let active = app.nav.current() == *view;
        let style = if active {
            Style::default()
                .fg(colors.bg)
                .bg(colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.dim).bg(colors.surface)
        };
        let label = format!(" {} ", view.label());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, style)))
                .alignment(ratatui::layout::Alignment::Center)
                .style(style),
            slots[i],
        );
    }
}
