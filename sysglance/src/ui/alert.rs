//! Modal critical-load warning. Stays up until dismissed.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use sysglance::session::Alert;

use crate::ui::util::centered;

pub fn draw_alert(f: &mut ratatui::Frame<'_>, area: Rect, alert: &Alert) {
    let popup = centered(area, 52, 7);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title("⚠ Critical");
    let text = vec![
        Line::from(alert.message()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("press Enter or Esc to dismiss").style(Style::default().fg(Color::Gray)),
    ];
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
