//! Top header: hostname, performance label, last update and link status.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use sysglance::session::Session;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, s: &Session, endpoint: &str) {
    let mut spans = vec![Span::styled(
        "sysglance",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    match (s.latest(), s.assessment()) {
        (Some(snap), Some(a)) => {
            spans.push(Span::raw(format!(" — host: {} | ", snap.system.hostname)));
            spans.push(Span::styled(
                format!(" {} ", a.label),
                Style::default()
                    .fg(Color::Black)
                    .bg(a.color())
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(
                " | updated {}",
                s.last_update().unwrap_or("--")
            )));
        }
        _ => spans.push(Span::raw(format!(" — connecting to {endpoint}..."))),
    }

    if s.consecutive_failures() > 0 {
        spans.push(Span::styled(
            format!(
                " | fetch failed x{}: {}",
                s.consecutive_failures(),
                s.last_error().unwrap_or("unknown error")
            ),
            Style::default().fg(Color::Red),
        ));
    }
    spans.push(Span::raw("  (press 'q' to quit)"));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
