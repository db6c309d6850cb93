//! Insight list colored by the current performance label.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sysglance::classify::Assessment;

pub fn draw_insights(f: &mut ratatui::Frame<'_>, area: Rect, a: Option<&Assessment>) {
    let Some(a) = a else {
        f.render_widget(
            Block::default().borders(Borders::ALL).title("Insights"),
            area,
        );
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(a.color()))
        .title(Span::styled(
            format!("Insights — {}", a.label),
            Style::default().fg(a.color()).add_modifier(Modifier::BOLD),
        ));
    let lines: Vec<Line> = a
        .insights
        .iter()
        .map(|i| {
            Line::from(vec![
                Span::styled(
                    format!("{:<8}", i.metric.name()),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(i.message),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}
