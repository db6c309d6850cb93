//! Line chart adapter for a [`ChartSink`].

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use sysglance::chart::ChartSink;

pub fn draw_line_chart(f: &mut ratatui::Frame<'_>, area: Rect, chart: &ChartSink, color: Color) {
    let series = chart.series();
    let title = match series.latest() {
        Some(v) => format!("{} (now: {v:>5.1})", chart.title()),
        None => chart.title().to_string(),
    };
    let points = chart.points();
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let x_labels = vec![
        Span::raw(series.first_label().unwrap_or("").to_string()),
        Span::raw(series.last_label().unwrap_or("").to_string()),
    ];
    let widget = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
        );
    f.render_widget(widget, area);
}
