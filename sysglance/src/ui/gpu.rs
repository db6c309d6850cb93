use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
};
use sysglance::format::format_bytes;
use sysglance::types::Snapshot;

const MB: f64 = 1024.0 * 1024.0;

pub fn draw_gpu(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&Snapshot>) {
    let mut area = area;
    let block = Block::default().borders(Borders::ALL).title("GPU");
    f.render_widget(block, area);

    // Guard: need some space inside the block
    if area.height <= 2 || area.width <= 2 {
        return;
    }

    area.y += 1;
    area.height = area.height.saturating_sub(2);
    area.x += 1;
    area.width = area.width.saturating_sub(2);

    let Some(snapshot) = m else {
        return;
    };
    let Some(g) = snapshot.gpu.as_ref() else {
        f.render_widget(Paragraph::new("No GPU detected"), area);
        return;
    };

    // name, util bar, vram bar
    if area.height < 3 {
        f.render_widget(
            Paragraph::new(format!("{} {:.0}%", g.name, g.load_percent)),
            area,
        );
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(area);

    // Per bar horizontal layout: [gauge] [value]
    let split_bar = |r: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(8), Constraint::Length(24)])
            .split(r)
    };

    let name = match g.temperature_c {
        Some(t) => format!("{}  {t:.0}°C", g.name),
        None => g.name.clone(),
    };
    f.render_widget(
        Paragraph::new(Span::raw(name)).style(Style::default().fg(Color::Gray)),
        rows[0],
    );

    let util_cols = split_bar(rows[1]);
    let util = g.load_percent.clamp(0.0, 100.0);
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .label(Span::raw(""))
            .ratio(util / 100.0),
        util_cols[0],
    );
    f.render_widget(
        Paragraph::new(format!("util: {util:.0}%")).style(Style::default().fg(Color::Gray)),
        util_cols[1],
    );

    let mem_cols = split_bar(rows[2]);
    let total = g.memory_total_mb.max(1.0);
    let mem_ratio = (g.memory_used_mb / total).clamp(0.0, 1.0);
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::LightMagenta))
            .label(Span::raw(""))
            .ratio(mem_ratio),
        mem_cols[0],
    );
    let used_s = format_bytes(Some(g.memory_used_mb * MB));
    let total_s = format_bytes(Some(g.memory_total_mb * MB));
    f.render_widget(
        Paragraph::new(format!(
            "vram: {used_s}/{total_s} ({:.0}%)",
            mem_ratio * 100.0
        ))
        .style(Style::default().fg(Color::Gray)),
        mem_cols[1],
    );
}
