//! CPU details: frequency, core counts and per-core mini bars.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sysglance::types::Snapshot;

use crate::ui::util::{inner, load_color};

fn bar(pct: f64, width: usize) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let mut s = "█".repeat(filled);
    s.push_str(&"░".repeat(width - filled));
    s
}

pub fn draw_cpu_details(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&Snapshot>) {
    f.render_widget(Block::default().borders(Borders::ALL).title("CPU"), area);
    let Some(mm) = m else { return };
    let inner = inner(area);
    if inner.height == 0 {
        return;
    }

    let cpu = &mm.cpu;
    let freq = cpu
        .frequency_ghz
        .map(|g| format!("{g:.2} GHz"))
        .unwrap_or_else(|| "-- GHz".into());
    let cores = match (cpu.physical_cores, cpu.logical_cores) {
        (Some(p), Some(l)) => format!("{p}C/{l}T"),
        (None, Some(l)) => format!("{l}T"),
        (Some(p), None) => format!("{p}C"),
        (None, None) => "--".into(),
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{:>5.1}%", cpu.percent),
            Style::default()
                .fg(load_color(cpu.percent))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {freq}  {cores}")),
    ])];

    // label "cpuNN " + value " 100.0%"
    let bar_w = (inner.width as usize).saturating_sub(14).max(1);
    let rows = (inner.height as usize).saturating_sub(1);
    for (i, v) in cpu.per_core.iter().take(rows).enumerate() {
        let fg = load_color(*v);
        lines.push(Line::from(vec![
            Span::styled(format!("cpu{i:<2} "), Style::default().fg(Color::Gray)),
            Span::styled(bar(*v, bar_w), Style::default().fg(fg)),
            Span::styled(format!(" {v:>5.1}%"), Style::default().fg(fg)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::bar;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(50.0, 4), "██░░");
        assert_eq!(bar(150.0, 3), "███");
        assert_eq!(bar(0.0, 2), "░░");
    }
}
