//! Memory gauge.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};
use sysglance::format::format_bytes;
use sysglance::types::Snapshot;

use crate::ui::util::pct_u16;

pub fn draw_mem(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&Snapshot>) {
    let (label, pct) = match m {
        Some(mm) => {
            let mem = &mm.memory;
            let avail = match (&mem.human.available, mem.available_bytes) {
                (Some(h), _) => format!(" ({h} free)"),
                (None, Some(b)) => format!(" ({} free)", format_bytes(Some(b as f64))),
                (None, None) => String::new(),
            };
            (
                format!("{} / {}{avail}", mem.human.used, mem.human.total),
                pct_u16(mem.percent),
            )
        }
        None => ("--".into(), 0),
    };

    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Memory"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(pct)
        .label(label);
    f.render_widget(g, area);
}
