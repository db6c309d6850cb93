//! Disk usage gauge with I/O rates in the title.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};
use sysglance::format::format_rate;
use sysglance::types::Snapshot;

use crate::ui::util::{pct_u16, usage_color};

pub fn draw_disk(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&Snapshot>) {
    let Some(mm) = m else {
        f.render_widget(Block::default().borders(Borders::ALL).title("Disk"), area);
        return;
    };
    let d = &mm.disk;
    let title = format!(
        "Disk   read {} | write {}",
        format_rate(d.read_bps),
        format_rate(d.write_bps)
    );
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(usage_color(d.percent)))
        .percent(pct_u16(d.percent))
        .label(format!(
            "{} / {}  ({:.1}%)",
            d.human.used, d.human.total, d.percent
        ));
    f.render_widget(g, area);
}
