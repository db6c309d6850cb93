//! Network rates and per-interface counters.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sysglance::format::{format_bytes, format_rate};
use sysglance::types::Snapshot;

use crate::ui::util::{inner, truncate_middle};

pub fn draw_net(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&Snapshot>) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Network"), area);
    let Some(mm) = m else { return };
    let inner = inner(area);
    if inner.height == 0 {
        return;
    }

    let net = &mm.network;
    let mut lines = vec![Line::from(vec![
        Span::styled("↓ ", Style::default().fg(Color::Green)),
        Span::raw(format_rate(net.download_bps)),
        Span::styled("   ↑ ", Style::default().fg(Color::Blue)),
        Span::raw(format_rate(net.upload_bps)),
    ])];
    let name_w = (inner.width as usize / 3).max(4);
    for (name, c) in net.interfaces.iter().take(inner.height as usize - 1) {
        lines.push(Line::from(Span::styled(
            format!(
                "{:<name_w$} rx {}  tx {}",
                truncate_middle(name, name_w),
                format_bytes(Some(c.bytes_recv as f64)),
                format_bytes(Some(c.bytes_sent as f64)),
            ),
            Style::default().fg(Color::Gray),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}
