//! Top processes table, rendered in the order the server sent.

use ratatui::style::Modifier;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};
use sysglance::procs::ProcessTable;
use sysglance::types::ProcessEntry;

use crate::ui::util::{load_color, truncate_middle};

const COLS: [Constraint; 4] = [
    Constraint::Length(8),  // PID
    Constraint::Min(10),    // Name
    Constraint::Length(7),  // CPU %
    Constraint::Length(12), // Mem
];

pub fn draw_top_processes(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    table: &ProcessTable,
    source: &[ProcessEntry],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Top Processes ({})", table.rows().len()));

    // name column gets what the fixed columns leave over
    let name_w = (area.width as usize).saturating_sub(2 + 8 + 7 + 12 + 3).max(4);

    let rows = table.rows().iter().enumerate().map(|(i, r)| {
        let cpu_fg = source
            .get(i)
            .map(|p| load_color(p.cpu_percent))
            .unwrap_or(Color::Reset);
        let stripe = if i % 2 == 1 {
            Style::default().bg(Color::Rgb(30, 30, 36))
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(r.pid.clone()).style(Style::default().fg(Color::DarkGray)),
            Cell::from(truncate_middle(&r.name, name_w)),
            Cell::from(r.cpu.clone()).style(Style::default().fg(cpu_fg)),
            Cell::from(r.mem.clone()),
        ])
        .style(stripe)
    });

    let header = Row::new(vec!["PID", "Name", "CPU %", "Mem"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let widget = Table::new(rows, COLS)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(widget, area);
}
