//! One-line system information strip.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};
use sysglance::format::format_uptime;
use sysglance::types::Snapshot;

pub fn sysinfo_line(s: &Snapshot) -> String {
    let sys = &s.system;
    let mut parts = vec![format!("{} {}", sys.os, sys.platform)];
    if let Some(machine) = sys.machine.as_deref().filter(|m| !m.is_empty()) {
        parts.push(machine.to_string());
    }
    if let Some(cpu) = sys.processor.as_deref().filter(|p| !p.is_empty()) {
        parts.push(cpu.to_string());
    }
    if !sys.runtime_version.is_empty() {
        parts.push(format!("runtime {}", sys.runtime_version));
    }
    parts.push(format!("up {}", format_uptime(sys.uptime_seconds)));
    if let Some(b) = &s.battery {
        let plug = if b.plugged { "plugged" } else { "on battery" };
        parts.push(format!("battery {:.0}% ({plug})", b.percent));
    }
    parts.join(" | ")
}

pub fn draw_sysinfo(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&Snapshot>) {
    let text = m.map(sysinfo_line).unwrap_or_default();
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use sysglance::types::{Battery, SystemInfo};

    #[test]
    fn skips_empty_fields() {
        let s = Snapshot {
            system: SystemInfo {
                os: "Linux".into(),
                platform: "Linux-6.1-x86_64".into(),
                processor: Some(String::new()),
                runtime_version: "3.12".into(),
                uptime_seconds: 90_061,
                ..Default::default()
            },
            battery: Some(Battery {
                percent: 55.4,
                plugged: false,
            }),
            ..Default::default()
        };
        assert_eq!(
            sysinfo_line(&s),
            "Linux Linux-6.1-x86_64 | runtime 3.12 | up 1d 1h 1m | battery 55% (on battery)"
        );
    }
}
