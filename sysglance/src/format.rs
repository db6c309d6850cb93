//! Human-readable formatting for byte counts, rates and durations.

const K: f64 = 1024.0;

/// Renders a byte count as `B`/`KB`/`MB`/`GB`; a missing value renders as `--`.
pub fn format_bytes(n: Option<f64>) -> String {
    let Some(b) = n else { return "--".into() };
    if b < K {
        return format!("{b:.0} B");
    }
    if b < K * K {
        return format!("{:.1} KB", b / K);
    }
    if b < K * K * K {
        return format!("{:.1} MB", b / (K * K));
    }
    format!("{:.2} GB", b / (K * K * K))
}

pub fn format_rate(bps: Option<f64>) -> String {
    match bps {
        Some(_) => format!("{}/s", format_bytes(bps)),
        None => "--".into(),
    }
}

// 3d 4h 5m; days are dropped when zero
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let mins = (secs % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {mins}m")
    } else {
        format!("{hours}h {mins}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_units() {
        assert_eq!(format_bytes(None), "--");
        assert_eq!(format_bytes(Some(0.0)), "0 B");
        assert_eq!(format_bytes(Some(500.0)), "500 B");
        assert_eq!(format_bytes(Some(1023.0)), "1023 B");
        assert_eq!(format_bytes(Some(1024.0)), "1.0 KB");
        assert_eq!(format_bytes(Some(2048.0)), "2.0 KB");
        assert_eq!(format_bytes(Some(5.0 * 1024.0 * 1024.0)), "5.0 MB");
        assert_eq!(format_bytes(Some(3.0 * 1024f64.powi(3))), "3.00 GB");
        assert_eq!(format_bytes(Some(2048.0 * 1024f64.powi(3))), "2048.00 GB");
    }

    #[test]
    fn rates_and_uptime() {
        assert_eq!(format_rate(None), "--");
        assert_eq!(format_rate(Some(1536.0)), "1.5 KB/s");
        assert_eq!(format_uptime(59), "0h 0m");
        assert_eq!(format_uptime(3 * 86_400 + 4 * 3_600 + 5 * 60 + 9), "3d 4h 5m");
    }
}
