//! Threshold rules that turn one snapshot into insights and a health label.

use std::fmt;
use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::types::Snapshot;

pub const UPLOAD_HIGH_BPS: f64 = 2.0 * 1024.0 * 1024.0;
pub const DOWNLOAD_HIGH_BPS: f64 = 5.0 * 1024.0 * 1024.0;
/// CPU or RAM percent above which a critical alert is requested.
pub const ALERT_PERCENT: f64 = 95.0;
pub const ALERT_COOLDOWN: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceLabel {
    Best,
    Good,
    Moderate,
    Bad,
    Critical,
}

impl PerformanceLabel {
    pub fn color(self) -> Color {
        match self {
            PerformanceLabel::Best => Color::Green,
            PerformanceLabel::Good => Color::LightGreen,
            PerformanceLabel::Moderate => Color::Yellow,
            PerformanceLabel::Bad => Color::LightRed,
            PerformanceLabel::Critical => Color::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceLabel::Best => "BEST",
            PerformanceLabel::Good => "GOOD",
            PerformanceLabel::Moderate => "MODERATE",
            PerformanceLabel::Bad => "BAD",
            PerformanceLabel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for PerformanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    Ram,
    Gpu,
    Disk,
    Upload,
    Download,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Ram => "RAM",
            Metric::Gpu => "GPU",
            Metric::Disk => "Disk",
            Metric::Upload | Metric::Download => "Network",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub metric: Metric,
    pub message: &'static str,
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.metric.name(), self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub insights: Vec<Insight>,
    pub label: PerformanceLabel,
    pub alert_requested: bool,
}

impl Assessment {
    pub fn color(&self) -> Color {
        self.label.color()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.insights.iter().map(|i| i.message).collect()
    }
}

fn cpu_bracket(pct: f64) -> (PerformanceLabel, &'static str) {
    match pct {
        x if x < 40.0 => (PerformanceLabel::Best, "Best performance"),
        x if x < 60.0 => (PerformanceLabel::Good, "Good"),
        x if x < 80.0 => (PerformanceLabel::Moderate, "Moderate load"),
        x if x < 90.0 => (PerformanceLabel::Bad, "High load"),
        _ => (PerformanceLabel::Critical, "CRITICAL load"),
    }
}

fn ram_message(pct: f64) -> &'static str {
    match pct {
        x if x > 90.0 => "critically full",
        x if x > 75.0 => "usage high",
        x if x > 60.0 => "rising",
        _ => "normal",
    }
}

fn gpu_message(pct: f64) -> &'static str {
    match pct {
        x if x > 85.0 => "maxed out",
        x if x > 60.0 => "active",
        _ => "normal",
    }
}

fn disk_message(pct: f64) -> &'static str {
    match pct {
        x if x > 90.0 => "almost full",
        x if x > 75.0 => "usage high",
        _ => "OK",
    }
}

/// Classifies a snapshot. Only the CPU bracket decides the label.
pub fn classify(s: &Snapshot) -> Assessment {
    let (label, cpu_msg) = cpu_bracket(s.cpu.percent);
    let mut insights = vec![
        Insight {
            metric: Metric::Cpu,
            message: cpu_msg,
        },
        Insight {
            metric: Metric::Ram,
            message: ram_message(s.memory.percent),
        },
    ];
    if let Some(gpu) = &s.gpu {
        insights.push(Insight {
            metric: Metric::Gpu,
            message: gpu_message(gpu.load_percent),
        });
    }
    insights.push(Insight {
        metric: Metric::Disk,
        message: disk_message(s.disk.percent),
    });
    if s.network.upload_bps.is_some_and(|b| b > UPLOAD_HIGH_BPS) {
        insights.push(Insight {
            metric: Metric::Upload,
            message: "high upload activity",
        });
    }
    if s.network.download_bps.is_some_and(|b| b > DOWNLOAD_HIGH_BPS) {
        insights.push(Insight {
            metric: Metric::Download,
            message: "heavy download activity",
        });
    }

    Assessment {
        insights,
        label,
        alert_requested: s.cpu.percent > ALERT_PERCENT || s.memory.percent > ALERT_PERCENT,
    }
}

/// Debounce for the critical popup: at most one per cooldown window.
#[derive(Debug, Clone)]
pub struct AlertLatch {
    armed_until: Option<Instant>,
    cooldown: Duration,
}

impl AlertLatch {
    pub fn new() -> Self {
        Self::with_cooldown(ALERT_COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            armed_until: None,
            cooldown,
        }
    }

    pub fn is_armed(&self, now: Instant) -> bool {
        self.armed_until.is_some_and(|until| now < until)
    }

    /// Returns true when an alert should surface now; arms the latch if so.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        if self.is_armed(now) {
            return false;
        }
        self.armed_until = Some(now + self.cooldown);
        true
    }
}

impl Default for AlertLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CpuStats, DiskStats, GpuStats, MemoryStats, NetworkStats};

    fn snap(cpu: f64, ram: f64, disk: f64) -> Snapshot {
        Snapshot {
            cpu: CpuStats {
                percent: cpu,
                ..Default::default()
            },
            memory: MemoryStats {
                percent: ram,
                ..Default::default()
            },
            disk: DiskStats {
                percent: disk,
                ..Default::default()
            },
            network: NetworkStats {
                upload_bps: Some(0.0),
                download_bps: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn cpu_label_boundaries() {
        let cases = [
            (0.0, PerformanceLabel::Best),
            (39.9, PerformanceLabel::Best),
            (40.0, PerformanceLabel::Good),
            (59.9, PerformanceLabel::Good),
            (60.0, PerformanceLabel::Moderate),
            (79.9, PerformanceLabel::Moderate),
            (80.0, PerformanceLabel::Bad),
            (89.9, PerformanceLabel::Bad),
            (90.0, PerformanceLabel::Critical),
            (100.0, PerformanceLabel::Critical),
        ];
        for (cpu, want) in cases {
            assert_eq!(classify(&snap(cpu, 10.0, 10.0)).label, want, "cpu={cpu}");
        }
    }

    #[test]
    fn ram_and_disk_brackets_are_upper_inclusive() {
        let msg = |ram, disk| classify(&snap(10.0, ram, disk)).messages();
        assert_eq!(msg(60.0, 75.0), vec!["Best performance", "normal", "OK"]);
        assert_eq!(msg(60.1, 75.1), vec!["Best performance", "rising", "usage high"]);
        assert_eq!(msg(75.0, 90.0), vec!["Best performance", "rising", "usage high"]);
        assert_eq!(msg(90.0, 90.1), vec!["Best performance", "usage high", "almost full"]);
        assert_eq!(msg(90.1, 99.0), vec!["Best performance", "critically full", "almost full"]);
    }

    #[test]
    fn label_ignores_other_metrics() {
        let a = classify(&snap(10.0, 99.0, 99.0));
        assert_eq!(a.label, PerformanceLabel::Best);
        assert_eq!(a.color(), Color::Green);
        assert!(a.alert_requested);
    }

    #[test]
    fn gpu_line_sits_between_ram_and_disk() {
        let mut s = snap(50.0, 50.0, 50.0);
        s.gpu = Some(GpuStats {
            name: "RTX".into(),
            load_percent: 86.0,
            ..Default::default()
        });
        let a = classify(&s);
        assert_eq!(a.messages(), vec!["Good", "normal", "maxed out", "OK"]);
        assert_eq!(a.insights[2].metric, Metric::Gpu);

        s.gpu.as_mut().unwrap().load_percent = 85.0;
        assert_eq!(classify(&s).insights[2].message, "active");
        s.gpu.as_mut().unwrap().load_percent = 60.0;
        assert_eq!(classify(&s).insights[2].message, "normal");
    }

    #[test]
    fn network_lines_are_additive() {
        let mut s = snap(10.0, 10.0, 10.0);
        s.network.upload_bps = Some(UPLOAD_HIGH_BPS);
        s.network.download_bps = Some(DOWNLOAD_HIGH_BPS);
        assert_eq!(classify(&s).insights.len(), 3);

        s.network.upload_bps = Some(UPLOAD_HIGH_BPS + 1.0);
        s.network.download_bps = Some(DOWNLOAD_HIGH_BPS + 1.0);
        let a = classify(&s);
        assert_eq!(
            &a.messages()[3..],
            &["high upload activity", "heavy download activity"]
        );
        assert_eq!(a.insights[3].to_string(), "Network: high upload activity");
    }

    #[test]
    fn high_load_without_gpu_end_to_end() {
        let a = classify(&snap(85.0, 50.0, 50.0));
        assert_eq!(a.label, PerformanceLabel::Bad);
        assert_eq!(a.messages(), vec!["High load", "normal", "OK"]);
        assert!(!a.alert_requested);
    }

    #[test]
    fn alert_threshold_is_strict() {
        assert!(!classify(&snap(95.0, 95.0, 10.0)).alert_requested);
        assert!(classify(&snap(95.1, 10.0, 10.0)).alert_requested);
        assert!(classify(&snap(10.0, 96.0, 10.0)).alert_requested);
    }

    #[test]
    fn latch_fires_once_per_window() {
        let t0 = Instant::now();
        let mut latch = AlertLatch::new();
        assert!(latch.try_fire(t0));
        assert!(latch.is_armed(t0 + Duration::from_secs(1)));
        assert!(!latch.try_fire(t0 + Duration::from_secs(1)));
        assert!(latch.try_fire(t0 + Duration::from_secs(6)));
        assert!(!latch.try_fire(t0 + Duration::from_secs(7)));
    }

    #[test]
    fn latch_disarms_exactly_at_cooldown() {
        let t0 = Instant::now();
        let mut latch = AlertLatch::with_cooldown(Duration::from_millis(5000));
        assert!(latch.try_fire(t0));
        assert!(!latch.try_fire(t0 + Duration::from_millis(4999)));
        assert!(latch.try_fire(t0 + Duration::from_millis(5000)));
    }
}
