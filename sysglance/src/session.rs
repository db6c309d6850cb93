//! All dashboard state for one run: chart windows, alert latch, process
//! table and the latest reading. Only the consumer of poll events mutates it.

use std::time::Instant;

use crate::chart::ChartSink;
use crate::classify::{classify, AlertLatch, Assessment};
use crate::fetch::FetchError;
use crate::poller::PollEvent;
use crate::procs::ProcessTable;
use crate::types::Snapshot;

/// A critical alert that passed the latch and should be shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub cpu_percent: f64,
    pub ram_percent: f64,
}

impl Alert {
    pub fn message(&self) -> String {
        format!(
            "System under critical load! CPU {:.1}% / RAM {:.1}%",
            self.cpu_percent, self.ram_percent
        )
    }
}

#[derive(Debug)]
pub struct Session {
    pub cpu_chart: ChartSink,
    pub mem_chart: ChartSink,
    pub gpu_chart: ChartSink,
    pub processes: ProcessTable,
    latch: AlertLatch,
    latest: Option<Snapshot>,
    assessment: Option<Assessment>,
    last_update: Option<String>,
    failures: u64,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_latch(AlertLatch::new())
    }

    pub fn with_latch(latch: AlertLatch) -> Self {
        Self {
            cpu_chart: ChartSink::new("CPU %"),
            mem_chart: ChartSink::new("Memory %"),
            gpu_chart: ChartSink::new("GPU %"),
            processes: ProcessTable::new(),
            latch,
            latest: None,
            assessment: None,
            last_update: None,
            failures: 0,
            last_error: None,
        }
    }

    pub fn apply(&mut self, ev: PollEvent, label: String, now: Instant) -> Option<Alert> {
        match ev {
            PollEvent::Snapshot(s) => self.apply_snapshot(*s, label, now),
            PollEvent::Failed(e) => {
                self.record_failure(&e);
                None
            }
        }
    }

    /// Feeds every sink from one snapshot. Returns an alert if one should surface.
    pub fn apply_snapshot(&mut self, s: Snapshot, label: String, now: Instant) -> Option<Alert> {
        self.cpu_chart.update(label.clone(), s.cpu.percent);
        self.mem_chart.update(label.clone(), s.memory.percent);
        // absent GPU still advances the time axis
        let gpu = s.gpu.as_ref().map_or(0.0, |g| g.load_percent);
        self.gpu_chart.update(label.clone(), gpu);

        self.processes.replace(&s.processes_top);

        let assessment = classify(&s);
        let alert = if assessment.alert_requested && self.latch.try_fire(now) {
            Some(Alert {
                cpu_percent: s.cpu.percent,
                ram_percent: s.memory.percent,
            })
        } else {
            None
        };

        self.assessment = Some(assessment);
        self.latest = Some(s);
        self.last_update = Some(label);
        self.failures = 0;
        self.last_error = None;
        alert
    }

    // Leaves all displayed data untouched
    pub fn record_failure(&mut self, e: &FetchError) {
        self.failures += 1;
        self.last_error = Some(e.to_string());
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    pub fn last_update(&self) -> Option<&str> {
        self.last_update.as_deref()
    }

    pub fn consecutive_failures(&self) -> u64 {
        self.failures
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Collects and clears pending chart redraws.
    pub fn take_redraw(&mut self) -> bool {
        let cpu = self.cpu_chart.take_redraw();
        let mem = self.mem_chart.take_redraw();
        let gpu = self.gpu_chart.take_redraw();
        cpu || mem || gpu
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
