//! Chart state mirroring one rolling series.
//!
//! The sink only tracks data and a pending-redraw flag; the terminal
//! adapter in `ui::charts` turns it into a line chart.

use crate::history::RollingSeries;

#[derive(Debug, Clone)]
pub struct ChartSink {
    title: &'static str,
    series: RollingSeries<f64>,
    redraw: bool,
}

impl ChartSink {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            series: RollingSeries::new(),
            redraw: false,
        }
    }

    /// Appends a sample (evicting the oldest past the window) and requests a redraw.
    pub fn update(&mut self, label: impl Into<String>, value: f64) {
        self.series.push(label, value);
        self.redraw = true;
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn series(&self) -> &RollingSeries<f64> {
        &self.series
    }

    // (x, y) pairs with x = index in the window
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.series
            .values()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }

    /// Clears the pending redraw, returning whether one was pending.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::WINDOW;

    #[test]
    fn evicts_in_lockstep_and_flags_redraw() {
        let mut c = ChartSink::new("CPU %");
        assert!(!c.take_redraw());
        for i in 0..(WINDOW + 5) {
            c.update(format!("{i}"), i as f64);
        }
        assert!(c.take_redraw());
        assert!(!c.take_redraw());

        let pts = c.points();
        assert_eq!(pts.len(), WINDOW);
        assert_eq!(pts[0], (0.0, 5.0));
        assert_eq!(pts[WINDOW - 1], ((WINDOW - 1) as f64, (WINDOW + 4) as f64));
        assert_eq!(c.series().first_label(), Some("5"));
    }
}
