//! Bounded history buffers for charts.

use std::collections::VecDeque;

/// Points kept per metric.
pub const WINDOW: usize = 60;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    dq.push_back(v);
    if dq.len() > cap {
        dq.pop_front();
    }
}

/// Rolling window of `(label, value)` samples, oldest first.
#[derive(Debug, Clone)]
pub struct RollingSeries<T> {
    points: VecDeque<(String, T)>,
    cap: usize,
}

impl<T> RollingSeries<T> {
    pub fn new() -> Self {
        Self::with_capacity(WINDOW)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap + 1),
            cap,
        }
    }

    // Appends one sample and evicts at most the single oldest
    pub fn push(&mut self, label: impl Into<String>, value: T) {
        push_capped(&mut self.points, (label.into(), value), self.cap);
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.points.iter().map(|(_, v)| v)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.points.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn latest(&self) -> Option<&T> {
        self.points.back().map(|(_, v)| v)
    }

    pub fn first_label(&self) -> Option<&str> {
        self.points.front().map(|(l, _)| l.as_str())
    }

    pub fn last_label(&self) -> Option<&str> {
        self.points.back().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T> Default for RollingSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exceeds_window_and_keeps_newest_in_order() {
        let mut s = RollingSeries::new();
        for i in 0..250u32 {
            s.push(format!("t{i}"), i);
            assert!(s.len() <= WINDOW);
        }
        assert_eq!(s.len(), WINDOW);
        let vals: Vec<u32> = s.values().copied().collect();
        let expected: Vec<u32> = (190..250).collect();
        assert_eq!(vals, expected);
        assert_eq!(s.first_label(), Some("t190"));
        assert_eq!(s.last_label(), Some("t249"));
        assert_eq!(s.latest(), Some(&249));
    }

    #[test]
    fn below_capacity_keeps_everything() {
        let mut s = RollingSeries::with_capacity(3);
        s.push("a", 1.0);
        s.push("b", 2.0);
        assert_eq!(s.labels().collect::<Vec<_>>(), vec!["a", "b"]);
        s.push("c", 3.0);
        s.push("d", 4.0);
        assert_eq!(s.labels().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn push_capped_evicts_one() {
        let mut dq = VecDeque::from(vec![1, 2, 3]);
        push_capped(&mut dq, 4, 3);
        assert_eq!(dq, VecDeque::from(vec![2, 3, 4]));
    }
}
