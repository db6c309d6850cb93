//! Top-processes table rows, rebuilt wholesale from each snapshot.

use crate::types::ProcessEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRow {
    pub pid: String,
    pub name: String,
    pub cpu: String,
    pub mem: String,
}

impl From<&ProcessEntry> for ProcessRow {
    fn from(p: &ProcessEntry) -> Self {
        Self {
            pid: p.pid.to_string(),
            name: p.name.clone(),
            cpu: format!("{:>5.1}", p.cpu_percent),
            mem: format!("{:.1} MB", p.memory_mb),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    rows: Vec<ProcessRow>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every previous row and renders `procs` in the order received.
    pub fn replace(&mut self, procs: &[ProcessEntry]) {
        self.rows = procs.iter().map(ProcessRow::from).collect();
    }

    pub fn rows(&self) -> &[ProcessRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
