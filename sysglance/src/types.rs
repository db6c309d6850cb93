//! Types that mirror the server's `/api/stats` JSON schema.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SystemInfo {
    pub os: String,
    pub hostname: String,
    pub platform: String,
    pub processor: Option<String>,
    #[serde(alias = "python_version")]
    pub runtime_version: String,
    pub uptime_seconds: u64,
    pub os_version: Option<String>,
    pub machine: Option<String>,
    pub boot_time: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CpuStats {
    pub percent: f64,
    #[serde(default)]
    pub frequency_ghz: Option<f64>,
    #[serde(default)]
    pub physical_cores: Option<u32>,
    #[serde(default)]
    pub logical_cores: Option<u32>,
    #[serde(default)]
    pub per_core: Vec<f64>,
}

// Pre-formatted strings produced by the server
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HumanSizes {
    pub used: String,
    pub total: String,
    pub available: Option<String>,
    pub free: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MemoryStats {
    pub percent: f64,
    #[serde(default)]
    pub human: HumanSizes,
    #[serde(default)]
    pub total_bytes: Option<u64>,
    #[serde(default)]
    pub used_bytes: Option<u64>,
    #[serde(default)]
    pub available_bytes: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GpuStats {
    pub name: String,
    pub load_percent: f64,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub memory_used_mb: f64,
    #[serde(default)]
    pub memory_total_mb: f64,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DiskStats {
    pub percent: f64,
    #[serde(default)]
    pub human: HumanSizes,
    #[serde(default)]
    pub read_bps: Option<f64>,
    #[serde(default)]
    pub write_bps: Option<f64>,
}

// Cumulative per-interface counters
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InterfaceCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NetworkStats {
    pub upload_bps: Option<f64>,
    pub download_bps: Option<f64>,
    pub interfaces: BTreeMap<String, InterfaceCounters>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ProcessEntry {
    pub pid: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpu_percent: f64,
    #[serde(default)]
    pub memory_mb: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Battery {
    pub percent: f64,
    pub plugged: bool,
}

/// One point-in-time reading of every tracked metric.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub system: SystemInfo,
    pub cpu: CpuStats,
    pub memory: MemoryStats,
    #[serde(default)]
    pub gpu: Option<GpuStats>,
    pub disk: DiskStats,
    #[serde(default)]
    pub network: NetworkStats,
    // Server-ordered; the client never re-sorts this list
    #[serde(default)]
    pub processes_top: Vec<ProcessEntry>,
    #[serde(default)]
    pub battery: Option<Battery>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_server_payload() {
        let json = r##"{
            "timestamp": 1700000000.5,
            "cpu": {"percent": 12.5, "per_core": [10.0, 15.0], "frequency_ghz": 3.2,
                    "logical_cores": 8, "physical_cores": 4},
            "memory": {"total_bytes": 16, "used_bytes": 8, "available_bytes": 8, "percent": 50.0,
                       "human": {"total": "16.0 GB", "used": "8.0 GB", "available": "8.0 GB"}},
            "disk": {"percent": 40.0, "read_bps": null, "write_bps": 1024.0,
                     "human": {"total": "500.0 GB", "used": "200.0 GB", "free": "300.0 GB"}},
            "network": {"interfaces": {"eth0": {"bytes_sent": 1, "bytes_recv": 2,
                        "packets_sent": 3, "packets_recv": 4}},
                        "upload_bps": null, "download_bps": 2048.0},
            "gpu": null,
            "processes_top": [{"pid": 42, "name": "python", "cpu_percent": 9.5, "memory_mb": 120.3},
                              {"pid": 7, "name": "bash", "cpu_percent": 0.0, "memory_mb": 3.1}],
            "battery": {"percent": 88.0, "plugged": true},
            "system": {"hostname": "box", "os": "Linux", "os_version": "#1 SMP",
                       "platform": "Linux-6.1", "machine": "x86_64", "processor": "",
                       "python_version": "3.12.1", "boot_time": 1699990000.0,
                       "uptime_seconds": 10000}
        }"##;
        let s: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(s.cpu.percent, 12.5);
        assert_eq!(s.cpu.per_core.len(), 2);
        assert_eq!(s.system.runtime_version, "3.12.1");
        assert_eq!(s.memory.human.used, "8.0 GB");
        assert!(s.gpu.is_none());
        assert_eq!(s.disk.read_bps, None);
        assert_eq!(s.network.download_bps, Some(2048.0));
        assert_eq!(s.network.interfaces["eth0"].packets_recv, 4);
        assert_eq!(s.processes_top[0].pid, 42);
        assert_eq!(s.processes_top[1].name, "bash");
        assert_eq!(s.battery.as_ref().map(|b| b.plugged), Some(true));
    }

    #[test]
    fn minimal_payload_fills_defaults() {
        let json = r#"{"cpu":{"percent":85},"memory":{"percent":50},"disk":{"percent":50},
                       "network":{"upload_bps":0,"download_bps":0}}"#;
        let s: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(s.cpu.percent, 85.0);
        assert!(s.gpu.is_none());
        assert!(s.processes_top.is_empty());
        assert_eq!(s.system.hostname, "");
    }

    #[test]
    fn missing_required_section_is_rejected() {
        let json = r#"{"cpu":{"percent":85},"memory":{"percent":50}}"#;
        assert!(serde_json::from_str::<Snapshot>(json).is_err());
    }
}
