//! sysglance: polling, history and health classification for a `/api/stats` dashboard.

pub mod chart;
pub mod classify;
pub mod fetch;
pub mod format;
pub mod history;
pub mod logging;
pub mod poller;
pub mod procs;
pub mod profiles;
pub mod session;
pub mod types;
