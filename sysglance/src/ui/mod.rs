//! UI module root: exposes drawing functions for individual panels.

pub mod alert;
pub mod charts;
pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod header;
pub mod insights;
pub mod mem;
pub mod net;
pub mod processes;
pub mod sysinfo;
pub mod util;
