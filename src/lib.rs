//! Image Gallery Library
//!
//! Exposes modules for testing

use std::sync::atomic::{AtomicBool, Ordering};

pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod server;
pub mod ui;
pub mod utils;

// Global flag for debug mode
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}
