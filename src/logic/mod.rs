//! Core Gallery Logic
//!
//! This module contains pure functions that can be unit tested:
//! - matcher: glob pattern resolution against the root folder
//! - natural: human-friendly ordering for file names
//! - pager: page count arithmetic and per-page slicing
//! - grid: row-major arrangement of page slices
//! - path: image URL building and path containment checks

pub mod grid;
pub mod matcher;
pub mod natural;
pub mod pager;
pub mod path;
