//! Services layer - long-running operations with side effects.
//!
//! This module contains:
//! - The Open / Save / Save As pipelines
//! - The transport to the application core process

pub mod core_process;
pub mod persistence;
