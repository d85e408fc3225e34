//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Native dialogs, filesystem and window chrome (`ShellBoundary`)
//! - File chooser filters
//! - Error types

pub mod boundary;
pub mod error;
pub mod file_filters;

#[cfg(test)]
pub(crate) mod testing;
