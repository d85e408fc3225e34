//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Command, menus, selection, protocol, Messages)
//! - `controllers/` - Orchestration (MenuRegistry, SelectionTracker, CommandRouter)
//! - `services/` - Side-effecting operations (persistence pipelines, core process)
//! - `infrastructure/` - External integrations (shell boundary, file filters, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::menu_registry::{MenuRegistry, MenuSurface};
pub use domain::{Command, CoreInbound, CoreOutbound, FileHandle, Message, SelectionSnapshot, ShellSettings};
pub use infrastructure::error::{AppError, Result};
pub use services::core_process::{CorePort, ProcessCore};
pub use state::{AppState, Flow};
