//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The command vocabulary and menu templates
//! - Selection snapshots and the current file handle
//! - The wire protocol spoken with the application core
//! - Message types for the event system
//! - Shell settings

pub mod command;
pub mod file_handle;
pub mod menu;
pub mod messages;
pub mod protocol;
pub mod selection;
pub mod settings;

pub use command::Command;
pub use file_handle::FileHandle;
pub use menu::{EntryId, ShellAction};
pub use messages::Message;
pub use protocol::{CoreInbound, CoreOutbound};
pub use selection::{EditorMode, SelectionSnapshot};
pub use settings::ShellSettings;
