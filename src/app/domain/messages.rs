use std::io;
use std::path::PathBuf;

use super::command::Command;
use super::menu::{EntryId, ShellAction};
use super::protocol::CoreOutbound;
use crate::app::infrastructure::error::AppError;

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks and asynchronous completions each send one of these;
/// the dispatch loop in main hands them to `AppState::handle_message`.
#[derive(Debug)]
pub enum Message {
    // Menu bar, accelerators and context menu
    Command(Command),
    Shell(ShellAction),
    WindowClose,

    // Application core
    Core(CoreOutbound),
    CoreFailed(AppError),

    // Pipeline completions
    OpenPathPicked(Option<PathBuf>),
    SavePathPicked(Option<PathBuf>),
    FileRead { path: PathBuf, result: io::Result<String> },
    FileWritten { path: PathBuf, result: io::Result<()> },
}

impl From<EntryId> for Message {
    fn from(id: EntryId) -> Self {
        match id {
            EntryId::Command(command) => Message::Command(command),
            EntryId::Shell(action) => Message::Shell(action),
        }
    }
}
