//! Wire messages exchanged with the application core.
//!
//! Both directions use newline-delimited JSON envelopes of the form
//! `{"port": "<name>", "data": <payload>}`.

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::selection::SelectionSnapshot;

/// Shell -> core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "port", content = "data", rename_all = "camelCase")]
pub enum CoreInbound {
    MenuCommand(Command),
    LoadPresentationText { filename: String, body: String },
    UpdateFileName(String),
}

/// Core -> shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "port", content = "data", rename_all = "camelCase")]
pub enum CoreOutbound {
    /// `null` deselects everything and suppresses the context menu.
    SelectedSlideInfo(Option<SelectionSnapshot>),
    /// An empty `filename` asks for the path picker.
    SavePresentationText { filename: String, body: String },
    OpenFileDialog,
    /// Informational; the shell only retitles the window.
    UpdateFileName(String),
    UpdateWindowTitle(String),
}

impl CoreInbound {
    pub fn to_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

impl CoreOutbound {
    pub fn from_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line.trim_end())
    }
}
