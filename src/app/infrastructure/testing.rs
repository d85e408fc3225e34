//! Recording fakes for the shell boundary and the application core.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::app::domain::CoreInbound;
use crate::app::services::core_process::CorePort;

use super::boundary::ShellBoundary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCall {
    PickOpenPath,
    PickSavePath,
    ReadTextFile(PathBuf),
    WriteTextFile(PathBuf, String),
    Alert(String),
    SetWindowTitle(String),
}

#[derive(Debug, Default)]
pub struct RecordingShell {
    pub calls: Vec<ShellCall>,
}

impl RecordingShell {
    pub fn take(&mut self) -> Vec<ShellCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ShellCall::Alert(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ShellBoundary for RecordingShell {
    fn pick_open_path(&mut self) {
        self.calls.push(ShellCall::PickOpenPath);
    }

    fn pick_save_path(&mut self) {
        self.calls.push(ShellCall::PickSavePath);
    }

    fn read_text_file(&mut self, path: &Path) {
        self.calls.push(ShellCall::ReadTextFile(path.to_path_buf()));
    }

    fn write_text_file(&mut self, path: &Path, body: String) {
        self.calls.push(ShellCall::WriteTextFile(path.to_path_buf(), body));
    }

    fn alert(&mut self, message: &str) {
        self.calls.push(ShellCall::Alert(message.to_string()));
    }

    fn set_window_title(&mut self, title: &str) {
        self.calls.push(ShellCall::SetWindowTitle(title.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingCore {
    sent: RefCell<Vec<CoreInbound>>,
}

impl RecordingCore {
    pub fn sent(&self) -> Vec<CoreInbound> {
        self.sent.borrow().clone()
    }

    pub fn clear(&self) {
        self.sent.borrow_mut().clear();
    }
}

impl CorePort for RecordingCore {
    fn send(&self, message: CoreInbound) {
        self.sent.borrow_mut().push(message);
    }
}
