use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::thread;

use fltk::{app::Sender, dialog, prelude::*, window::Window};

use crate::app::domain::{Message, ShellSettings};
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

/// Native dialogs, the filesystem and the window chrome, as seen by the
/// persistence pipelines.
///
/// Pickers and file operations are single-shot: each call produces exactly one
/// completion message on the event channel and never blocks the caller on
/// I/O.
pub trait ShellBoundary {
    /// Completion: `Message::OpenPathPicked`, `None` when dismissed.
    fn pick_open_path(&mut self);

    /// Completion: `Message::SavePathPicked`, `None` when dismissed.
    fn pick_save_path(&mut self);

    /// Completion: `Message::FileRead`.
    fn read_text_file(&mut self, path: &Path);

    /// Completion: `Message::FileWritten`.
    fn write_text_file(&mut self, path: &Path, body: String);

    /// Blocking notification shown to the user.
    fn alert(&mut self, message: &str);

    fn set_window_title(&mut self, title: &str);
}

pub struct NativeShell {
    sender: Sender<Message>,
    window: Window,
    settings: Rc<RefCell<ShellSettings>>,
}

impl NativeShell {
    pub fn new(sender: Sender<Message>, window: Window, settings: Rc<RefCell<ShellSettings>>) -> Self {
        Self { sender, window, settings }
    }
}

impl ShellBoundary for NativeShell {
    fn pick_open_path(&mut self) {
        let (pattern, dir) = {
            let s = self.settings.borrow();
            (s.file_pattern.clone(), s.dialog_directory())
        };
        let path = native_open_dialog(&pattern, dir.as_deref());
        self.sender.send(Message::OpenPathPicked(path));
    }

    fn pick_save_path(&mut self) {
        let (pattern, dir) = {
            let s = self.settings.borrow();
            (s.file_pattern.clone(), s.dialog_directory())
        };
        let path = native_save_dialog(&pattern, dir.as_deref());
        self.sender.send(Message::SavePathPicked(path));
    }

    fn read_text_file(&mut self, path: &Path) {
        let sender = self.sender;
        let path = path.to_path_buf();
        thread::spawn(move || {
            let result = fs::read_to_string(&path);
            sender.send(Message::FileRead { path, result });
        });
    }

    fn write_text_file(&mut self, path: &Path, body: String) {
        let sender = self.sender;
        let path = path.to_path_buf();
        thread::spawn(move || {
            let result = fs::write(&path, body);
            sender.send(Message::FileWritten { path, result });
        });
    }

    fn alert(&mut self, message: &str) {
        dialog::alert_default(message);
    }

    fn set_window_title(&mut self, title: &str) {
        self.window.set_label(title);
    }
}
