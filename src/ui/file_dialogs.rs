use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::infrastructure::file_filters::presentation_filter;

fn run_chooser(kind: FileDialogType, pattern: &str, directory: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_filter(&presentation_filter(pattern));
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!(dir = %dir.display(), "could not preselect directory: {:?}", e);
        }
    }
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() { None } else { Some(filename) }
}

/// Single-selection open picker. `None` when the user dismisses it.
pub fn native_open_dialog(pattern: &str, directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, pattern, directory)
}

pub fn native_save_dialog(pattern: &str, directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, pattern, directory)
}
