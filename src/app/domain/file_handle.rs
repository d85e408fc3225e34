use std::path::{Path, PathBuf};

pub const APP_TITLE: &str = "Deckset Editor";

/// The session's current document path. `None` means the document has never
/// been saved or opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHandle {
    path: Option<PathBuf>,
}

impl FileHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Only ever moves to another path; there is no way back to `None`.
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn display_name(&self) -> String {
        match self.path {
            Some(ref path) => extract_filename(path),
            None => "Untitled".to_string(),
        }
    }

    pub fn window_title(&self) -> String {
        format!("{} - {}", self.display_name(), APP_TITLE)
    }
}

/// Window title for a document at `path`.
pub fn title_for_path(path: &Path) -> String {
    format!("{} - {}", extract_filename(path), APP_TITLE)
}

/// Extract the file name component of a path, or "Unknown" if there is none.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
