use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    View,
    Edit,
}

/// What the application core reports about the current slide selection.
///
/// Snapshots replace each other wholesale; there is no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    #[serde(default = "default_has_selection")]
    pub has_selection: bool,

    pub mode: EditorMode,

    #[serde(default, rename = "contextMenu")]
    pub request_context_menu: bool,
}

// The core only sends a non-null snapshot when a slide is selected.
fn default_has_selection() -> bool {
    true
}

impl SelectionSnapshot {
    /// Nothing selected, no popup. Also the state before the core's first report.
    pub fn deselected() -> Self {
        Self {
            has_selection: false,
            mode: EditorMode::View,
            request_context_menu: false,
        }
    }

    pub fn selected(mode: EditorMode) -> Self {
        Self {
            has_selection: true,
            mode,
            request_context_menu: false,
        }
    }

    pub fn with_context_menu(mut self) -> Self {
        self.request_context_menu = true;
        self
    }
}

impl Default for SelectionSnapshot {
    fn default() -> Self {
        Self::deselected()
    }
}
