use serde::{Deserialize, Serialize};

/// Every user-initiable command the shell knows about.
///
/// Menu bar items, keyboard accelerators and context-menu items all resolve to
/// one of these. Commands carry no payload; document content for Open and Save
/// travels through the persistence pipelines instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    Open,
    Save,
    SaveAs,
    Undo,
    Redo,
    MoveUp,
    MoveDown,
    Edit,
    Append,
    Delete,
    KeepChanges,
    DiscardChanges,
    MergeForward,
    MergeBackward,
    Explode,
    Duplicate,
    Fitify,
}

impl Command {
    pub fn all() -> &'static [Command] {
        &[
            Self::Open,
            Self::Save,
            Self::SaveAs,
            Self::Undo,
            Self::Redo,
            Self::MoveUp,
            Self::MoveDown,
            Self::Edit,
            Self::Append,
            Self::Delete,
            Self::KeepChanges,
            Self::DiscardChanges,
            Self::MergeForward,
            Self::MergeBackward,
            Self::Explode,
            Self::Duplicate,
            Self::Fitify,
        ]
    }

    /// Label shown on menu surfaces.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open File...",
            Self::Save => "Save File",
            Self::SaveAs => "Save File As...",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::MoveUp => "Up",
            Self::MoveDown => "Down",
            Self::Edit => "Edit",
            Self::Append => "Append",
            Self::Delete => "Delete",
            Self::KeepChanges => "Keep Changes",
            Self::DiscardChanges => "Discard Changes",
            Self::MergeForward => "Merge Forward",
            Self::MergeBackward => "Merge Backward",
            Self::Explode => "Explode",
            Self::Duplicate => "Duplicate",
            Self::Fitify => "Fitify",
        }
    }

    /// Commands whose availability follows the selected slide and editor mode.
    pub fn is_selection_dependent(&self) -> bool {
        matches!(
            self,
            Self::MoveUp
                | Self::MoveDown
                | Self::Delete
                | Self::Append
                | Self::Edit
                | Self::KeepChanges
                | Self::DiscardChanges
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_closed_and_unique() {
        let all = Command::all();
        assert_eq!(all.len(), 17);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_selection_dependent_set() {
        let dependent: Vec<Command> = Command::all()
            .iter()
            .copied()
            .filter(Command::is_selection_dependent)
            .collect();
        assert_eq!(
            dependent,
            vec![
                Command::MoveUp,
                Command::MoveDown,
                Command::Edit,
                Command::Append,
                Command::Delete,
                Command::KeepChanges,
                Command::DiscardChanges,
            ]
        );
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        assert_eq!(serde_json::to_string(&Command::MoveUp).unwrap(), "\"moveUp\"");
        assert_eq!(serde_json::to_string(&Command::SaveAs).unwrap(), "\"saveAs\"");
        let parsed: Command = serde_json::from_str("\"discardChanges\"").unwrap();
        assert_eq!(parsed, Command::DiscardChanges);
    }
}
