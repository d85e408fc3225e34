//! Static description of the two menu surfaces.

use super::command::Command;

/// Menu entries handled by the shell itself rather than the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShellAction {
    About,
    Quit,
    ToggleFullscreen,
    Minimize,
    LearnMore,
}

/// Typed identifier of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryId {
    Command(Command),
    Shell(ShellAction),
}

impl EntryId {
    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Command(command) => Some(*command),
            Self::Shell(_) => None,
        }
    }
}

impl From<Command> for EntryId {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelKey {
    Char(char),
    Up,
    Down,
    Delete,
    Enter,
}

/// Keyboard accelerator, kept toolkit-neutral so templates can be `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accelerator {
    pub ctrl: bool,
    pub shift: bool,
    pub key: AccelKey,
}

impl Accelerator {
    pub const fn ctrl(key: AccelKey) -> Self {
        Self { ctrl: true, shift: false, key }
    }

    pub const fn ctrl_shift(key: AccelKey) -> Self {
        Self { ctrl: true, shift: true, key }
    }

    pub const fn shift(key: AccelKey) -> Self {
        Self { ctrl: false, shift: true, key }
    }
}

/// One row of a menu template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTemplate {
    pub id: EntryId,
    /// Menu path, e.g. "File/Open File...". Context entries have no submenu part.
    pub path: &'static str,
    pub accelerator: Option<Accelerator>,
    /// Draw a divider below this entry.
    pub divider_after: bool,
    pub enabled: bool,
    pub visible: bool,
}

const fn command(
    command: Command,
    path: &'static str,
    accelerator: Option<Accelerator>,
    divider_after: bool,
    enabled: bool,
) -> EntryTemplate {
    EntryTemplate {
        id: EntryId::Command(command),
        path,
        accelerator,
        divider_after,
        enabled,
        visible: true,
    }
}

const fn shell(action: ShellAction, path: &'static str, accelerator: Option<Accelerator>, divider_after: bool) -> EntryTemplate {
    EntryTemplate {
        id: EntryId::Shell(action),
        path,
        accelerator,
        divider_after,
        enabled: true,
        visible: true,
    }
}

/// Context entries always stay enabled; availability is expressed through visibility.
const fn context(command: Command, divider_after: bool, visible: bool) -> EntryTemplate {
    EntryTemplate {
        id: EntryId::Command(command),
        path: command.label(),
        accelerator: None,
        divider_after,
        enabled: true,
        visible,
    }
}

pub const APPLICATION_MENU: &[EntryTemplate] = &[
    // File
    command(Command::Open, "File/Open File...", Some(Accelerator::ctrl(AccelKey::Char('o'))), true, true),
    command(Command::Save, "File/Save File", Some(Accelerator::ctrl(AccelKey::Char('s'))), false, true),
    command(Command::SaveAs, "File/Save File As...", Some(Accelerator::ctrl_shift(AccelKey::Char('s'))), true, true),
    shell(ShellAction::Quit, "File/Quit", Some(Accelerator::ctrl(AccelKey::Char('q'))), false),
    // Edit
    command(Command::Undo, "Edit/Undo", Some(Accelerator::ctrl(AccelKey::Char('z'))), false, true),
    command(Command::Redo, "Edit/Redo", Some(Accelerator::ctrl_shift(AccelKey::Char('z'))), true, true),
    command(Command::MoveUp, "Edit/Up", Some(Accelerator::shift(AccelKey::Up)), false, false),
    command(Command::MoveDown, "Edit/Down", Some(Accelerator::shift(AccelKey::Down)), true, false),
    command(Command::Edit, "Edit/Edit", Some(Accelerator::ctrl(AccelKey::Char('e'))), false, false),
    command(Command::KeepChanges, "Edit/Keep Changes", Some(Accelerator::ctrl(AccelKey::Enter)), false, false),
    command(Command::DiscardChanges, "Edit/Discard Changes", None, true, false),
    command(Command::Delete, "Edit/Delete", Some(Accelerator::ctrl(AccelKey::Delete)), false, false),
    command(Command::Append, "Edit/Append", None, false, false),
    // View
    shell(ShellAction::ToggleFullscreen, "View/Toggle Full Screen", None, false),
    // Window
    shell(ShellAction::Minimize, "Window/Minimize", Some(Accelerator::ctrl(AccelKey::Char('m'))), false),
    // Help
    shell(ShellAction::About, "Help/About Deckset Editor", None, false),
    shell(ShellAction::LearnMore, "Help/Learn More", None, false),
];

pub const CONTEXT_MENU: &[EntryTemplate] = &[
    context(Command::MoveUp, false, false),
    context(Command::MoveDown, true, false),
    context(Command::Edit, false, false),
    context(Command::KeepChanges, false, false),
    context(Command::MergeForward, false, true),
    context(Command::MergeBackward, false, true),
    context(Command::Explode, false, true),
    context(Command::Duplicate, false, true),
    context(Command::Fitify, false, true),
    context(Command::DiscardChanges, false, false),
    context(Command::Delete, false, false),
    context(Command::Append, false, false),
];

pub const HELP_URL: &str = "https://github.com/noelrappin/deckset_editor";
