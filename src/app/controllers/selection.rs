use crate::app::domain::{Command, EditorMode, SelectionSnapshot};

use super::menu_registry::{EntryPatch, MenuRegistry, MenuSurface, Projection};

fn selection_dependent() -> impl Iterator<Item = Command> {
    Command::all().iter().copied().filter(Command::is_selection_dependent)
}

/// Whether `command` may be issued under `snapshot`, for the
/// selection-dependent commands.
pub fn permitted(snapshot: &SelectionSnapshot, command: Command) -> bool {
    if !snapshot.has_selection {
        return false;
    }
    match command {
        Command::Edit => snapshot.mode == EditorMode::View,
        Command::KeepChanges | Command::DiscardChanges => snapshot.mode == EditorMode::Edit,
        _ => true,
    }
}

/// The projection of `snapshot` onto one surface. The application menu gates
/// with `enabled`, the context menu with `visible`.
pub fn projection_for(snapshot: &SelectionSnapshot, surface: MenuSurface) -> Projection {
    selection_dependent()
        .map(|command| {
            let allowed = permitted(snapshot, command);
            let patch = match surface {
                MenuSurface::Application => EntryPatch {
                    enabled: Some(allowed),
                    visible: None,
                },
                MenuSurface::Context => EntryPatch {
                    enabled: None,
                    visible: Some(allowed),
                },
            };
            (command.into(), patch)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOutcome {
    /// The context menu should be popped up at the pointer now.
    pub show_context_menu: bool,
}

/// Holds the latest selection snapshot from the application core.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    current: SelectionSnapshot,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn current(&self) -> &SelectionSnapshot {
        &self.current
    }

    /// The sole mutator. `None` is the core's explicit "deselect everything".
    pub fn on_snapshot(&mut self, snapshot: Option<SelectionSnapshot>, registry: &mut MenuRegistry) -> SnapshotOutcome {
        let snapshot = snapshot.unwrap_or_else(SelectionSnapshot::deselected);
        self.current = snapshot;

        if !snapshot.has_selection {
            registry.apply_projection(MenuSurface::Application, &projection_for(&snapshot, MenuSurface::Application));
            registry.apply_projection(MenuSurface::Context, &projection_for(&snapshot, MenuSurface::Context));
            if snapshot.request_context_menu {
                tracing::debug!("context menu requested without a selection; suppressed");
            }
            return SnapshotOutcome { show_context_menu: false };
        }

        registry.apply_projection(MenuSurface::Application, &projection_for(&snapshot, MenuSurface::Application));

        if snapshot.request_context_menu {
            registry.apply_projection(MenuSurface::Context, &projection_for(&snapshot, MenuSurface::Context));
        }
        SnapshotOutcome {
            show_context_menu: snapshot.request_context_menu,
        }
    }
}
