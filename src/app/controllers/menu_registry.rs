use std::collections::BTreeMap;

use crate::app::domain::menu::{APPLICATION_MENU, CONTEXT_MENU, EntryTemplate};
use crate::app::domain::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSurface {
    Application,
    Context,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntryState {
    pub id: EntryId,
    pub enabled: bool,
    pub visible: bool,
}

/// A partial update for one entry. `None` fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
}

pub type Projection = BTreeMap<EntryId, EntryPatch>;

/// Per-surface entry states, built once from a static template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTable {
    surface: MenuSurface,
    template: &'static [EntryTemplate],
    entries: BTreeMap<EntryId, MenuEntryState>,
}

impl MenuTable {
    fn from_template(surface: MenuSurface, template: &'static [EntryTemplate]) -> Self {
        let entries = template
            .iter()
            .map(|t| {
                (
                    t.id,
                    MenuEntryState {
                        id: t.id,
                        enabled: t.enabled,
                        visible: t.visible,
                    },
                )
            })
            .collect();
        Self {
            surface,
            template,
            entries,
        }
    }

    pub fn surface(&self) -> MenuSurface {
        self.surface
    }

    pub fn template(&self) -> &'static [EntryTemplate] {
        self.template
    }

    pub fn entry(&self, id: impl Into<EntryId>) -> Option<&MenuEntryState> {
        self.entries.get(&id.into())
    }

    /// Entry states in template order.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntryState> {
        self.template.iter().filter_map(|t| self.entries.get(&t.id))
    }

    /// Whether the entry would currently let its command through.
    #[cfg(test)]
    pub fn permits(&self, id: impl Into<EntryId>) -> bool {
        self.entry(id).is_some_and(|e| e.enabled && e.visible)
    }

    /// Apply a projection; returns the ids whose state actually changed.
    /// Ids the surface does not carry are skipped.
    fn apply(&mut self, projection: &Projection) -> Vec<EntryId> {
        let mut changed = Vec::new();
        for (id, patch) in projection {
            let Some(entry) = self.entries.get_mut(id) else {
                continue;
            };
            let before = *entry;
            if let Some(enabled) = patch.enabled {
                entry.enabled = enabled;
            }
            if let Some(visible) = patch.visible {
                entry.visible = visible;
            }
            if *entry != before {
                changed.push(*id);
            }
        }
        changed
    }
}

/// Owns the application-menu and context-menu state tables.
///
/// Widgets mirror these tables; they are never the source of truth.
#[derive(Debug, Clone)]
pub struct MenuRegistry {
    application: MenuTable,
    context: MenuTable,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self {
            application: Self::build_application_menu(),
            context: Self::build_context_menu(),
        }
    }

    pub fn build_application_menu() -> MenuTable {
        MenuTable::from_template(MenuSurface::Application, APPLICATION_MENU)
    }

    pub fn build_context_menu() -> MenuTable {
        MenuTable::from_template(MenuSurface::Context, CONTEXT_MENU)
    }

    pub fn table(&self, surface: MenuSurface) -> &MenuTable {
        match surface {
            MenuSurface::Application => &self.application,
            MenuSurface::Context => &self.context,
        }
    }

    /// Update only the entries named in `projection`. Idempotent.
    pub fn apply_projection(&mut self, surface: MenuSurface, projection: &Projection) -> Vec<EntryId> {
        let table = match surface {
            MenuSurface::Application => &mut self.application,
            MenuSurface::Context => &mut self.context,
        };
        let changed = table.apply(projection);
        if !changed.is_empty() {
            tracing::debug!(?surface, ?changed, "menu entries updated");
        }
        changed
    }

    /// The commands the given surface currently lets through.
    #[cfg(test)]
    pub fn permitted_commands(&self, surface: MenuSurface) -> Vec<crate::app::domain::Command> {
        let table = self.table(surface);
        table
            .entries()
            .filter(|e| e.enabled && e.visible)
            .filter_map(|e| e.id.command())
            .collect()
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Command, ShellAction};

    fn patch_enabled(value: bool) -> EntryPatch {
        EntryPatch {
            enabled: Some(value),
            visible: None,
        }
    }

    #[test]
    fn test_initial_application_state() {
        let registry = MenuRegistry::new();
        let app = registry.table(MenuSurface::Application);
        for command in [Command::Open, Command::Save, Command::SaveAs, Command::Undo, Command::Redo] {
            assert!(app.permits(command), "{:?}", command);
        }
        for command in [Command::MoveUp, Command::Edit, Command::KeepChanges, Command::Append] {
            assert!(!app.entry(command).unwrap().enabled, "{:?}", command);
        }
        assert!(app.permits(EntryId::Shell(ShellAction::About)));
        assert!(app.permits(EntryId::Shell(ShellAction::ToggleFullscreen)));
    }

    #[test]
    fn test_initial_context_state() {
        let registry = MenuRegistry::new();
        assert_eq!(
            registry.permitted_commands(MenuSurface::Context),
            vec![
                Command::MergeForward,
                Command::MergeBackward,
                Command::Explode,
                Command::Duplicate,
                Command::Fitify,
            ]
        );
    }

    #[test]
    fn test_apply_projection_touches_only_named_entries() {
        let mut registry = MenuRegistry::new();
        let before = registry.table(MenuSurface::Application).clone();

        let mut projection = Projection::new();
        projection.insert(Command::Delete.into(), patch_enabled(true));
        let changed = registry.apply_projection(MenuSurface::Application, &projection);
        assert_eq!(changed, vec![EntryId::Command(Command::Delete)]);

        let after = registry.table(MenuSurface::Application);
        for entry in after.entries() {
            if entry.id == EntryId::Command(Command::Delete) {
                assert!(entry.enabled);
            } else {
                assert_eq!(Some(entry), before.entry(entry.id));
            }
        }
    }

    #[test]
    fn test_apply_projection_is_idempotent() {
        let mut registry = MenuRegistry::new();
        let mut projection = Projection::new();
        projection.insert(Command::Edit.into(), patch_enabled(true));
        projection.insert(
            Command::KeepChanges.into(),
            EntryPatch {
                enabled: Some(false),
                visible: Some(true),
            },
        );

        registry.apply_projection(MenuSurface::Application, &projection);
        let once = registry.table(MenuSurface::Application).clone();
        let changed = registry.apply_projection(MenuSurface::Application, &projection);

        assert!(changed.is_empty());
        assert_eq!(registry.table(MenuSurface::Application), &once);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let mut registry = MenuRegistry::new();
        let before = registry.table(MenuSurface::Context).clone();
        let mut projection = Projection::new();
        // The context menu has no Open entry
        projection.insert(Command::Open.into(), patch_enabled(false));
        assert!(registry.apply_projection(MenuSurface::Context, &projection).is_empty());
        assert_eq!(registry.table(MenuSurface::Context), &before);
    }

    #[test]
    fn test_entries_follow_template_order() {
        let registry = MenuRegistry::new();
        let table = registry.table(MenuSurface::Context);
        let order: Vec<EntryId> = table.entries().map(|e| e.id).collect();
        let template: Vec<EntryId> = table.template().iter().map(|t| t.id).collect();
        assert_eq!(order, template);
    }
}
