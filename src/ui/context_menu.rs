use fltk::{
    app::Sender,
    menu::{MenuButton, MenuButtonType},
    prelude::*,
};

use super::menu::{add_entries, sync_entries};
use crate::app::controllers::menu_registry::MenuTable;
use crate::app::domain::Message;

/// Right-click menu shown on request from the application core.
///
/// The button itself is never drawn; it only hosts the items and pops them
/// up at the pointer.
pub struct ContextMenu {
    button: MenuButton,
}

impl ContextMenu {
    pub fn new(table: &MenuTable, sender: &Sender<Message>) -> Self {
        let mut button = MenuButton::new(0, 0, 0, 0, None);
        button.set_type(MenuButtonType::Popup3);
        add_entries(&mut button, table, sender);
        Self { button }
    }

    pub fn sync(&self, table: &MenuTable) {
        sync_entries(&self.button, table);
    }

    /// Blocks until the user picks an item or dismisses the menu; a picked
    /// item runs its callback.
    pub fn popup(&mut self) {
        let _ = self.button.popup();
    }
}
