use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::controllers::menu_registry::MenuTable;
use crate::app::domain::menu::{AccelKey, Accelerator};
use crate::app::domain::Message;

fn to_shortcut(accelerator: Option<Accelerator>) -> Shortcut {
    let Some(accel) = accelerator else {
        return Shortcut::None;
    };
    let mut modifiers = Shortcut::None;
    if accel.ctrl {
        modifiers = modifiers | Shortcut::Ctrl;
    }
    if accel.shift {
        modifiers = modifiers | Shortcut::Shift;
    }
    match accel.key {
        AccelKey::Char(c) => modifiers | c,
        AccelKey::Up => modifiers | Key::Up,
        AccelKey::Down => modifiers | Key::Down,
        AccelKey::Delete => modifiers | Key::Delete,
        AccelKey::Enter => modifiers | Key::Enter,
    }
}

/// Add every entry of `table` to `menu`. Each callback sends exactly one message.
pub fn add_entries<M: MenuExt>(menu: &mut M, table: &MenuTable, sender: &Sender<Message>) {
    let s = sender;
    for template in table.template() {
        let mut flag = if template.divider_after { MenuFlag::MenuDivider } else { MenuFlag::Normal };
        if let Some(state) = table.entry(template.id) {
            if !state.enabled {
                flag = flag | MenuFlag::Inactive;
            }
            if !state.visible {
                flag = flag | MenuFlag::Invisible;
            }
        }
        let id = template.id;
        menu.add(template.path, to_shortcut(template.accelerator), flag, {
            let s = *s;
            move |_| s.send(Message::from(id))
        });
    }
}

/// Mirror the table's enabled/visible flags onto the widget's items.
pub fn sync_entries<M: MenuExt>(menu: &M, table: &MenuTable) {
    for template in table.template() {
        let Some(state) = table.entry(template.id) else {
            continue;
        };
        let idx = menu.find_index(template.path);
        if idx < 0 {
            tracing::warn!(path = template.path, "menu item missing from widget");
            continue;
        }
        if let Some(mut item) = menu.at(idx) {
            if state.enabled {
                item.activate();
            } else {
                item.deactivate();
            }
            if state.visible {
                item.show();
            } else {
                item.hide();
            }
        }
    }
}

pub fn build_menu(menu: &mut MenuBar, table: &MenuTable, sender: &Sender<Message>) {
    add_entries(menu, table, sender);
}
