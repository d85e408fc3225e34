pub mod about;

use fltk::{app, prelude::*, window::Window};

/// Run a modal dialog's event loop until it is hidden.
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
    }
}
