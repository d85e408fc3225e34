use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, dialog, prelude::*};
use tracing_subscriber::EnvFilter;

use deckset_shell::app::{AppState, Flow, Message, MenuRegistry, ProcessCore, ShellSettings};
use deckset_shell::ui::main_window::build_main_window;

fn exit_with_alert(message: &str) -> ! {
    tracing::error!("{}", message);
    dialog::alert_default(message);
    std::process::exit(1);
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deckset_shell=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = app::App::default();

    let settings = ShellSettings::load();
    if let Err(e) = settings.validate() {
        exit_with_alert(&e.to_string());
    }

    let (sender, receiver) = app::channel::<Message>();

    let registry = MenuRegistry::new();
    let mut widgets = build_main_window(&settings, &registry, &sender);

    let core = match ProcessCore::spawn(&settings.core_command, sender) {
        Ok(core) => Rc::new(core),
        Err(e) => exit_with_alert(&e.to_string()),
    };

    widgets.wind.show();
    let settings = Rc::new(RefCell::new(settings));
    let mut state = AppState::new(widgets, sender, settings, registry, core);

    let mut exit_code = 0;
    'events: while app.wait() {
        while let Some(msg) = receiver.recv() {
            if let Flow::Exit(code) = state.handle_message(msg) {
                exit_code = code;
                break 'events;
            }
        }
    }

    // Dropping the state stops the core process
    drop(state);
    std::process::exit(exit_code);
}
