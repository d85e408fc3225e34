use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{app::Sender, dialog, menu::MenuBar, prelude::*, window::Window};

use super::controllers::menu_registry::{MenuRegistry, MenuSurface};
use super::controllers::router::CommandRouter;
use super::controllers::selection::SelectionTracker;
use super::domain::file_handle::title_for_path;
use super::domain::menu::HELP_URL;
use super::domain::{Command, CoreOutbound, Message, SelectionSnapshot, ShellAction, ShellSettings};
use super::infrastructure::boundary::{NativeShell, ShellBoundary};
use super::infrastructure::error::AppError;
use super::services::core_process::CorePort;
use super::services::persistence::{PersistenceWorkflow, PipelineIo, Step};
use crate::ui::context_menu::ContextMenu;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::sync_entries;

/// What the event loop should do after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// The shell context: owns the window, both menus and every controller.
pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub context_menu: ContextMenu,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<ShellSettings>>,
    shell: NativeShell,
    core: Rc<dyn CorePort>,
    registry: MenuRegistry,
    selection: SelectionTracker,
    router: CommandRouter,
    persistence: PersistenceWorkflow,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<ShellSettings>>,
        registry: MenuRegistry,
        core: Rc<dyn CorePort>,
    ) -> Self {
        let shell = NativeShell::new(sender, widgets.wind.clone(), settings.clone());
        let router = CommandRouter::new(core.clone());

        let mut state = Self {
            window: widgets.wind,
            menu: widgets.menu,
            context_menu: widgets.context_menu,
            sender,
            settings,
            shell,
            core,
            registry,
            selection: SelectionTracker::new(),
            router,
            persistence: PersistenceWorkflow::new(),
        };
        // Nothing is selected until the core says otherwise
        state.apply_snapshot(Some(SelectionSnapshot::deselected()));
        let title = state.persistence.file().window_title();
        state.shell.set_window_title(&title);
        state
    }

    pub fn handle_message(&mut self, msg: Message) -> Flow {
        match msg {
            Message::Command(command) => self.on_command(command),
            Message::Shell(action) => return self.on_shell_action(action),
            Message::WindowClose => return self.file_quit(),

            Message::Core(event) => self.on_core_event(event),
            Message::CoreFailed(err) => return self.fatal(err),

            Message::OpenPathPicked(path) => {
                let io = PipelineIo { shell: &mut self.shell, core: &*self.core };
                self.persistence.on_open_path(path, io);
            }
            Message::FileRead { path, result } => self.on_file_read(path, result),
            Message::SavePathPicked(path) => {
                let io = PipelineIo { shell: &mut self.shell, core: &*self.core };
                self.persistence.on_save_path(path, io);
            }
            Message::FileWritten { path, result } => self.on_file_written(path, result),
        }
        Flow::Continue
    }

    // --- Commands ---

    fn on_command(&mut self, command: Command) {
        match command {
            // Open never reaches the core until the file is loaded
            Command::Open => self.file_open(),
            Command::SaveAs => {
                self.persistence.arm_save_as();
                self.router.dispatch(command);
            }
            _ => self.router.dispatch(command),
        }
    }

    fn on_shell_action(&mut self, action: ShellAction) -> Flow {
        match action {
            ShellAction::About => show_about_dialog(),
            ShellAction::Quit => return self.file_quit(),
            ShellAction::ToggleFullscreen => {
                let fullscreen = self.window.fullscreen_active();
                self.window.fullscreen(!fullscreen);
            }
            ShellAction::Minimize => self.window.iconize(),
            ShellAction::LearnMore => {
                if let Err(e) = open::that(HELP_URL) {
                    tracing::warn!("failed to open {}: {}", HELP_URL, e);
                }
            }
        }
        Flow::Continue
    }

    // --- Application core ---

    fn on_core_event(&mut self, event: CoreOutbound) {
        match event {
            CoreOutbound::SelectedSlideInfo(snapshot) => self.apply_snapshot(snapshot),
            CoreOutbound::SavePresentationText { filename, body } => {
                let io = PipelineIo { shell: &mut self.shell, core: &*self.core };
                self.persistence.on_save_request(&filename, body, io);
            }
            CoreOutbound::OpenFileDialog => self.file_open(),
            // FileHandle only moves through the pipelines
            CoreOutbound::UpdateFileName(path) => self.shell.set_window_title(&title_for_path(Path::new(&path))),
            CoreOutbound::UpdateWindowTitle(title) => self.shell.set_window_title(&title),
        }
    }

    fn apply_snapshot(&mut self, snapshot: Option<SelectionSnapshot>) {
        let outcome = self.selection.on_snapshot(snapshot, &mut self.registry);
        sync_entries(&self.menu, self.registry.table(MenuSurface::Application));
        self.context_menu.sync(self.registry.table(MenuSurface::Context));
        if outcome.show_context_menu {
            self.context_menu.popup();
        }
    }

    /// Protocol violations and a lost core end the process.
    fn fatal(&mut self, err: AppError) -> Flow {
        tracing::error!("{}", err);
        dialog::alert_default(&format!("The editor cannot continue.\n\n{}", err));
        Flow::Exit(1)
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        let io = PipelineIo { shell: &mut self.shell, core: &*self.core };
        self.persistence.begin_open(io);
    }

    fn on_file_read(&mut self, path: PathBuf, result: io::Result<String>) {
        let io = PipelineIo { shell: &mut self.shell, core: &*self.core };
        if let Step::Loaded(path) = self.persistence.on_file_read(path, result, io) {
            self.remember_directory(&path);
        }
    }

    fn on_file_written(&mut self, path: PathBuf, result: io::Result<()>) {
        let io = PipelineIo { shell: &mut self.shell, core: &*self.core };
        if let Step::Saved(path) = self.persistence.on_file_written(path, result, io) {
            self.remember_directory(&path);
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        self.settings.borrow_mut().remember_directory_of(path);
    }

    /// Handle quit request. Persists settings and asks the loop to exit.
    pub fn file_quit(&mut self) -> Flow {
        if let Err(e) = self.settings.borrow().save() {
            tracing::warn!("failed to save settings: {}", e);
        }
        Flow::Exit(0)
    }
}
