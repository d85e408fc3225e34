//! Open, Save and Save As pipelines.
//!
//! Each pipeline is a short state machine. A trigger moves it out of `Idle`
//! and asks the shell boundary for a dialog or a file operation; the
//! completion arrives later as a message and is fed back through the matching
//! `on_*` method. Dismissing a dialog returns the pipeline to `Idle` without
//! any side effect.

use std::io;
use std::mem;
use std::path::{Path, PathBuf};

use crate::app::domain::{CoreInbound, FileHandle};
use crate::app::infrastructure::boundary::ShellBoundary;
use crate::app::infrastructure::error::AppError;
use crate::app::services::core_process::CorePort;

/// The collaborators a pipeline step may touch.
pub struct PipelineIo<'a> {
    pub shell: &'a mut dyn ShellBoundary,
    pub core: &'a dyn CorePort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenState {
    Idle,
    AwaitingPath,
    AwaitingRead { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Save,
    SaveAs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    AwaitingPath { body: String, kind: SaveKind },
    /// `newly_chosen` is true when the path came from the save picker.
    AwaitingWrite { path: PathBuf, newly_chosen: bool },
}

/// What a single pipeline step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Waiting on the next completion.
    Pending,
    /// The same pipeline is already in flight; the trigger was dropped.
    Busy,
    /// The user dismissed the dialog.
    Cancelled,
    Loaded(PathBuf),
    Saved(PathBuf),
    /// The file operation failed and the user was told.
    Failed,
    /// A completion nobody was waiting for.
    Stale,
}

#[derive(Debug)]
pub struct PersistenceWorkflow {
    file: FileHandle,
    open: OpenState,
    save: SaveState,
    save_as_armed: bool,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl PersistenceWorkflow {
    pub fn new() -> Self {
        Self {
            file: FileHandle::new(),
            open: OpenState::Idle,
            save: SaveState::Idle,
            save_as_armed: false,
        }
    }

    pub fn file(&self) -> &FileHandle {
        &self.file
    }

    pub fn open_state(&self) -> &OpenState {
        &self.open
    }

    pub fn save_state(&self) -> &SaveState {
        &self.save
    }

    // --- Open ---

    pub fn begin_open(&mut self, io: PipelineIo) -> Step {
        if self.open != OpenState::Idle {
            tracing::debug!(state = ?self.open, "open already in progress");
            return Step::Busy;
        }
        self.open = OpenState::AwaitingPath;
        io.shell.pick_open_path();
        Step::Pending
    }

    pub fn on_open_path(&mut self, path: Option<PathBuf>, io: PipelineIo) -> Step {
        if self.open != OpenState::AwaitingPath {
            tracing::debug!(state = ?self.open, "stale open-path completion");
            return Step::Stale;
        }
        match path {
            None => {
                self.open = OpenState::Idle;
                Step::Cancelled
            }
            Some(path) => {
                io.shell.read_text_file(&path);
                self.open = OpenState::AwaitingRead { path };
                Step::Pending
            }
        }
    }

    pub fn on_file_read(&mut self, path: PathBuf, result: io::Result<String>, io: PipelineIo) -> Step {
        match self.open {
            OpenState::AwaitingRead { path: ref expected } if *expected == path => {}
            _ => {
                tracing::debug!(path = %path.display(), "stale read completion");
                return Step::Stale;
            }
        }
        self.open = OpenState::Idle;

        match result {
            Ok(body) => {
                tracing::info!(path = %path.display(), bytes = body.len(), "presentation loaded");
                self.file.set_path(path.clone());
                io.core.send(CoreInbound::LoadPresentationText {
                    filename: path_string(&path),
                    body,
                });
                io.shell.set_window_title(&self.file.window_title());
                Step::Loaded(path)
            }
            Err(source) => {
                let err = AppError::Read { path, source };
                tracing::warn!("{}", err);
                io.shell.alert(&err.to_string());
                Step::Failed
            }
        }
    }

    // --- Save / Save As ---

    /// Treat the next save request from the core as Save As.
    pub fn arm_save_as(&mut self) {
        self.save_as_armed = true;
    }

    /// The core asked to persist `body`. An empty `filename` or a document
    /// that was never saved forces the picker.
    ///
    /// An armed Save As is consumed by this request even when it is dropped.
    pub fn on_save_request(&mut self, filename: &str, body: String, io: PipelineIo) -> Step {
        let kind = if mem::take(&mut self.save_as_armed) {
            SaveKind::SaveAs
        } else {
            SaveKind::Save
        };
        if self.save != SaveState::Idle {
            tracing::debug!(?kind, "save already in progress");
            return Step::Busy;
        }

        let target = match kind {
            SaveKind::SaveAs => None,
            SaveKind::Save if filename.is_empty() => None,
            SaveKind::Save => self.file.path().map(Path::to_path_buf),
        };

        match target {
            Some(path) => {
                io.shell.write_text_file(&path, body);
                self.save = SaveState::AwaitingWrite { path, newly_chosen: false };
            }
            None => {
                self.save = SaveState::AwaitingPath { body, kind };
                io.shell.pick_save_path();
            }
        }
        Step::Pending
    }

    pub fn on_save_path(&mut self, path: Option<PathBuf>, io: PipelineIo) -> Step {
        let (body, kind) = match mem::replace(&mut self.save, SaveState::Idle) {
            SaveState::AwaitingPath { body, kind } => (body, kind),
            other => {
                tracing::debug!(state = ?other, "stale save-path completion");
                self.save = other;
                return Step::Stale;
            }
        };
        match path {
            None => {
                tracing::debug!(?kind, "save dismissed");
                Step::Cancelled
            }
            Some(path) => {
                io.shell.write_text_file(&path, body);
                self.save = SaveState::AwaitingWrite { path, newly_chosen: true };
                Step::Pending
            }
        }
    }

    pub fn on_file_written(&mut self, path: PathBuf, result: io::Result<()>, io: PipelineIo) -> Step {
        let newly_chosen = match self.save {
            SaveState::AwaitingWrite {
                path: ref expected,
                newly_chosen,
            } if *expected == path => newly_chosen,
            _ => {
                tracing::debug!(path = %path.display(), "stale write completion");
                return Step::Stale;
            }
        };
        self.save = SaveState::Idle;

        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "presentation saved");
                if newly_chosen {
                    self.file.set_path(path.clone());
                    io.core.send(CoreInbound::UpdateFileName(path_string(&path)));
                    io.shell.set_window_title(&self.file.window_title());
                }
                Step::Saved(path)
            }
            Err(source) => {
                let err = AppError::Write { path, source };
                tracing::warn!("{}", err);
                io.shell.alert(&err.to_string());
                Step::Failed
            }
        }
    }
}

impl Default for PersistenceWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
