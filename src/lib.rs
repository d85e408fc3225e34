//! Native desktop shell for the Deckset presentation editor.
//!
//! The shell owns the window, the menu bar, the slide context menu and the
//! open/save workflow. Everything else lives in the application core, which
//! runs as a separate process and talks to the shell over JSON lines.

pub mod app;
pub mod ui;
