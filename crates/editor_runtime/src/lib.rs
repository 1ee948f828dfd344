//! Keyboard-driven editor actions and the glue between UI handlers and the host workspace.
//!
//! - [`actions`] names the closed set of editor actions.
//! - [`shortcuts`] classifies key events into actions with a fixed chord table.
//! - [`dispatcher`] owns the action-to-handler registry and window keydown wiring.
//! - [`commands`] runs file open/save/workspace flows and keeps the recent files list current.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod commands;
pub mod dispatcher;
pub mod shortcuts;

pub use actions::EditorAction;
pub use commands::{EditorCommands, OpenedFile, OpenedWorkspace};
pub use dispatcher::{install_window_shortcuts, ActionDispatcher, ActionHandler};
pub use shortcuts::{
    classify_chord, classify_key_event, shortcut_chord, KeyChord, ModifierStyle, ShortcutEvent,
    SyntheticKeyEvent,
};
