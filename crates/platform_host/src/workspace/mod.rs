//! Wire contract for workspace file operations and the native folder picker.

pub mod commands;
pub mod picker;
