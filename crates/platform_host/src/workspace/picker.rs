//! Native folder picker configuration and result normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Options forwarded to the native picker dialog.
pub struct FolderPickerOptions {
    /// Pick directories instead of files.
    pub directory: bool,
    /// Allow multiple selections.
    pub multiple: bool,
    /// Hint that the host should grant recursive access to the picked directory.
    pub recursive: bool,
}

impl FolderPickerOptions {
    /// Directory-only, single-selection picker with a recursive access hint.
    pub const fn single_directory() -> Self {
        Self {
            directory: true,
            multiple: false,
            recursive: true,
        }
    }
}

impl Default for FolderPickerOptions {
    fn default() -> Self {
        Self::single_directory()
    }
}

/// Narrows a raw picker result to at most one selected path.
///
/// `null`, an empty string, and an empty array mean the user cancelled. An array (some platforms
/// return one even for single selection) yields its first element.
pub fn normalize_folder_selection(selection: Value) -> Option<String> {
    match selection {
        Value::String(path) if !path.is_empty() => Some(path),
        Value::Array(paths) => match paths.into_iter().next() {
            Some(Value::String(path)) if !path.is_empty() => Some(path),
            _ => None,
        },
        _ => None,
    }
}
