//! Closed set of editor actions reachable from keyboard shortcuts and menus.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Application action with no payload.
pub enum EditorAction {
    /// Create a new file in the current folder.
    NewFile,
    /// Create a new folder in the current folder.
    NewFolder,
    /// Save the active document.
    Save,
    /// Show or hide the rendered preview pane.
    TogglePreview,
    /// Turn autosave on or off.
    ToggleAutosave,
}

impl EditorAction {
    /// Every action, in menu order.
    pub const ALL: [Self; 5] = [
        Self::NewFile,
        Self::NewFolder,
        Self::Save,
        Self::TogglePreview,
        Self::ToggleAutosave,
    ];

    /// Returns the stable token used in serialized form and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewFile => "NEW_FILE",
            Self::NewFolder => "NEW_FOLDER",
            Self::Save => "SAVE",
            Self::TogglePreview => "TOGGLE_PREVIEW",
            Self::ToggleAutosave => "TOGGLE_AUTOSAVE",
        }
    }

    /// Returns the human-readable menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewFile => "New File",
            Self::NewFolder => "New Folder",
            Self::Save => "Save",
            Self::TogglePreview => "Toggle Preview",
            Self::ToggleAutosave => "Toggle Autosave",
        }
    }
}

impl std::fmt::Display for EditorAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_tokens_match_as_str() {
        for action in EditorAction::ALL {
            let encoded = serde_json::to_string(&action).expect("serialize");
            assert_eq!(encoded, format!("\"{}\"", action.as_str()));
            let decoded: EditorAction = serde_json::from_str(&encoded).expect("deserialize");
            assert_eq!(decoded, action);
        }
    }
}
