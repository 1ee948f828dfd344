//! Host command names and argument records.
//!
//! Command names are the wire contract with the host executor and must match its registered
//! handlers byte-for-byte.

use serde::Serialize;

use super::picker::FolderPickerOptions;

/// Reads a workspace file as text.
pub const READ_FILE_COMMAND: &str = "read_file";
/// Overwrites a workspace file with text content.
pub const WRITE_FILE_COMMAND: &str = "write_file";
/// Lists child names of a workspace directory.
pub const LIST_DIR_COMMAND: &str = "list_dir";
/// Sets the host-side active workspace root.
pub const SET_WORKSPACE_COMMAND: &str = "set_workspace";
/// Creates a workspace directory.
pub const CREATE_DIR_COMMAND: &str = "create_dir";
/// Deletes a workspace file or directory.
pub const DELETE_NODE_COMMAND: &str = "delete_node";
/// Renames/moves a workspace file or directory.
pub const RENAME_NODE_COMMAND: &str = "rename_node";
/// Dialog plugin command that opens the native file/folder picker.
pub const DIALOG_OPEN_COMMAND: &str = "plugin:dialog|open";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// `{path}` argument record shared by single-path commands.
pub struct PathArgs<'a> {
    /// Target path, relative to the active workspace root unless absolute.
    pub path: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// `{path, content}` argument record for [`WRITE_FILE_COMMAND`].
pub struct WriteFileArgs<'a> {
    /// Target file path.
    pub path: &'a str,
    /// Full replacement text.
    pub content: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// `{from, to}` argument record for [`RENAME_NODE_COMMAND`].
pub struct RenameArgs<'a> {
    /// Existing path.
    pub from: &'a str,
    /// Destination path.
    pub to: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// `{options}` argument record for [`DIALOG_OPEN_COMMAND`].
pub struct DialogOpenArgs {
    /// Picker configuration.
    pub options: FolderPickerOptions,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn argument_records_serialize_to_host_field_names() {
        assert_eq!(
            serde_json::to_value(WriteFileArgs {
                path: "notes/a.md",
                content: "# A",
            })
            .expect("serialize"),
            json!({ "path": "notes/a.md", "content": "# A" })
        );
        assert_eq!(
            serde_json::to_value(RenameArgs {
                from: "a.md",
                to: "b.md",
            })
            .expect("serialize"),
            json!({ "from": "a.md", "to": "b.md" })
        );
    }

    #[test]
    fn dialog_args_nest_picker_options() {
        assert_eq!(
            serde_json::to_value(DialogOpenArgs {
                options: FolderPickerOptions::single_directory(),
            })
            .expect("serialize"),
            json!({
                "options": { "directory": true, "multiple": false, "recursive": true }
            })
        );
    }
}
