//! Key chord classification for editor shortcuts.
//!
//! The whole shortcut grammar is one table keyed by (lowercased key, shift):
//!
//! | key | no shift | shift |
//! |-----|----------|-------|
//! | `n` | [`EditorAction::NewFile`] | [`EditorAction::NewFolder`] |
//! | `s` | [`EditorAction::Save`] | inert |
//! | `p` | [`EditorAction::TogglePreview`] | inert |
//! | `,` | [`EditorAction::ToggleAutosave`] | inert |
//!
//! Control and Command count as the same modifier. Without it nothing is ever classified, so
//! plain typing is never intercepted.

use std::cell::Cell;

use crate::actions::EditorAction;

/// Read/suppress access to a keyboard event.
pub trait ShortcutEvent {
    /// Key identifier as reported by the platform (`"s"`, `"S"`, `","`, `"Enter"`, ...).
    fn key_name(&self) -> String;
    /// Whether Control is held.
    fn ctrl_pressed(&self) -> bool;
    /// Whether Command/Meta is held.
    fn meta_pressed(&self) -> bool;
    /// Whether Shift is held.
    fn shift_pressed(&self) -> bool;
    /// Cancels the default action and stops propagation.
    fn suppress_default(&self);
}

impl ShortcutEvent for web_sys::KeyboardEvent {
    fn key_name(&self) -> String {
        web_sys::KeyboardEvent::key(self)
    }

    fn ctrl_pressed(&self) -> bool {
        web_sys::KeyboardEvent::ctrl_key(self)
    }

    fn meta_pressed(&self) -> bool {
        web_sys::KeyboardEvent::meta_key(self)
    }

    fn shift_pressed(&self) -> bool {
        web_sys::KeyboardEvent::shift_key(self)
    }

    fn suppress_default(&self) {
        web_sys::Event::prevent_default(self);
        web_sys::Event::stop_propagation(self);
    }
}

#[derive(Debug, Clone, Default)]
/// Key event built in code, for tests and programmatic dispatch.
pub struct SyntheticKeyEvent {
    /// Key identifier.
    pub key: String,
    /// Control held.
    pub ctrl_key: bool,
    /// Command/Meta held.
    pub meta_key: bool,
    /// Shift held.
    pub shift_key: bool,
    suppressed: Cell<bool>,
}

impl SyntheticKeyEvent {
    /// Creates an event for `key` with no modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Holds Control.
    pub fn ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Holds Command/Meta.
    pub fn meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// Holds Shift.
    pub fn shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Returns whether a handler suppressed the default action.
    pub fn default_prevented(&self) -> bool {
        self.suppressed.get()
    }
}

impl ShortcutEvent for SyntheticKeyEvent {
    fn key_name(&self) -> String {
        self.key.clone()
    }

    fn ctrl_pressed(&self) -> bool {
        self.ctrl_key
    }

    fn meta_pressed(&self) -> bool {
        self.meta_key
    }

    fn shift_pressed(&self) -> bool {
        self.shift_key
    }

    fn suppress_default(&self) {
        self.suppressed.set(true);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How the shared Control/Command modifier is spelled in labels.
pub enum ModifierStyle {
    /// `Ctrl` (Windows, Linux).
    #[default]
    Control,
    /// `Cmd` (macOS).
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Primary key plus modifier state, derived per event.
pub struct KeyChord {
    key: String,
    modifier: bool,
    shift: bool,
}

impl KeyChord {
    /// Builds a chord; `key` is lowercased.
    pub fn new(key: &str, modifier: bool, shift: bool) -> Self {
        Self {
            key: key.to_lowercase(),
            modifier,
            shift,
        }
    }

    /// Derives the chord of a key event (Control or Command count as the modifier).
    pub fn from_event<E: ShortcutEvent + ?Sized>(ev: &E) -> Self {
        Self::new(
            &ev.key_name(),
            ev.ctrl_pressed() || ev.meta_pressed(),
            ev.shift_pressed(),
        )
    }

    /// Lowercased primary key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether Control or Command is held.
    pub fn modifier(&self) -> bool {
        self.modifier
    }

    /// Whether Shift is held.
    pub fn shift(&self) -> bool {
        self.shift
    }

    /// Renders the chord for menus and tooltips, e.g. `Cmd+Shift+N`.
    pub fn label(&self, style: ModifierStyle) -> String {
        let key = self.key.to_uppercase();
        let mut parts = Vec::with_capacity(3);
        if self.modifier {
            parts.push(match style {
                ModifierStyle::Control => "Ctrl",
                ModifierStyle::Command => "Cmd",
            });
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(key.as_str());
        parts.join("+")
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label(ModifierStyle::Control))
    }
}

/// Maps a chord to at most one action.
pub fn classify_chord(chord: &KeyChord) -> Option<EditorAction> {
    if !chord.modifier {
        return None;
    }
    match (chord.key.as_str(), chord.shift) {
        ("n", false) => Some(EditorAction::NewFile),
        ("n", true) => Some(EditorAction::NewFolder),
        ("s", false) => Some(EditorAction::Save),
        ("p", false) => Some(EditorAction::TogglePreview),
        (",", false) => Some(EditorAction::ToggleAutosave),
        // Shift variants of these keys are inert, not unmapped.
        ("s" | "p" | ",", true) => None,
        _ => None,
    }
}

/// Classifies a key event into at most one action.
pub fn classify_key_event<E: ShortcutEvent + ?Sized>(ev: &E) -> Option<EditorAction> {
    if !(ev.ctrl_pressed() || ev.meta_pressed()) {
        return None;
    }
    classify_chord(&KeyChord::from_event(ev))
}

/// Returns the chord bound to `action`.
pub fn shortcut_chord(action: EditorAction) -> KeyChord {
    match action {
        EditorAction::NewFile => KeyChord::new("n", true, false),
        EditorAction::NewFolder => KeyChord::new("n", true, true),
        EditorAction::Save => KeyChord::new("s", true, false),
        EditorAction::TogglePreview => KeyChord::new("p", true, false),
        EditorAction::ToggleAutosave => KeyChord::new(",", true, false),
    }
}
