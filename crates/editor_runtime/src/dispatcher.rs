//! Action-to-handler registry and keydown dispatch.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use leptos::leptos_dom::helpers::WindowListenerHandle;

use crate::{
    actions::EditorAction,
    shortcuts::{classify_key_event, ShortcutEvent},
};

/// Zero-argument callback bound to an [`EditorAction`].
pub type ActionHandler = Rc<dyn Fn()>;

#[derive(Default)]
/// Registry holding at most one handler per [`EditorAction`].
///
/// Views register handlers when they mount and remove them when they unmount. A classified key
/// event is only consumed when its action has a handler; otherwise the event keeps its default
/// behavior.
pub struct ActionDispatcher {
    handlers: RefCell<HashMap<EditorAction, ActionHandler>>,
}

impl ActionDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `action`, replacing any previous handler.
    pub fn register_action(&self, action: EditorAction, handler: impl Fn() + 'static) {
        self.handlers.borrow_mut().insert(action, Rc::new(handler));
    }

    /// Unbinds whatever handler `action` has.
    pub fn remove_action(&self, action: EditorAction) {
        self.handlers.borrow_mut().remove(&action);
    }

    /// Returns whether `action` currently has a handler.
    pub fn has_handler(&self, action: EditorAction) -> bool {
        self.handlers.borrow().contains_key(&action)
    }

    /// Invokes the handler for `action` directly (menu clicks, command palette).
    ///
    /// Returns `false` when no handler is registered.
    pub fn dispatch(&self, action: EditorAction) -> bool {
        let Some(handler) = self.handler(action) else {
            return false;
        };
        handler();
        true
    }

    /// Classifies `ev` and, when the resulting action has a handler, suppresses the event's
    /// default behavior and runs the handler.
    ///
    /// Returns the action that was run. Events whose action has no handler are left untouched.
    pub fn handle_key_down<E: ShortcutEvent + ?Sized>(&self, ev: &E) -> Option<EditorAction> {
        let action = classify_key_event(ev)?;
        let handler = self.handler(action)?;
        ev.suppress_default();
        handler();
        Some(action)
    }

    // Clone out so the handler can re-register actions while running.
    fn handler(&self, action: EditorAction) -> Option<ActionHandler> {
        self.handlers.borrow().get(&action).cloned()
    }
}

impl fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<EditorAction> = self.handlers.borrow().keys().copied().collect();
        registered.sort_by_key(|action| action.as_str());
        f.debug_struct("ActionDispatcher")
            .field("registered", &registered)
            .finish()
    }
}

/// Routes window `keydown` events through `dispatcher`.
///
/// Call `remove()` on the returned handle when the hosting view unmounts.
pub fn install_window_shortcuts(dispatcher: Rc<ActionDispatcher>) -> WindowListenerHandle {
    leptos::window_event_listener(leptos::ev::keydown, move |ev| {
        let _ = dispatcher.handle_key_down(&ev);
    })
}
