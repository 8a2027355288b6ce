//! Event handler storage for elements
//!
//! ```text
//! Element (Div)
//!     ↓ .on_click(|e| ...)
//! EventHandlers (stored on element)
//!     ↓ copied into DomTree on build
//! DomTree (handlers indexed by NodeId)
//!     ↓ DomTree::dispatch bubbles from the target to the root
//! Handler callback invoked
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use ember_core::events::{EventType, Key, Modifiers};
use rustc_hash::FxHashMap;

use crate::tree::NodeId;

/// Callback for handling events
///
/// Uses Rc since the UI is single-threaded.
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// Context passed to event handlers
#[derive(Clone, Debug)]
pub struct EventContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// The node the event was dispatched to
    pub target: Option<NodeId>,
    /// Key for KEY_DOWN events
    pub key: Option<Key>,
    pub modifiers: Modifiers,
    /// New text for INPUT events, selected value for CHANGE events
    pub value: Option<String>,
    /// Checked state for CHANGE events on toggles
    pub checked: Option<bool>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl EventContext {
    /// Create a new event context
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            target: None,
            key: None,
            modifiers: Modifiers::NONE,
            value: None,
            checked: None,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn click() -> Self {
        Self::new(EventType::Click)
    }

    pub fn focus() -> Self {
        Self::new(EventType::Focus)
    }

    pub fn blur() -> Self {
        Self::new(EventType::Blur)
    }

    pub fn key_down(key: Key) -> Self {
        Self::new(EventType::KeyDown).with_key(key)
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self::new(EventType::Input).with_value(value)
    }

    pub fn change(value: impl Into<String>) -> Self {
        Self::new(EventType::Change).with_value(value)
    }

    pub fn toggle(checked: bool) -> Self {
        Self::new(EventType::Change).with_checked(checked)
    }

    pub fn submit() -> Self {
        Self::new(EventType::Submit)
    }

    pub fn reset() -> Self {
        Self::new(EventType::Reset)
    }

    /// Set the key (for KEY_DOWN events)
    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub(crate) fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Suppress the host's default action (focus move, form submission, ...)
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Stop the event from reaching further ancestors
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// Storage for event handlers on an element
#[derive(Default, Clone)]
pub struct EventHandlers {
    handlers: FxHashMap<EventType, Vec<EventCallback>>,
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&'static str> = self.handlers.keys().map(|t| t.name()).collect();
        types.sort_unstable();
        f.debug_struct("EventHandlers").field("types", &types).finish()
    }
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check if a handler is registered for a specific event type
    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Rc::new(handler));
    }

    /// Get handlers for an event type
    pub fn get(&self, event_type: EventType) -> Option<&[EventCallback]> {
        self.handlers.get(&event_type).map(|v| v.as_slice())
    }

    /// Dispatch an event to all registered handlers for that type
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, ctx: &EventContext) -> usize {
        match self.handlers.get(&ctx.event_type) {
            Some(handlers) => {
                for handler in handlers {
                    handler(ctx);
                }
                handlers.len()
            }
            None => 0,
        }
    }
}
