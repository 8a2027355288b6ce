//! Ember Core Runtime
//!
//! This crate provides the foundational primitives for the Ember component
//! library:
//!
//! - **Keyed State**: per-instance component state that survives rebuilds
//! - **Events**: the input vocabulary (event types, keys, modifiers)
//!
//! # Example
//!
//! ```rust
//! use ember_core::{take_rebuild_request, use_state_keyed};
//!
//! let open = use_state_keyed("menu_open", || false);
//! open.set_rebuild(true);
//!
//! // The same key hands back the same state on the next build
//! assert!(use_state_keyed("menu_open", || false).get());
//! assert!(take_rebuild_request());
//! ```

pub mod events;
pub mod reactive;
pub mod runtime;

pub use events::{EventType, Key, Modifiers};
pub use reactive::{DirtyFlag, SharedSignalStore, Signal, SignalId, SignalStore, State};
pub use runtime::{take_rebuild_request, use_state_keyed, HookState, Runtime, StateKey};
