//! Thread-local component runtime
//!
//! The runtime owns the signal store and the keyed hook table. Components
//! create their internal state through it without leaking implementation
//! details to the caller:
//!
//! ```ignore
//! // The caller only hands over the value it cares about
//! cn::combobox().bind(&country)
//!
//! // Internally the component keeps its open/highlight state keyed by instance
//! let machine = use_state_keyed(&key.derive("machine"), ComboboxState::default);
//! ```
//!
//! The UI is single-threaded, so each thread gets its own runtime. Keyed
//! state persists across rebuilds until [`reset`] is called.

use crate::reactive::{DirtyFlag, SharedSignalStore, Signal, SignalId, SignalStore, State};
use rustc_hash::FxHashMap;
use std::any::TypeId;
use std::cell::{Cell, RefCell};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Key for identifying a signal in the keyed state system
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Hash of the user-provided key
    key_hash: u64,
    /// Type ID of the signal value
    type_id: TypeId,
}

impl StateKey {
    /// Create a new StateKey from a hashable key and type
    pub fn new<T: 'static, K: Hash>(key: &K) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        key.hash(&mut hasher);
        Self {
            key_hash: hasher.finish(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Create a StateKey from a string key and type
    pub fn from_string<T: 'static>(key: &str) -> Self {
        Self::new::<T, _>(&key)
    }
}

/// Stores keyed signals across rebuilds
#[derive(Default)]
pub struct HookState {
    signals: FxHashMap<StateKey, SignalId>,
}

impl HookState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an existing signal by key
    pub fn get(&self, key: &StateKey) -> Option<SignalId> {
        self.signals.get(key).copied()
    }

    /// Store a signal with the given key
    pub fn insert(&mut self, key: StateKey, signal_id: SignalId) {
        self.signals.insert(key, signal_id);
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Per-thread component runtime
pub struct Runtime {
    store: SharedSignalStore,
    hooks: RefCell<HookState>,
    dirty_flag: DirtyFlag,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(SignalStore::new())),
            hooks: RefCell::new(HookState::new()),
            dirty_flag: Rc::new(Cell::new(false)),
        }
    }

    /// Get or create the state stored under `key`
    ///
    /// `init` only runs the first time a key is seen for a given value type.
    pub fn use_state_keyed<T, F>(&self, key: &str, init: F) -> State<T>
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        let state_key = StateKey::from_string::<T>(key);

        let existing = self.hooks.borrow().get(&state_key).filter(|id| {
            self.store
                .try_borrow()
                .map(|store| store.holds::<T>(*id))
                .unwrap_or(false)
        });

        let signal = match existing {
            Some(id) => Signal::from_id(id),
            None => {
                let signal = self.create_signal(init());
                self.hooks.borrow_mut().insert(state_key, signal.id());
                tracing::trace!("use_state_keyed: created state for {}", key);
                signal
            }
        };

        State::new(signal, self.store.clone(), self.dirty_flag.clone())
    }

    /// Whether a rebuild was requested since the last call; clears the flag
    pub fn take_rebuild_request(&self) -> bool {
        self.dirty_flag.replace(false)
    }

    /// Number of keyed states currently held
    pub fn keyed_state_count(&self) -> usize {
        self.hooks.borrow().len()
    }

    fn create_signal<T: 'static>(&self, initial: T) -> Signal<T> {
        // Signals are only created during builds, outside any State access
        self.store.borrow_mut().create(initial)
    }
}

thread_local! {
    static RUNTIME: RefCell<Rc<Runtime>> = RefCell::new(Rc::new(Runtime::new()));
}

/// Get the runtime for the current thread
pub fn current() -> Rc<Runtime> {
    RUNTIME.with(|rt| rt.borrow().clone())
}

/// Replace the current thread's runtime with a fresh one, dropping all keyed
/// state
pub fn reset() {
    RUNTIME.with(|rt| *rt.borrow_mut() = Rc::new(Runtime::new()));
}

/// Get or create keyed state in the current thread's runtime
pub fn use_state_keyed<T, F>(key: &str, init: F) -> State<T>
where
    T: Clone + 'static,
    F: FnOnce() -> T,
{
    current().use_state_keyed(key, init)
}

/// Consume the current thread's rebuild request
pub fn take_rebuild_request() -> bool {
    current().take_rebuild_request()
}
