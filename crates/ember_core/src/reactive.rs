//! Signal storage behind component state
//!
//! Every piece of keyed component state lives in a type-erased slot of the
//! thread's [`SignalStore`]. Components never touch the store directly; they
//! hold a [`State<T>`] handle instead.
//!
//! ```ignore
//! use ember_core::use_state_keyed;
//!
//! let counter = use_state_keyed("counter", || 0i32);
//!
//! // Read the current value
//! let value = counter.get();
//!
//! // Write without asking for a rebuild
//! counter.set(value + 1);
//!
//! // Write and request a tree rebuild
//! counter.set_rebuild(value + 1);
//! ```

use slotmap::{new_key_type, SlotMap};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
}

/// A typed signal handle (cheap to copy)
pub struct Signal<T> {
    id: SignalId,
    _marker: PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.id).finish()
    }
}

impl<T> Signal<T> {
    pub fn id(&self) -> SignalId {
        self.id
    }

    /// Reconstruct a Signal from a raw SignalId
    ///
    /// Reads through a handle whose `T` does not match the stored value
    /// return `None`.
    pub fn from_id(id: SignalId) -> Self {
        Signal {
            id,
            _marker: PhantomData,
        }
    }
}

/// Type-erased slots holding every signal value of one runtime
#[derive(Default)]
pub struct SignalStore {
    values: SlotMap<SignalId, Box<dyn Any>>,
}

impl SignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create<T: 'static>(&mut self, initial: T) -> Signal<T> {
        Signal::from_id(self.values.insert(Box::new(initial)))
    }

    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.values
            .get(signal.id)
            .and_then(|value| value.downcast_ref::<T>().cloned())
    }

    /// Whether the slot exists and holds a value of type `T`
    pub fn holds<T: 'static>(&self, id: SignalId) -> bool {
        self.values.get(id).is_some_and(|value| value.is::<T>())
    }

    pub fn set<T: 'static>(&mut self, signal: Signal<T>, value: T) {
        match self.values.get_mut(signal.id) {
            Some(slot) => *slot = Box::new(value),
            None => tracing::warn!("set on an unknown signal {:?}", signal.id),
        }
    }

    /// Replace the value with `f(current)`; a missing or mistyped slot is left alone
    pub fn update<T: Clone + 'static>(&mut self, signal: Signal<T>, f: impl FnOnce(T) -> T) {
        if let Some(current) = self.get(signal) {
            self.set(signal, f(current));
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Signal store shared by every state handle of a runtime
pub type SharedSignalStore = Rc<RefCell<SignalStore>>;

/// Shared dirty flag for triggering tree rebuilds
pub type DirtyFlag = Rc<Cell<bool>>;

/// A bound state value with direct get/set methods
pub struct State<T> {
    signal: Signal<T>,
    store: SharedSignalStore,
    dirty_flag: DirtyFlag,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal,
            store: self.store.clone(),
            dirty_flag: self.dirty_flag.clone(),
        }
    }
}

impl<T> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("signal", &self.signal)
            .field("dirty", &self.dirty_flag.get())
            .finish()
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn new(signal: Signal<T>, store: SharedSignalStore, dirty_flag: DirtyFlag) -> Self {
        Self {
            signal,
            store,
            dirty_flag,
        }
    }

    /// Get the current value
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.try_get().unwrap_or_default()
    }

    /// Get the current value, returning None if not found
    pub fn try_get(&self) -> Option<T> {
        match self.store.try_borrow() {
            Ok(store) => store.get(self.signal),
            Err(_) => {
                tracing::warn!("State::get while the signal store is being updated");
                None
            }
        }
    }

    /// Set a new value
    ///
    /// This updates the value without requesting a tree rebuild.
    pub fn set(&self, value: T) {
        match self.store.try_borrow_mut() {
            Ok(mut store) => store.set(self.signal, value),
            Err(_) => tracing::warn!("State::set while the signal store is borrowed"),
        }
    }

    /// Set a new value AND request a tree rebuild
    pub fn set_rebuild(&self, value: T) {
        self.set(value);
        self.dirty_flag.set(true);
    }

    /// Update the value using a function
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        match self.store.try_borrow_mut() {
            Ok(mut store) => store.update(self.signal, f),
            Err(_) => tracing::warn!("State::update while the signal store is borrowed"),
        }
    }

    /// Update the value AND request a tree rebuild
    pub fn update_rebuild(&self, f: impl FnOnce(T) -> T) {
        self.update(f);
        self.dirty_flag.set(true);
    }
}
