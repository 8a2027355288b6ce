//! Stable unique keys for component instances
//!
//! A component's internal state lives in the runtime under its instance key,
//! so the key has to survive rebuilds. `#[track_caller]` alone would give
//! every instance created in a loop the same key; a per-instance UUID breaks
//! the tie. Pass an explicit key wherever the state must be found again
//! after the builder is recreated.
//!
//! ```ignore
//! // Generated: unique per builder
//! let key = InstanceKey::new("combobox");
//!
//! // Explicit: identical across rebuilds
//! let key = InstanceKey::explicit("country-picker");
//! ```

use std::cell::OnceCell;

use uuid::Uuid;

/// Key identifying one component instance
///
/// Generated keys look like `{prefix}:{file}:{line}:{col}:{uuid}` and are
/// created lazily on first access.
pub struct InstanceKey {
    key: OnceCell<String>,
    uid: OnceCell<String>,
    prefix: &'static str,
    file: &'static str,
    line: u32,
    column: u32,
}

impl InstanceKey {
    #[track_caller]
    pub fn new(prefix: &'static str) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            key: OnceCell::new(),
            uid: OnceCell::new(),
            prefix,
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }

    /// Deterministic key supplied by the caller
    pub fn explicit(key: impl Into<String>) -> Self {
        let instance = Self {
            key: OnceCell::new(),
            uid: OnceCell::new(),
            prefix: "",
            file: "",
            line: 0,
            column: 0,
        };
        let _ = instance.key.set(key.into());
        instance
    }

    pub fn is_explicit(&self) -> bool {
        self.file.is_empty()
    }

    /// Get or generate the key
    pub fn get(&self) -> &str {
        self.key.get_or_init(|| {
            format!(
                "{}:{}:{}:{}:{}",
                self.prefix,
                self.file,
                self.line,
                self.column,
                self.uid()
            )
        })
    }

    fn uid(&self) -> &str {
        self.uid
            .get_or_init(|| Uuid::new_v4().as_simple().to_string())
    }

    /// Derived key for a piece of sub-state, e.g. `"{key}_open"`
    pub fn derive(&self, suffix: &str) -> String {
        format!("{}_{}", self.get(), suffix)
    }

    /// Value usable as an HTML `id` attribute
    ///
    /// Explicit keys are kept readable with anything outside `[A-Za-z0-9_-]`
    /// replaced by `-`. Generated keys become `{prefix}-{first 8 uuid chars}`.
    pub fn dom_id(&self) -> String {
        if self.is_explicit() {
            self.get()
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                        c
                    } else {
                        '-'
                    }
                })
                .collect()
        } else {
            // Make sure `get()` and `dom_id()` agree on the uuid.
            let _ = self.get();
            let uid = self.uid();
            format!("{}-{}", self.prefix, &uid[..8.min(uid.len())])
        }
    }

    /// Source location the key was created at
    pub fn location(&self) -> (&'static str, u32, u32) {
        (self.file, self.line, self.column)
    }
}

impl std::fmt::Debug for InstanceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InstanceKey({})", self.get())
    }
}

impl Clone for InstanceKey {
    fn clone(&self) -> Self {
        // Resolve first so the clone shares the same uuid.
        let _ = self.get();
        Self {
            key: self.key.clone(),
            uid: self.uid.clone(),
            prefix: self.prefix,
            file: self.file,
            line: self.line,
            column: self.column,
        }
    }
}
