//! Form values, validation and submission
//!
//! `FormState` is a plain value: every operation takes `&mut self`, so the
//! same state works inside a rendered form and in a unit test.

use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use super::field::{FieldDescriptor, FieldKind, FieldValue};

/// Form API errors
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` expects a {expected} value, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("duplicate field `{0}`")]
    DuplicateField(String),

    #[error("invalid default values: {0}")]
    InvalidDefaults(#[from] serde_json::Error),

    /// Submission blocked; pairs of field name and message
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<(String, String)>),
}

pub const NOT_A_NUMBER: &str = "Must be a number";

/// State of one form instance
#[derive(Clone, Default)]
pub struct FormState {
    fields: Rc<[FieldDescriptor]>,
    defaults: IndexMap<String, FieldValue>,
    values: IndexMap<String, FieldValue>,
    /// Text typed into number fields that did not parse
    raw_input: IndexMap<String, String>,
    errors: IndexMap<String, String>,
    touched: IndexSet<String>,
    submit_count: u32,
}

impl FormState {
    /// Create a state with every field at its kind's initial value
    pub fn new(fields: impl IntoIterator<Item = FieldDescriptor>) -> Result<Self, FormError> {
        let fields: Vec<FieldDescriptor> = fields.into_iter().collect();
        let mut defaults = IndexMap::with_capacity(fields.len());
        for field in &fields {
            if defaults
                .insert(field.name.clone(), field.kind.initial_value())
                .is_some()
            {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }

        Ok(Self {
            fields: fields.into(),
            values: defaults.clone(),
            defaults,
            ..Default::default()
        })
    }

    /// Replace defaults (and current values) for the named fields
    ///
    /// Nothing changes if any entry names an unknown field or has the wrong
    /// value kind.
    pub fn with_defaults(
        mut self,
        defaults: impl IntoIterator<Item = (String, FieldValue)>,
    ) -> Result<Self, FormError> {
        let defaults: Vec<(String, FieldValue)> = defaults.into_iter().collect();
        for (name, value) in &defaults {
            self.check_kind(name, value)?;
        }
        for (name, value) in defaults {
            self.values.insert(name.clone(), value.clone());
            self.defaults.insert(name, value);
        }
        Ok(self)
    }

    /// [`with_defaults`](Self::with_defaults) from a JSON object
    pub fn with_defaults_json(self, json: &str) -> Result<Self, FormError> {
        let defaults = FieldValue::map_from_json(json)?;
        self.with_defaults(defaults)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn values(&self) -> &IndexMap<String, FieldValue> {
        &self.values
    }

    pub fn defaults(&self) -> &IndexMap<String, FieldValue> {
        &self.defaults
    }

    /// Text a control should display: the raw input if it did not parse
    pub fn display_text(&self, name: &str) -> String {
        match self.raw_input.get(name) {
            Some(raw) => raw.clone(),
            None => self
                .values
                .get(name)
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Whether any value differs from its default
    pub fn is_dirty(&self) -> bool {
        !self.raw_input.is_empty() || self.values != self.defaults
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Set a typed value and run the change validators
    pub fn set_value(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        self.check_kind(name, &value)?;
        self.raw_input.shift_remove(name);
        self.values.insert(name.to_string(), value);
        self.revalidate(name);
        Ok(())
    }

    /// Set a value from control text, parsing it for the field's kind
    pub fn set_input(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let kind = self.kind_of(name)?;
        let value = match kind {
            FieldKind::Number { .. } => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    FieldValue::Number(None)
                } else {
                    match trimmed.parse::<f64>() {
                        Ok(n) if n.is_finite() => FieldValue::Number(Some(n)),
                        _ => {
                            self.raw_input.insert(name.to_string(), raw.to_string());
                            self.values
                                .insert(name.to_string(), FieldValue::Number(None));
                            self.revalidate(name);
                            return Ok(());
                        }
                    }
                }
            }
            FieldKind::Checkbox => FieldValue::Bool(matches!(raw, "true" | "on" | "1")),
            FieldKind::Text { .. }
            | FieldKind::Select { .. }
            | FieldKind::Textarea { .. }
            | FieldKind::Custom(_) => FieldValue::Text(raw.to_string()),
        };
        self.set_value(name, value)
    }

    /// Mark the field touched and run its blur validator
    pub fn blur(&mut self, name: &str) -> Result<(), FormError> {
        self.kind_of(name)?;
        self.touched.insert(name.to_string());
        self.revalidate(name);
        Ok(())
    }

    /// Touch and validate every field; true when no errors remain
    pub fn validate_all(&mut self) -> bool {
        let names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
        for name in &names {
            self.touched.insert(name.clone());
            self.revalidate(name);
        }
        self.errors.is_empty()
    }

    /// Validate everything and hand back the values, or the errors
    pub fn submit(&mut self) -> Result<IndexMap<String, FieldValue>, FormError> {
        self.submit_count += 1;
        if self.validate_all() {
            tracing::debug!("form submitted ({} fields)", self.values.len());
            Ok(self.values.clone())
        } else {
            tracing::debug!("form submit blocked by {} error(s)", self.errors.len());
            Err(FormError::Invalid(
                self.fields
                    .iter()
                    .filter_map(|f| {
                        let message = self.errors.get(&f.name)?;
                        Some((f.name.clone(), message.clone()))
                    })
                    .collect(),
            ))
        }
    }

    /// Restore defaults and forget errors, touches and submissions
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.raw_input.clear();
        self.errors.clear();
        self.touched.clear();
        self.submit_count = 0;
    }

    /// Current values as a JSON object in field order
    pub fn values_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }

    fn kind_of(&self, name: &str) -> Result<FieldKind, FormError> {
        self.field(name)
            .map(|f| f.kind.clone())
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn check_kind(&self, name: &str, value: &FieldValue) -> Result<(), FormError> {
        let field = self
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        match field.kind.expected() {
            Some(expected) if expected != value.kind_name() => Err(FormError::TypeMismatch {
                field: name.to_string(),
                expected,
                found: value.kind_name(),
            }),
            _ => Ok(()),
        }
    }

    /// Error for `name` given its current value, first failing check wins
    fn check_field(&self, name: &str) -> Option<String> {
        let field = self.field(name)?;
        if self.raw_input.contains_key(name) {
            return Some(NOT_A_NUMBER.to_string());
        }
        let value = self.values.get(name)?;

        if field.required && value.is_blank() {
            return Some(format!("{} is required", field.label));
        }

        if let (FieldKind::Number { min, max, .. }, Some(n)) = (&field.kind, value.as_number()) {
            if let Some(min) = min.filter(|m| n < *m) {
                return Some(format!("Must be at least {}", min));
            }
            if let Some(max) = max.filter(|m| n > *m) {
                return Some(format!("Must be at most {}", max));
            }
        }

        if let Some(message) = field.on_change.as_ref().and_then(|v| v(value)) {
            return Some(message);
        }

        if self.touched.contains(name) {
            if let Some(message) = field.on_blur.as_ref().and_then(|v| v(value)) {
                return Some(message);
            }
        }

        None
    }

    fn revalidate(&mut self, name: &str) {
        match self.check_field(name) {
            Some(message) => {
                tracing::trace!("field {} invalid: {}", name, message);
                self.errors.insert(name.to_string(), message);
            }
            None => {
                self.errors.shift_remove(name);
            }
        }
    }
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("submit_count", &self.submit_count)
            .finish_non_exhaustive()
    }
}
