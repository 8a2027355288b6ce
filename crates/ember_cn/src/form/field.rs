//! Field descriptors and values

use std::fmt;
use std::rc::Rc;

use ember_dom::Div;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::FieldRenderContext;
use crate::components::input::InputType;
use crate::components::select::SelectOption;

/// Value held by a form field
///
/// Deserializes from plain JSON: strings are `Text`, numbers and `null` are
/// `Number`, booleans are `Bool`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Bool(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        FieldValue::Number(Some(value))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Bool(_) => "bool",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether a required field holding this value counts as unfilled
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => n.is_none(),
            FieldValue::Bool(b) => !b,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Number(n) => n
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }

    /// Parse a JSON object of field values
    pub fn map_from_json(json: &str) -> Result<IndexMap<String, FieldValue>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(Some(n)) => write!(f, "{}", n),
            FieldValue::Number(None) => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Renders a custom field control
pub type CustomRender = Rc<dyn Fn(&FieldRenderContext) -> Div>;

/// Validator returning an error message for invalid values
pub type Validator = Rc<dyn Fn(&FieldValue) -> Option<String>>;

/// What control a field renders and which values it accepts
#[derive(Clone)]
pub enum FieldKind {
    Text { input_type: InputType },
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Checkbox,
    Select { options: Vec<SelectOption> },
    Textarea { rows: u32 },
    /// Caller-rendered control holding any value kind
    Custom(CustomRender),
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Select { .. } => "select",
            FieldKind::Textarea { .. } => "textarea",
            FieldKind::Custom(_) => "custom",
        }
    }

    /// Value a field of this kind starts with when no default is given
    pub fn initial_value(&self) -> FieldValue {
        match self {
            FieldKind::Number { .. } => FieldValue::Number(None),
            FieldKind::Checkbox => FieldValue::Bool(false),
            FieldKind::Text { .. }
            | FieldKind::Select { .. }
            | FieldKind::Textarea { .. }
            | FieldKind::Custom(_) => FieldValue::Text(String::new()),
        }
    }

    /// Value kind this field stores, `None` when any kind is accepted
    pub fn expected(&self) -> Option<&'static str> {
        match self {
            FieldKind::Custom(_) => None,
            kind => Some(kind.initial_value().kind_name()),
        }
    }

    pub fn accepts(&self, value: &FieldValue) -> bool {
        match self.expected() {
            Some(expected) => expected == value.kind_name(),
            None => true,
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text { input_type } => f
                .debug_struct("Text")
                .field("input_type", input_type)
                .finish(),
            FieldKind::Number { min, max, step } => f
                .debug_struct("Number")
                .field("min", min)
                .field("max", max)
                .field("step", step)
                .finish(),
            FieldKind::Checkbox => f.write_str("Checkbox"),
            FieldKind::Select { options } => {
                f.debug_struct("Select").field("options", options).finish()
            }
            FieldKind::Textarea { rows } => f.debug_struct("Textarea").field("rows", rows).finish(),
            FieldKind::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One field of a form
#[derive(Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub on_change: Option<Validator>,
    pub on_blur: Option<Validator>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            placeholder: None,
            description: None,
            required: false,
            disabled: false,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::input(name, label, InputType::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::input(name, label, InputType::Email)
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::input(name, label, InputType::Password)
    }

    pub fn input(name: impl Into<String>, label: impl Into<String>, input_type: InputType) -> Self {
        Self::new(name, label, FieldKind::Text { input_type })
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Number {
                min: None,
                max: None,
                step: None,
            },
        )
    }

    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Select {
                options: options.into_iter().collect(),
            },
        )
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea { rows: 3 })
    }

    pub fn custom<F>(name: impl Into<String>, label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&FieldRenderContext) -> Div + 'static,
    {
        Self::new(name, label, FieldKind::Custom(Rc::new(render)))
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Help text rendered under the control
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Lower bound for number fields
    pub fn min(mut self, value: f64) -> Self {
        match &mut self.kind {
            FieldKind::Number { min, .. } => *min = Some(value),
            other => tracing::warn!("min() ignored on {} field {}", other.name(), self.name),
        }
        self
    }

    /// Upper bound for number fields
    pub fn max(mut self, value: f64) -> Self {
        match &mut self.kind {
            FieldKind::Number { max, .. } => *max = Some(value),
            other => tracing::warn!("max() ignored on {} field {}", other.name(), self.name),
        }
        self
    }

    pub fn step(mut self, value: f64) -> Self {
        match &mut self.kind {
            FieldKind::Number { step, .. } => *step = Some(value),
            other => tracing::warn!("step() ignored on {} field {}", other.name(), self.name),
        }
        self
    }

    /// Visible rows for textarea fields
    pub fn rows(mut self, value: u32) -> Self {
        match &mut self.kind {
            FieldKind::Textarea { rows } => *rows = value.max(1),
            other => tracing::warn!("rows() ignored on {} field {}", other.name(), self.name),
        }
        self
    }

    /// Validator run on every value change
    pub fn validate_on_change<F>(mut self, validator: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + 'static,
    {
        self.on_change = Some(Rc::new(validator));
        self
    }

    /// Validator run once the field has been blurred, and on submit
    pub fn validate_on_blur<F>(mut self, validator: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + 'static,
    {
        self.on_blur = Some(Rc::new(validator));
        self
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_from_json() {
        let values =
            FieldValue::map_from_json(r#"{"name": "Ada", "age": 36, "nick": null, "ok": true}"#)
                .unwrap();

        assert_eq!(values["name"], FieldValue::text("Ada"));
        assert_eq!(values["age"], FieldValue::number(36.0));
        assert_eq!(values["nick"], FieldValue::Number(None));
        assert_eq!(values["ok"], FieldValue::Bool(true));
        assert_eq!(
            values.keys().collect::<Vec<_>>(),
            ["name", "age", "nick", "ok"]
        );
    }

    #[test]
    fn test_kind_accepts() {
        assert!(FieldKind::Checkbox.accepts(&FieldValue::Bool(true)));
        assert!(!FieldKind::Checkbox.accepts(&FieldValue::text("yes")));
        assert!(FieldDescriptor::number("n", "N")
            .kind
            .accepts(&FieldValue::Number(None)));
        assert!(FieldDescriptor::custom("c", "C", |_| ember_dom::prelude::div())
            .kind
            .accepts(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_number_builders_only_touch_numbers() {
        let field = FieldDescriptor::number("age", "Age").min(18.0).max(120.0);
        match field.kind {
            FieldKind::Number { min, max, step } => {
                assert_eq!(min, Some(18.0));
                assert_eq!(max, Some(120.0));
                assert_eq!(step, None);
            }
            other => panic!("unexpected kind {:?}", other),
        }

        let text = FieldDescriptor::text("name", "Name").min(1.0);
        assert!(matches!(text.kind, FieldKind::Text { .. }));
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::text("  ").is_blank());
        assert!(FieldValue::Number(None).is_blank());
        assert!(FieldValue::Bool(false).is_blank());
        assert!(!FieldValue::number(0.0).is_blank());
        assert_eq!(FieldValue::number(18.0).to_string(), "18");
    }
}
