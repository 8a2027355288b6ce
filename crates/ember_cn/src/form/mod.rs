//! FormBuilder - declarative forms with validation
//!
//! A form is an ordered list of [`FieldDescriptor`]s. Each descriptor renders
//! one labelled control chosen by its [`FieldKind`]; values, errors and touch
//! state live in a [`FormState`] stored under the form's instance key.
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::form()
//!     .field(FieldDescriptor::text("name", "Name").required())
//!     .field(
//!         FieldDescriptor::email("email", "Email").validate_on_blur(|v| {
//!             let ok = v.as_text().is_some_and(|t| t.contains('@'));
//!             (!ok).then(|| "Enter a valid email".to_string())
//!         }),
//!     )
//!     .field(FieldDescriptor::number("age", "Age").min(18.0))
//!     .defaults_json(r#"{"name": "Ada"}"#)?
//!     .on_submit(|values| println!("{:?}", values))
//! ```
//!
//! Submission is blocked while any field has an error. Reset restores the
//! default values and clears errors.

mod field;
mod state;

pub use field::{CustomRender, FieldDescriptor, FieldKind, FieldValue, Validator};
pub use state::{FormError, FormState, NOT_A_NUMBER};

use std::cell::OnceCell;
use std::rc::Rc;

use ember_core::{use_state_keyed, State};
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::{Theme, ThemeState};
use indexmap::IndexMap;

use crate::components::button::{button, ButtonType, ButtonVariant};
use crate::components::label::label;
use crate::components::select::option_elements;

/// Callback receiving the submitted values
pub type SubmitFn = Rc<dyn Fn(&IndexMap<String, FieldValue>)>;

/// Applies mutations to the keyed form state
#[derive(Clone)]
struct FormDriver {
    state: State<FormState>,
}

impl FormDriver {
    fn apply(&self, f: impl FnOnce(&mut FormState) -> Result<(), FormError>) {
        let mut next = self.state.get();
        match f(&mut next) {
            Ok(()) => self.state.set_rebuild(next),
            Err(err) => tracing::warn!("form: {}", err),
        }
    }
}

/// Handle a field control uses to report edits
#[derive(Clone)]
pub struct FieldHandle {
    name: String,
    driver: FormDriver,
}

impl FieldHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_value(&self, value: FieldValue) {
        self.driver.apply(|s| s.set_value(&self.name, value));
    }

    /// Set the value from control text
    pub fn set_input(&self, raw: &str) {
        self.driver.apply(|s| s.set_input(&self.name, raw));
    }

    pub fn blur(&self) {
        self.driver.apply(|s| s.blur(&self.name));
    }
}

/// Everything a custom field renderer needs
pub struct FieldRenderContext {
    /// Id the control should carry so the label points at it
    pub id: String,
    pub name: String,
    pub value: FieldValue,
    /// Text to show, including unparsed input
    pub display: String,
    pub invalid: bool,
    /// Space separated ids for `aria-describedby`
    pub described_by: Option<String>,
    pub required: bool,
    pub disabled: bool,
    handle: FieldHandle,
}

impl FieldRenderContext {
    /// Owned handle for use inside event closures
    pub fn handle(&self) -> FieldHandle {
        self.handle.clone()
    }
}

/// Rendered form
pub struct Form {
    inner: Div,
}

impl ElementBuilder for Form {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Builder for forms
pub struct FormBuilder {
    key: InstanceKey,
    id: Option<String>,
    fields: Vec<FieldDescriptor>,
    defaults: IndexMap<String, FieldValue>,
    submit_label: String,
    reset_label: Option<String>,
    on_submit: Option<SubmitFn>,
    built: OnceCell<Form>,
}

impl FormBuilder {
    #[track_caller]
    pub fn new() -> Self {
        Self::with_instance_key(InstanceKey::new("form"))
    }

    /// Create a form whose state is stored under `key`
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::with_instance_key(InstanceKey::explicit(key))
    }

    fn with_instance_key(key: InstanceKey) -> Self {
        Self {
            key,
            id: None,
            fields: Vec::new(),
            defaults: IndexMap::new(),
            submit_label: "Submit".to_string(),
            reset_label: Some("Reset".to_string()),
            on_submit: None,
            built: OnceCell::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a field; a repeated name is ignored
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        if self.fields.iter().any(|f| f.name == field.name) {
            tracing::warn!("form: ignoring duplicate field {}", field.name);
            return self;
        }
        self.fields.push(field);
        self
    }

    pub fn fields(self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        fields.into_iter().fold(self, |form, f| form.field(f))
    }

    pub fn default_value(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.defaults.insert(name.into(), value);
        self
    }

    pub fn defaults(mut self, defaults: impl IntoIterator<Item = (String, FieldValue)>) -> Self {
        self.defaults.extend(defaults);
        self
    }

    /// Load defaults from a JSON object
    pub fn defaults_json(self, json: &str) -> Result<Self, FormError> {
        let defaults = FieldValue::map_from_json(json)?;
        Ok(self.defaults(defaults))
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn reset_label(mut self, label: impl Into<String>) -> Self {
        self.reset_label = Some(label.into());
        self
    }

    /// Render without a reset button
    pub fn no_reset(mut self) -> Self {
        self.reset_label = None;
        self
    }

    /// Called with the values when a submit passes validation
    pub fn on_submit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&IndexMap<String, FieldValue>) + 'static,
    {
        self.on_submit = Some(Rc::new(callback));
        self
    }

    /// The initial state this builder describes, checking defaults
    pub fn try_state(&self) -> Result<FormState, FormError> {
        FormState::new(self.fields.clone())?.with_defaults(self.defaults.clone())
    }

    fn initial_state(&self) -> FormState {
        match self.try_state() {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("form: {}; falling back to empty defaults", err);
                FormState::new(self.fields.clone()).unwrap_or_default()
            }
        }
    }

    fn state(&self) -> State<FormState> {
        use_state_keyed(&self.key.derive("form"), || self.initial_state())
    }

    /// Snapshot of the keyed state
    pub fn current_state(&self) -> FormState {
        self.state().get()
    }

    fn get_or_build(&self) -> &Form {
        self.built.get_or_init(|| self.build_component())
    }

    pub fn build_component(&self) -> Form {
        let theme = ThemeState::get().theme();
        let id = self.id.clone().unwrap_or_else(|| self.key.dom_id());
        let driver = FormDriver {
            state: self.state(),
        };
        let current = driver.state.get();

        let mut form = element("form")
            .id(&id)
            .class(theme.block("form"))
            .class_if(!current.is_valid(), theme.modifier("form", "invalid"))
            .flag("novalidate", true)
            .data("submit-count", current.submit_count().to_string());

        for field in current.fields() {
            form = form.child(render_field(&theme, &id, field, &current, &driver));
        }

        let actions = div()
            .class(theme.element("form", "actions"))
            .child(
                button(self.submit_label.clone())
                    .id(format!("{}-submit", id))
                    .button_type(ButtonType::Submit),
            )
            .child_opt(self.reset_label.clone().map(|text| {
                button(text)
                    .id(format!("{}-reset", id))
                    .button_type(ButtonType::Reset)
                    .variant(ButtonVariant::Outline)
            }));
        form = form.child(actions);

        let submit_driver = driver.clone();
        let on_submit = self.on_submit.clone();
        form = form.on_submit(move |e| {
            e.prevent_default();
            let mut next = submit_driver.state.get();
            let result = next.submit();
            submit_driver.state.set_rebuild(next);
            match result {
                Ok(values) => {
                    if let Some(cb) = &on_submit {
                        cb(&values);
                    }
                }
                Err(err) => tracing::debug!("form: {}", err),
            }
        });

        form = form.on_reset(move |e| {
            e.prevent_default();
            driver.apply(|s| {
                s.reset();
                Ok(())
            });
        });

        Form { inner: form }
    }
}

impl Default for FormBuilder {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder for FormBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.get_or_build().build(tree)
    }
}

/// Create a form builder
#[track_caller]
pub fn form() -> FormBuilder {
    FormBuilder::new()
}

fn render_field(
    theme: &Theme,
    form_id: &str,
    field: &FieldDescriptor,
    state: &FormState,
    driver: &FormDriver,
) -> Div {
    let control_id = format!("{}-{}", form_id, field.name);
    let description_id = format!("{}-description", control_id);
    let error_id = format!("{}-error", control_id);
    let error = state.error(&field.name);
    let invalid = error.is_some();

    let described_by: Vec<&str> = [
        field.description.as_ref().map(|_| description_id.as_str()),
        error.map(|_| error_id.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();
    let described_by = (!described_by.is_empty()).then(|| described_by.join(" "));

    let handle = FieldHandle {
        name: field.name.clone(),
        driver: driver.clone(),
    };
    let value = state
        .value(&field.name)
        .cloned()
        .unwrap_or_else(|| field.kind.initial_value());
    let display = state.display_text(&field.name);

    let control = match &field.kind {
        FieldKind::Custom(render) => render(&FieldRenderContext {
            id: control_id.clone(),
            name: field.name.clone(),
            value,
            display,
            invalid,
            described_by: described_by.clone(),
            required: field.required,
            disabled: field.disabled,
            handle,
        }),
        kind => {
            let control = native_control(theme, kind, field, &value, display, invalid)
                .id(&control_id)
                .attr("name", field.name.clone())
                .flag("required", field.required)
                .disabled(field.disabled)
                .aria_bool("invalid", invalid)
                .attr_opt("aria-describedby", described_by.clone());
            if field.disabled {
                control
            } else {
                attach_handlers(control, kind, handle)
            }
        }
    };

    let mut field_label = label(field.label.clone()).for_id(&control_id);
    if field.required {
        field_label = field_label.required();
    }
    field_label = field_label.disabled(field.disabled);

    let mut wrapper = div()
        .class(theme.element("form", "field"))
        .class_if(invalid, theme.modifier("form-field", "invalid"))
        .data("field", field.name.clone());

    wrapper = if matches!(field.kind, FieldKind::Checkbox) {
        wrapper
            .class(theme.modifier("form-field", "inline"))
            .child(control)
            .child(field_label)
    } else {
        wrapper.child(field_label).child(control)
    };

    if let Some(description) = &field.description {
        wrapper = wrapper.child(
            paragraph()
                .id(&description_id)
                .class(theme.element("form", "description"))
                .text(description.clone()),
        );
    }
    if let Some(message) = error {
        wrapper = wrapper.child(
            paragraph()
                .id(&error_id)
                .role("alert")
                .class(theme.element("form", "message"))
                .text(message.to_string()),
        );
    }

    wrapper
}

/// Control element for a built-in field kind, without handlers
fn native_control(
    theme: &Theme,
    kind: &FieldKind,
    field: &FieldDescriptor,
    value: &FieldValue,
    display: String,
    invalid: bool,
) -> Div {
    let text_like = |block: &str, el: Div| {
        el.class(theme.block(block))
            .class_if(invalid, theme.modifier(block, "invalid"))
            .class(theme.token(theme.radius()))
            .attr_opt("placeholder", field.placeholder.clone())
    };

    match kind {
        FieldKind::Text { input_type } => text_like(
            "input",
            input_element()
                .attr("type", input_type.as_str())
                .attr("value", display),
        ),
        FieldKind::Number { min, max, step } => text_like(
            "input",
            input_element()
                .attr("type", "number")
                .attr("inputmode", "decimal")
                .attr("value", display)
                .attr_opt("min", min.map(|v| v.to_string()))
                .attr_opt("max", max.map(|v| v.to_string()))
                .attr_opt("step", step.map(|v| v.to_string())),
        ),
        FieldKind::Textarea { rows } => text_like(
            "textarea",
            element("textarea")
                .attr("rows", rows.to_string())
                .text(display),
        ),
        FieldKind::Select { options } => element("select")
            .class(theme.block("select"))
            .class_if(invalid, theme.modifier("select", "invalid"))
            .class(theme.token(theme.radius()))
            .children(option_elements(
                options,
                &display,
                field.placeholder.as_deref(),
            )),
        FieldKind::Checkbox => input_element()
            .attr("type", "checkbox")
            .class(theme.block("checkbox"))
            .flag("checked", value.as_bool().unwrap_or(false)),
        FieldKind::Custom(_) => div(),
    }
}

fn attach_handlers(control: Div, kind: &FieldKind, handle: FieldHandle) -> Div {
    let on_blur = handle.clone();
    let control = control.on_blur(move |_| on_blur.blur());

    match kind {
        FieldKind::Checkbox => control.on_change(move |e| {
            let checked = e
                .checked
                .or_else(|| e.value.as_deref().map(|v| matches!(v, "true" | "on" | "1")));
            if let Some(checked) = checked {
                handle.set_value(FieldValue::Bool(checked));
            }
        }),
        FieldKind::Select { .. } => control.on_change(move |e| {
            if let Some(value) = &e.value {
                handle.set_input(value);
            }
        }),
        FieldKind::Text { .. }
        | FieldKind::Number { .. }
        | FieldKind::Textarea { .. }
        | FieldKind::Custom(_) => control.on_input(move |e| {
            if let Some(value) = &e.value {
                handle.set_input(value);
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::components::select::SelectOption;

    fn profile(key: &str) -> FormBuilder {
        FormBuilder::with_key(key)
            .field(
                FieldDescriptor::text("name", "Name")
                    .required()
                    .description("Your full name"),
            )
            .field(FieldDescriptor::number("age", "Age").min(18.0))
            .field(FieldDescriptor::checkbox("terms", "Accept terms"))
            .field(FieldDescriptor::select(
                "plan",
                "Plan",
                [SelectOption::new("free", "Free"), SelectOption::new("pro", "Pro")],
            ))
            .field(FieldDescriptor::textarea("bio", "Bio").rows(4))
    }

    #[test]
    fn test_renders_one_control_per_field() {
        let tree = DomTree::from_element(&profile("profile"));
        let root = tree.root().unwrap();
        assert_eq!(tree.tag(root), Some("form"));
        assert!(tree.has_attr(root, "novalidate"));

        assert_eq!(tree.find_by_class("ember-form__field").len(), 5);

        let name = tree.find_by_id("profile-name").unwrap();
        assert_eq!(tree.attr(name, "type"), Some("text"));
        assert_eq!(tree.attr(name, "aria-invalid"), Some("false"));
        assert_eq!(
            tree.attr(name, "aria-describedby"),
            Some("profile-name-description")
        );
        assert!(tree.has_attr(name, "required"));

        let age = tree.find_by_id("profile-age").unwrap();
        assert_eq!(tree.attr(age, "min"), Some("18"));

        let bio = tree.find_by_id("profile-bio").unwrap();
        assert_eq!(tree.tag(bio), Some("textarea"));
        assert_eq!(tree.attr(bio, "rows"), Some("4"));

        let terms = tree.find_by_id("profile-terms").unwrap();
        assert_eq!(tree.attr(terms, "type"), Some("checkbox"));

        let labels = tree.find_by_tag("label");
        assert_eq!(tree.attr(labels[0], "for"), Some("profile-name"));
    }

    #[test]
    fn test_input_error_rendered_with_alert() {
        let form = || profile("profile-err");
        let tree = DomTree::from_element(&form());
        tree.dispatch_to_id("profile-err-age", EventContext::input("ten"))
            .unwrap();

        let tree = DomTree::from_element(&form());
        let age = tree.find_by_id("profile-err-age").unwrap();
        assert_eq!(tree.attr(age, "aria-invalid"), Some("true"));
        assert_eq!(tree.attr(age, "value"), Some("ten"));
        assert_eq!(
            tree.attr(age, "aria-describedby"),
            Some("profile-err-age-error")
        );

        let message = tree.find_by_id("profile-err-age-error").unwrap();
        assert_eq!(tree.attr(message, "role"), Some("alert"));
        assert_eq!(tree.text_content(message), NOT_A_NUMBER);
    }

    #[test]
    fn test_submit_and_reset() {
        let submitted = Rc::new(RefCell::new(None));
        let sink = submitted.clone();
        let form = move || {
            let sink = sink.clone();
            profile("profile-submit")
                .default_value("plan", FieldValue::text("pro"))
                .on_submit(move |values| *sink.borrow_mut() = Some(values.clone()))
        };

        let tree = DomTree::from_element(&form());
        let outcome = tree
            .dispatch_to_id("profile-submit", EventContext::submit())
            .unwrap();
        assert!(outcome.default_prevented);
        assert!(submitted.borrow().is_none());

        let tree = DomTree::from_element(&form());
        assert_eq!(tree.find_by_role("alert").len(), 1);
        tree.dispatch_to_id("profile-submit-name", EventContext::input("Ada"))
            .unwrap();
        tree.dispatch_to_id("profile-submit-terms", EventContext::toggle(true))
            .unwrap();

        let tree = DomTree::from_element(&form());
        tree.dispatch_to_id("profile-submit", EventContext::submit())
            .unwrap();
        let values = submitted.borrow().clone().unwrap();
        assert_eq!(values["name"], FieldValue::text("Ada"));
        assert_eq!(values["terms"], FieldValue::Bool(true));
        assert_eq!(values["plan"], FieldValue::text("pro"));

        tree.dispatch_to_id("profile-submit", EventContext::reset())
            .unwrap();
        let state = form().current_state();
        assert_eq!(state.value("name"), Some(&FieldValue::text("")));
        assert_eq!(state.value("plan"), Some(&FieldValue::text("pro")));
        assert_eq!(state.submit_count(), 0);
    }

    #[test]
    fn test_custom_field_uses_handle() {
        let form = || {
            FormBuilder::with_key("custom-form").field(FieldDescriptor::custom(
                "color",
                "Color",
                |ctx| {
                    let handle = ctx.handle();
                    button_element()
                        .id(&ctx.id)
                        .text(ctx.display.clone())
                        .on_click(move |_| handle.set_value(FieldValue::text("red")))
                },
            ))
        };

        let tree = DomTree::from_element(&form());
        tree.dispatch_to_id("custom-form-color", EventContext::click())
            .unwrap();
        let tree = DomTree::from_element(&form());
        let control = tree.find_by_id("custom-form-color").unwrap();
        assert_eq!(tree.text_content(control), "red");
    }

    #[test]
    fn test_bad_defaults_fall_back() {
        let form = FormBuilder::with_key("bad-defaults")
            .field(FieldDescriptor::checkbox("ok", "Ok"))
            .default_value("ok", FieldValue::text("yes"));
        assert!(form.try_state().is_err());
        assert_eq!(
            form.current_state().value("ok"),
            Some(&FieldValue::Bool(false))
        );
    }
}
