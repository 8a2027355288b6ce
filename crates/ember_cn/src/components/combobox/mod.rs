//! Combobox component - searchable dropdown selection
//!
//! A text input that filters a list of options, with keyboard navigation and
//! an optional "create" affordance for values not in the list. Interaction
//! state lives in the runtime under the instance key so it survives rebuilds.
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! // Uncontrolled, starting on Canada
//! cn::combobox()
//!     .label("Country")
//!     .placeholder("Search countries...")
//!     .option("us", "United States")
//!     .option("uk", "United Kingdom")
//!     .option("ca", "Canada")
//!     .default_value("ca")
//!     .on_value_change(|value| println!("Selected: {}", value))
//!
//! // Bound to caller state
//! let country = use_state_keyed("country", String::new);
//! cn::combobox().bind(&country).allow_create(true)
//! ```

mod state;

pub use state::{
    filter_options, label_for, ComboboxInput, ComboboxOption, ComboboxState, Commit, Transition,
};

use std::cell::OnceCell;
use std::rc::Rc;

use ember_core::{use_state_keyed, State};
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::{ShadowToken, ThemeState};

/// Combobox size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComboboxSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ComboboxSize {
    fn modifier(&self) -> &'static str {
        match self {
            ComboboxSize::Small => "sm",
            ComboboxSize::Medium => "md",
            ComboboxSize::Large => "lg",
        }
    }
}

/// Where the committed value comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComboboxValue {
    /// The caller owns the value and passes it in on every build. An empty
    /// string means nothing is selected.
    Controlled(String),
    /// The component owns the value, starting from `default`
    Uncontrolled { default: Option<String> },
}

impl Default for ComboboxValue {
    fn default() -> Self {
        ComboboxValue::Uncontrolled { default: None }
    }
}

/// Callback invoked once per commit with the committed value
pub type ValueChangeFn = Rc<dyn Fn(&str)>;

const DEFAULT_EMPTY_TEXT: &str = "No results found";

/// Internal configuration for building a Combobox
#[derive(Clone, Default)]
struct ComboboxConfig {
    id: Option<String>,
    options: Vec<ComboboxOption>,
    value: ComboboxValue,
    bound: Option<State<String>>,
    on_value_change: Option<ValueChangeFn>,
    placeholder: Option<String>,
    label: Option<String>,
    empty_text: Option<String>,
    size: ComboboxSize,
    disabled: bool,
    allow_create: bool,
    classes: Vec<String>,
}

/// Feeds inputs into the keyed state and fires the commit side effects
#[derive(Clone)]
struct ComboboxDriver {
    state: State<ComboboxState>,
    options: Rc<[ComboboxOption]>,
    allow_create: bool,
    bound: Option<State<String>>,
    on_value_change: Option<ValueChangeFn>,
}

impl ComboboxDriver {
    fn send(&self, input: ComboboxInput) -> Transition {
        let before = self.state.get();
        let mut next = before.clone();
        let transition = next.handle(input, &self.options, self.allow_create);

        if next != before {
            self.state.set_rebuild(next);
        }

        // Callbacks run after the state write so they observe the new value.
        if let Some(commit) = &transition.commit {
            if let Some(bound) = &self.bound {
                bound.set_rebuild(commit.value.clone());
            }
            if let Some(callback) = &self.on_value_change {
                callback(&commit.value);
            }
        }

        transition
    }
}

/// Combobox component
pub struct Combobox {
    inner: Div,
}

impl Combobox {
    fn from_config(key: &InstanceKey, config: ComboboxConfig) -> Self {
        let theme = ThemeState::get().theme();
        let id = config.id.clone().unwrap_or_else(|| key.dom_id());
        let input_id = format!("{}-input", id);
        let listbox_id = format!("{}-listbox", id);
        let label_id = format!("{}-label", id);

        let options: Rc<[ComboboxOption]> = config.options.clone().into();

        let controlled = match &config.value {
            ComboboxValue::Controlled(value) => Some(value.clone()),
            ComboboxValue::Uncontrolled { .. } => None,
        };
        let state: State<ComboboxState> = use_state_keyed(&key.derive("state"), || {
            let initial = match &config.value {
                ComboboxValue::Controlled(value) => Some(value.clone()),
                ComboboxValue::Uncontrolled { default } => default.clone(),
            };
            ComboboxState::with_value(initial.filter(|v| !v.is_empty()), &options)
        });

        let mut current = state.get();
        if let Some(value) = &controlled {
            let value = Some(value.as_str()).filter(|v| !v.is_empty());
            if current.sync_value(value, &options) {
                state.set(current.clone());
            }
        }

        let visible = if current.is_open {
            current.visible(&options)
        } else {
            Vec::new()
        };
        let highlighted = current.highlighted_option(&options);

        let driver = ComboboxDriver {
            state,
            options: options.clone(),
            allow_create: config.allow_create,
            bound: config.bound.clone(),
            on_value_change: config.on_value_change.clone(),
        };

        // Input
        let mut input = input_element()
            .id(&input_id)
            .attr("type", "text")
            .role("combobox")
            .aria_bool("expanded", current.is_open)
            .aria("autocomplete", "list")
            .aria("controls", &listbox_id)
            .attr("autocomplete", "off")
            .attr("value", current.search_text.clone())
            .class(theme.element("combobox", "input"))
            .attr_opt("placeholder", config.placeholder.clone())
            .attr_opt(
                "aria-activedescendant",
                highlighted.map(|i| option_id(&id, i)),
            )
            .disabled(config.disabled);
        if config.label.is_some() {
            input = input.aria("labelledby", &label_id);
        }

        // Trigger
        let mut trigger = button_element()
            .class(theme.element("combobox", "trigger"))
            .tabindex(-1)
            .aria("label", "Toggle options")
            .aria_bool("expanded", current.is_open)
            .aria("controls", &listbox_id)
            .disabled(config.disabled)
            .child(span().aria_bool("hidden", true).text("\u{25BE}"));

        if !config.disabled {
            let d = driver.clone();
            input = input.on_focus(move |_| {
                d.send(ComboboxInput::Focus);
            });
            let d = driver.clone();
            input = input.on_blur(move |_| {
                d.send(ComboboxInput::Blur);
            });
            let d = driver.clone();
            input = input.on_input(move |e| {
                if let Some(value) = &e.value {
                    d.send(ComboboxInput::Input(value.clone()));
                }
            });
            let d = driver.clone();
            input = input.on_key_down(move |e| {
                if let Some(key) = e.key {
                    if d.send(ComboboxInput::Key(key)).prevent_default {
                        e.prevent_default();
                    }
                }
            });
            let d = driver.clone();
            trigger = trigger.on_click(move |_| {
                d.send(ComboboxInput::Toggle);
            });
        }

        let control = div()
            .class(theme.element("combobox", "control"))
            .child(input)
            .child(trigger);

        let mut root = div()
            .id(&id)
            .class(theme.block("combobox"))
            .class(theme.modifier("combobox", config.size.modifier()))
            .class_if(
                config.disabled,
                theme.modifier("combobox", "disabled"),
            )
            .class_if(current.is_open, theme.modifier("combobox", "open"))
            .class(theme.token(theme.radius()))
            .classes(&config.classes)
            .data("state", if current.is_open { "open" } else { "closed" });

        if let Some(label) = &config.label {
            root = root.child(
                label_element()
                    .id(&label_id)
                    .attr("for", &input_id)
                    .class(theme.element("combobox", "label"))
                    .text(label.clone()),
            );
        }
        root = root.child(control);

        if current.is_open {
            let mut listbox = list(false)
                .id(&listbox_id)
                .role("listbox")
                .class(theme.element("combobox", "listbox"));
            if config.label.is_some() {
                listbox = listbox.aria("labelledby", &label_id);
            }

            for &index in &visible {
                let Some(opt) = options.get(index) else {
                    continue;
                };
                let selected = current.selected_value.as_deref() == Some(opt.value.as_str());
                let is_highlighted = highlighted == Some(index);

                let d = driver.clone();
                listbox = listbox.child(
                    list_item()
                        .id(option_id(&id, index))
                        .role("option")
                        .aria_bool("selected", selected)
                        .aria_bool("disabled", opt.disabled)
                        .data("value", opt.value.clone())
                        .class(theme.element("combobox", "option"))
                        .class_if(is_highlighted, theme.modifier("combobox-option", "highlighted"))
                        .class_if(selected, theme.modifier("combobox-option", "selected"))
                        .class_if(opt.disabled, theme.modifier("combobox-option", "disabled"))
                        .text(opt.label.clone())
                        .on_click(move |_| {
                            d.send(ComboboxInput::ClickOption(index));
                        }),
                );
            }

            let mut popover = div()
                .class(theme.element("combobox", "popover"))
                .class(theme.token(ShadowToken::Md))
                .child(listbox);

            if visible.is_empty() {
                let message = match current.creatable_text(config.allow_create) {
                    Some(text) => format!("Press Enter to create \"{}\"", text),
                    None => config
                        .empty_text
                        .clone()
                        .unwrap_or_else(|| DEFAULT_EMPTY_TEXT.to_string()),
                };
                popover = popover.child(
                    div()
                        .role("status")
                        .aria("live", "polite")
                        .class(theme.element("combobox", "empty"))
                        .text(message),
                );
            }

            root = root.child(popover);
        }

        Self { inner: root }
    }
}

fn option_id(id: &str, index: usize) -> String {
    format!("{}-option-{}", id, index)
}

impl ElementBuilder for Combobox {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Builder for creating Combobox components with fluent API
pub struct ComboboxBuilder {
    key: InstanceKey,
    config: ComboboxConfig,
    /// Built lazily on first access
    built: OnceCell<Combobox>,
}

impl ComboboxBuilder {
    /// Create a combobox builder keyed by its call site
    #[track_caller]
    pub fn new() -> Self {
        Self {
            key: InstanceKey::new("combobox"),
            config: ComboboxConfig::default(),
            built: OnceCell::new(),
        }
    }

    /// Create a combobox builder with an explicit key
    ///
    /// Required when the builder is recreated on every rebuild and its state
    /// must be found again. The key also becomes the element id unless
    /// [`id`](Self::id) is set.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: InstanceKey::explicit(key),
            config: ComboboxConfig::default(),
            built: OnceCell::new(),
        }
    }

    fn get_or_build(&self) -> &Combobox {
        self.built
            .get_or_init(|| Combobox::from_config(&self.key, self.config.clone()))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    /// Add an option with value and label
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.config.options.push(ComboboxOption::new(value, label));
        self
    }

    /// Add a disabled option
    pub fn option_disabled(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.config
            .options
            .push(ComboboxOption::new(value, label).disabled());
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = ComboboxOption>) -> Self {
        self.config.options.extend(options);
        self
    }

    /// Controlled value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config.value = ComboboxValue::Controlled(value.into());
        self
    }

    /// Initial value for an uncontrolled combobox
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.config.value = ComboboxValue::Uncontrolled {
            default: Some(value.into()),
        };
        self
    }

    /// Control the value through caller state, writing commits back into it
    pub fn bind(mut self, state: &State<String>) -> Self {
        self.config.value = ComboboxValue::Controlled(state.get());
        self.config.bound = Some(state.clone());
        self
    }

    pub fn on_value_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.config.on_value_change = Some(Rc::new(callback));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    /// Add a label above the combobox
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Message shown when no option matches
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.config.empty_text = Some(text.into());
        self
    }

    pub fn size(mut self, size: ComboboxSize) -> Self {
        self.config.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Let Enter commit the typed text when nothing matches
    pub fn allow_create(mut self, allow: bool) -> Self {
        self.config.allow_create = allow;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.config.classes.push(class.into());
        self
    }

    /// Snapshot of this instance's interaction state
    pub fn current_state(&self) -> ComboboxState {
        self.get_or_build();
        use_state_keyed(&self.key.derive("state"), ComboboxState::default).get()
    }
}

impl Default for ComboboxBuilder {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder for ComboboxBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.get_or_build().inner.build(tree)
    }
}

/// Create a combobox
///
/// Keyed by call site; use [`ComboboxBuilder::with_key`] when the builder
/// is recreated across rebuilds.
#[track_caller]
pub fn combobox() -> ComboboxBuilder {
    ComboboxBuilder::new()
}
