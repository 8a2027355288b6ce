//! Native select bound to a `State<String>`
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! let plan = use_state_keyed("plan", || "pro".to_string());
//!
//! cn::select(&plan)
//!     .placeholder("Choose a plan")
//!     .option("free", "Free")
//!     .option("pro", "Pro")
//!     .option_disabled("team", "Team (soon)")
//! ```

use std::rc::Rc;

use ember_core::State;
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

use super::input::TextChangeFn;

/// An entry of a native select
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Render `<option>` children for `options`, marking `selected`
///
/// With a placeholder, an empty-valued first entry is rendered and selected
/// while nothing else is.
pub(crate) fn option_elements(
    options: &[SelectOption],
    selected: &str,
    placeholder: Option<&str>,
) -> Vec<Div> {
    let mut out = Vec::with_capacity(options.len() + 1);
    if let Some(placeholder) = placeholder {
        out.push(
            element("option")
                .attr("value", "")
                .flag("disabled", true)
                .flag("selected", !options.iter().any(|o| o.value == selected))
                .text(placeholder.to_string()),
        );
    }
    for opt in options {
        out.push(
            element("option")
                .attr("value", opt.value.clone())
                .flag("selected", opt.value == selected)
                .flag("disabled", opt.disabled)
                .text(opt.label.clone()),
        );
    }
    out
}

/// Native select component
pub struct Select {
    value: State<String>,
    options: Vec<SelectOption>,
    id: Option<String>,
    name: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
    required: bool,
    invalid: bool,
    on_change: Option<TextChangeFn>,
}

impl Select {
    pub fn new(value: &State<String>) -> Self {
        Self {
            value: value.clone(),
            options: Vec::new(),
            id: None,
            name: None,
            placeholder: None,
            disabled: false,
            required: false,
            invalid: false,
            on_change: None,
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    pub fn option_disabled(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label).disabled());
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_change = Some(Rc::new(callback));
        self
    }
}

impl ElementBuilder for Select {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let selected = self.value.get();

        let mut select = element("select")
            .class(theme.block("select"))
            .class_if(self.invalid, theme.modifier("select", "invalid"))
            .class(theme.token(theme.radius()))
            .attr_opt("name", self.name.clone())
            .flag("required", self.required)
            .disabled(self.disabled)
            .children(option_elements(
                &self.options,
                &selected,
                self.placeholder.as_deref(),
            ));

        if let Some(id) = &self.id {
            select = select.id(id);
        }
        if self.invalid {
            select = select.aria_bool("invalid", true);
        }

        if !self.disabled {
            let value = self.value.clone();
            let options = self.options.clone();
            let on_change = self.on_change.clone();
            select = select.on_change(move |e| {
                let Some(next) = &e.value else {
                    return;
                };
                // Values outside the list, or disabled ones, cannot be chosen
                // from a native select.
                if !options.iter().any(|o| &o.value == next && !o.disabled) {
                    tracing::warn!("select: ignoring change to unknown value {:?}", next);
                    return;
                }
                value.set_rebuild(next.clone());
                if let Some(cb) = &on_change {
                    cb(next);
                }
            });
        }

        select.build(tree)
    }
}

pub fn select(value: &State<String>) -> Select {
    Select::new(value)
}

#[cfg(test)]
mod tests {
    use ember_core::runtime;

    use super::*;

    fn plans(value: &State<String>) -> Select {
        select(value)
            .id("plan")
            .placeholder("Choose a plan")
            .option("free", "Free")
            .option("pro", "Pro")
            .option_disabled("team", "Team")
    }

    #[test]
    fn test_selected_option_marked() {
        let value = runtime::use_state_keyed("plan-a", || "pro".to_string());
        let tree = DomTree::from_element(&plans(&value));
        let options = tree.find_by_tag("option");

        assert_eq!(options.len(), 4);
        assert!(!tree.has_attr(options[0], "selected"));
        assert!(tree.has_attr(options[2], "selected"));
        assert!(tree.has_attr(options[3], "disabled"));
    }

    #[test]
    fn test_placeholder_selected_when_empty() {
        let value = runtime::use_state_keyed("plan-b", String::new);
        let tree = DomTree::from_element(&plans(&value));
        let options = tree.find_by_tag("option");
        assert!(tree.has_attr(options[0], "selected"));
    }

    #[test]
    fn test_change_updates_state() {
        let value = runtime::use_state_keyed("plan-c", String::new);
        let tree = DomTree::from_element(&plans(&value));

        tree.dispatch_to_id("plan", EventContext::change("free"))
            .unwrap();
        assert_eq!(value.get(), "free");

        tree.dispatch_to_id("plan", EventContext::change("team"))
            .unwrap();
        assert_eq!(value.get(), "free");
    }
}
