//! Tabs component for switching between content panels
//!
//! Renders a `tablist` of `tab` buttons and one `tabpanel` per tab. Only the
//! active tab is in the tab order (roving tabindex); arrow keys move and
//! activate, wrapping around and skipping disabled tabs.
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! let tab = use_state_keyed("settings_tab", String::new);
//!
//! cn::tabs(&tab)
//!     .tab("account", "Account", || paragraph().text("Account settings"))
//!     .tab("password", "Password", || paragraph().text("Change password"))
//!     .tab_disabled("billing", "Billing", || paragraph().text("Soon"))
//!     .default_value("account")
//! ```

use std::cell::OnceCell;
use std::rc::Rc;

use ember_core::events::Key;
use ember_core::State;
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// Tabs size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabsSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TabsSize {
    fn modifier(&self) -> &'static str {
        match self {
            TabsSize::Small => "sm",
            TabsSize::Medium => "md",
            TabsSize::Large => "lg",
        }
    }
}

#[derive(Clone)]
struct TabItem {
    value: String,
    label: String,
    disabled: bool,
    content: Rc<dyn Fn() -> Div>,
}

/// Index of the next enabled entry from `from`, stepping by `forward`
///
/// Wraps around both ends. Returns `None` when nothing is enabled.
pub fn next_enabled(enabled: &[bool], from: usize, forward: bool) -> Option<usize> {
    let len = enabled.len();
    if len == 0 {
        return None;
    }
    (1..=len)
        .map(|step| {
            if forward {
                (from + step) % len
            } else {
                (from + len - step % len) % len
            }
        })
        .find(|&i| enabled[i])
}

fn first_enabled(enabled: &[bool]) -> Option<usize> {
    enabled.iter().position(|&e| e)
}

fn last_enabled(enabled: &[bool]) -> Option<usize> {
    enabled.iter().rposition(|&e| e)
}

/// Tabs component
pub struct Tabs {
    inner: Div,
}

impl ElementBuilder for Tabs {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Builder for tabs bound to a `State<String>` holding the active value
pub struct TabsBuilder {
    key: InstanceKey,
    state: State<String>,
    id: Option<String>,
    items: Vec<TabItem>,
    size: TabsSize,
    default_value: Option<String>,
    on_change: Option<Rc<dyn Fn(&str)>>,
    built: OnceCell<Tabs>,
}

impl TabsBuilder {
    #[track_caller]
    pub fn new(state: &State<String>) -> Self {
        Self::with_instance_key(InstanceKey::new("tabs"), state)
    }

    pub fn with_key(key: impl Into<String>, state: &State<String>) -> Self {
        Self::with_instance_key(InstanceKey::explicit(key), state)
    }

    fn with_instance_key(key: InstanceKey, state: &State<String>) -> Self {
        Self {
            key,
            state: state.clone(),
            id: None,
            items: Vec::new(),
            size: TabsSize::default(),
            default_value: None,
            on_change: None,
            built: OnceCell::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a tab with its panel content
    pub fn tab<F>(mut self, value: impl Into<String>, label: impl Into<String>, content: F) -> Self
    where
        F: Fn() -> Div + 'static,
    {
        self.items.push(TabItem {
            value: value.into(),
            label: label.into(),
            disabled: false,
            content: Rc::new(content),
        });
        self
    }

    /// Add a tab that cannot be selected
    pub fn tab_disabled<F>(
        mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        content: F,
    ) -> Self
    where
        F: Fn() -> Div + 'static,
    {
        self.items.push(TabItem {
            value: value.into(),
            label: label.into(),
            disabled: true,
            content: Rc::new(content),
        });
        self
    }

    pub fn size(mut self, size: TabsSize) -> Self {
        self.size = size;
        self
    }

    /// Tab shown while the bound state names no enabled tab
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_change = Some(Rc::new(callback));
        self
    }

    fn get_or_build(&self) -> &Tabs {
        self.built.get_or_init(|| self.build_component())
    }

    fn enabled_index(&self, value: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|t| t.value == value && !t.disabled)
    }

    /// Active tab: the bound value, else the default, else the first enabled
    fn resolve_active(&self, enabled: &[bool]) -> Option<usize> {
        self.enabled_index(&self.state.get())
            .or_else(|| {
                self.default_value
                    .as_deref()
                    .and_then(|v| self.enabled_index(v))
            })
            .or_else(|| first_enabled(enabled))
    }

    pub fn build_component(&self) -> Tabs {
        let theme = ThemeState::get().theme();
        let id = self.id.clone().unwrap_or_else(|| self.key.dom_id());
        let enabled: Rc<[bool]> = self.items.iter().map(|t| !t.disabled).collect();
        let values: Rc<[String]> = self.items.iter().map(|t| t.value.clone()).collect();

        let active = self.resolve_active(&enabled);
        if let Some(i) = active {
            if self.state.get() != self.items[i].value {
                self.state.set(self.items[i].value.clone());
            }
        }

        let mut tablist = div()
            .role("tablist")
            .aria("orientation", "horizontal")
            .class(theme.element("tabs", "list"))
            .class(theme.modifier("tabs", self.size.modifier()));

        let mut panels = Vec::with_capacity(self.items.len());

        for (index, item) in self.items.iter().enumerate() {
            let selected = active == Some(index);
            let tab_id = format!("{}-tab-{}", id, item.value);
            let panel_id = format!("{}-panel-{}", id, item.value);

            let mut tab = button_element()
                .id(&tab_id)
                .role("tab")
                .aria_bool("selected", selected)
                .aria("controls", &panel_id)
                .tabindex(if selected { 0 } else { -1 })
                .class(theme.element("tabs", "trigger"))
                .class_if(selected, theme.modifier("tabs-trigger", "active"))
                .data("state", if selected { "active" } else { "inactive" })
                .disabled(item.disabled)
                .text(item.label.clone());

            if !item.disabled {
                let activate = {
                    let state = self.state.clone();
                    let values = values.clone();
                    let on_change = self.on_change.clone();
                    Rc::new(move |target: usize| {
                        let value = &values[target];
                        if state.get() == *value {
                            return;
                        }
                        state.set_rebuild(value.clone());
                        tracing::debug!("tabs: activated {:?}", value);
                        if let Some(cb) = &on_change {
                            cb(value);
                        }
                    })
                };

                let on_click = activate.clone();
                tab = tab.on_click(move |_| on_click(index));

                let enabled = enabled.clone();
                tab = tab.on_key_down(move |e| {
                    let target = match e.key {
                        Some(Key::ArrowRight) => next_enabled(&enabled, index, true),
                        Some(Key::ArrowLeft) => next_enabled(&enabled, index, false),
                        Some(Key::Home) => first_enabled(&enabled),
                        Some(Key::End) => last_enabled(&enabled),
                        _ => return,
                    };
                    e.prevent_default();
                    if let Some(target) = target {
                        activate(target);
                    }
                });
            }

            tablist = tablist.child(tab);

            let mut panel = div()
                .id(&panel_id)
                .role("tabpanel")
                .aria("labelledby", &tab_id)
                .tabindex(0)
                .class(theme.element("tabs", "panel"))
                .hidden(!selected);
            if selected {
                panel = panel.child((item.content)());
            }
            panels.push(panel);
        }

        let inner = div()
            .id(&id)
            .class(theme.block("tabs"))
            .child(tablist)
            .children(panels);

        Tabs { inner }
    }
}

impl ElementBuilder for TabsBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.get_or_build().build(tree)
    }
}

/// Create tabs bound to `state`
#[track_caller]
pub fn tabs(state: &State<String>) -> TabsBuilder {
    TabsBuilder::new(state)
}
