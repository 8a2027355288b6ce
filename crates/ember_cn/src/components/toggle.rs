//! Shared two-state control used by checkbox and switch
//!
//! The control is a `<button>` carrying `role` and `aria-checked`. Click and
//! Space flip the bound state; Enter is swallowed so it cannot submit an
//! enclosing form.

use std::rc::Rc;

use ember_core::events::Key;
use ember_core::State;
use ember_dom::prelude::*;

/// Callback receiving the new checked state
pub type ToggleChangeFn = Rc<dyn Fn(bool)>;

pub(crate) struct ToggleSpec<'a> {
    pub role: &'static str,
    pub block: &'a str,
    pub id: &'a str,
    pub state: &'a State<bool>,
    pub disabled: bool,
    pub on_change: Option<ToggleChangeFn>,
}

pub(crate) fn toggle_button(spec: ToggleSpec<'_>) -> Div {
    let checked = spec.state.get();
    let data_state = if checked { "checked" } else { "unchecked" };

    let mut control = button_element()
        .id(spec.id)
        .role(spec.role)
        .aria_bool("checked", checked)
        .class(spec.block.to_string())
        .class_if(checked, format!("{}--checked", spec.block))
        .class_if(spec.disabled, format!("{}--disabled", spec.block))
        .data("state", data_state)
        .disabled(spec.disabled);

    if spec.disabled {
        return control;
    }

    let flip = {
        let state = spec.state.clone();
        let on_change = spec.on_change.clone();
        Rc::new(move || {
            let next = !state.get();
            state.set_rebuild(next);
            tracing::debug!("toggle -> {}", next);
            if let Some(cb) = &on_change {
                cb(next);
            }
        })
    };

    let on_click = flip.clone();
    control = control.on_click(move |_| on_click());

    control.on_key_down(move |e| match e.key {
        Some(Key::Space) => {
            e.prevent_default();
            flip();
        }
        Some(Key::Enter) => e.prevent_default(),
        _ => {}
    })
}
