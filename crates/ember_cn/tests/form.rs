//! FormBuilder end to end: render, edit, submit, reset

use std::cell::Cell;
use std::rc::Rc;

use ember_cn::prelude::*;

fn account(key: &str, submits: Rc<Cell<u32>>) -> FormBuilder {
    cn::form()
        .id(key)
        .field(FieldDescriptor::text("username", "Username").required())
        .field(
            FieldDescriptor::password("password", "Password")
                .required()
                .validate_on_change(|v| {
                    let short = v.as_text().is_some_and(|t| t.len() < 8);
                    short.then(|| "At least 8 characters".to_string())
                }),
        )
        .field(FieldDescriptor::select(
            "role",
            "Role",
            [SelectOption::new("admin", "Admin"), SelectOption::new("viewer", "Viewer")],
        ))
        .defaults_json(r#"{"role": "viewer"}"#)
        .unwrap()
        .on_submit(move |_| submits.set(submits.get() + 1))
}

#[test]
fn submit_blocked_until_valid_then_reset_restores_defaults() {
    let submits = Rc::new(Cell::new(0));
    // One builder keeps its call-site key across the whole test.
    let builder = account("account", submits.clone());

    let tree = DomTree::from_element(&builder);
    tree.dispatch_to_id("account", EventContext::submit())
        .unwrap();
    assert_eq!(submits.get(), 0);

    let state = builder.current_state();
    assert_eq!(state.error("username"), Some("Username is required"));
    assert_eq!(state.error("password"), Some("Password is required"));
    assert_eq!(state.submit_count(), 1);

    tree.dispatch_to_id("account-username", EventContext::input("ada"))
        .unwrap();
    tree.dispatch_to_id("account-password", EventContext::input("short"))
        .unwrap();
    assert_eq!(
        builder.current_state().error("password"),
        Some("At least 8 characters")
    );

    tree.dispatch_to_id("account-password", EventContext::input("long enough"))
        .unwrap();
    tree.dispatch_to_id("account-role", EventContext::change("admin"))
        .unwrap();
    tree.dispatch_to_id("account", EventContext::submit())
        .unwrap();
    assert_eq!(submits.get(), 1);

    let state = builder.current_state();
    assert_eq!(
        state.values_json(),
        serde_json::json!({
            "username": "ada",
            "password": "long enough",
            "role": "admin"
        })
    );

    tree.dispatch_to_id("account", EventContext::reset())
        .unwrap();
    let state = builder.current_state();
    assert_eq!(state.value("role"), Some(&FieldValue::text("viewer")));
    assert_eq!(state.value("username"), Some(&FieldValue::text("")));
    assert!(state.errors().is_empty());
    assert!(!state.is_dirty());
}

#[test]
fn errors_render_as_alerts_linked_to_controls() {
    let builder = account("errors", Rc::new(Cell::new(0)));
    let tree = DomTree::from_element(&builder);
    tree.dispatch_to_id("errors", EventContext::submit())
        .unwrap();

    // The builder caches its first render; rebuild from the keyed state.
    let rendered = builder.build_component();
    let tree = DomTree::from_element(&rendered);

    let alerts = tree.find_by_role("alert");
    assert_eq!(alerts.len(), 2);
    let username = tree.find_by_id("errors-username").unwrap();
    assert_eq!(tree.attr(username, "aria-invalid"), Some("true"));
    assert_eq!(
        tree.attr(username, "aria-describedby"),
        Some("errors-username-error")
    );

    let role = tree.find_by_id("errors-role").unwrap();
    let selected: Vec<_> = tree
        .children(role)
        .iter()
        .copied()
        .filter(|&o| tree.has_attr(o, "selected"))
        .collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(tree.attr(selected[0], "value"), Some("viewer"));
}
