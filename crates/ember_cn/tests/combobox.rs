//! Combobox driven through rendered trees and synthetic events

use std::cell::RefCell;
use std::rc::Rc;

use ember_cn::prelude::*;
use ember_cn::ComboboxState;

fn countries(key: &str) -> ComboboxBuilder {
    ComboboxBuilder::with_key(key)
        .label("Country")
        .option("us", "United States")
        .option("uk", "United Kingdom")
        .option("ca", "Canada")
}

fn render(builder: &ComboboxBuilder) -> DomTree {
    DomTree::from_element(builder)
}

fn option_labels(tree: &DomTree) -> Vec<String> {
    tree.find_by_role("option")
        .into_iter()
        .map(|id| tree.text_content(id))
        .collect()
}

fn send(tree: &DomTree, id: &str, ctx: EventContext) -> bool {
    tree.dispatch_to_id(id, ctx).unwrap().default_prevented
}

#[test]
fn typing_filters_case_insensitively() {
    let tree = render(&countries("filter"));
    send(&tree, "filter-input", EventContext::focus());
    send(&tree, "filter-input", EventContext::input("united"));

    let tree = render(&countries("filter"));
    let input = tree.find_by_id("filter-input").unwrap();
    assert_eq!(tree.attr(input, "aria-expanded"), Some("true"));
    assert_eq!(
        option_labels(&tree),
        ["United States", "United Kingdom"]
    );
    assert_eq!(
        tree.attr(input, "aria-activedescendant"),
        Some("filter-option-0")
    );
}

#[test]
fn default_value_shows_label_closed() {
    let builder = countries("defaulted").default_value("ca");
    let tree = render(&builder);

    let input = tree.find_by_id("defaulted-input").unwrap();
    assert_eq!(tree.attr(input, "value"), Some("Canada"));
    assert_eq!(tree.attr(input, "aria-expanded"), Some("false"));
    assert!(tree.find_by_role("listbox").is_empty());

    let state = builder.current_state();
    assert_eq!(state.selected_value.as_deref(), Some("ca"));
    assert!(!state.is_open);
}

#[test]
fn arrow_down_twice_then_enter_commits_third() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let builder = countries("arrows").on_value_change(move |v| sink.borrow_mut().push(v.to_string()));
    let tree = render(&builder);

    send(&tree, "arrows-input", EventContext::focus());
    assert!(send(&tree, "arrows-input", EventContext::key_down(Key::ArrowDown)));
    assert!(send(&tree, "arrows-input", EventContext::key_down(Key::ArrowDown)));
    assert!(send(&tree, "arrows-input", EventContext::key_down(Key::Enter)));

    let state = builder.current_state();
    assert_eq!(state.selected_value.as_deref(), Some("ca"));
    assert_eq!(state.search_text, "Canada");
    assert!(!state.is_open);
    assert_eq!(*seen.borrow(), ["ca"]);
}

#[test]
fn escape_restores_committed_label() {
    let builder = countries("escape").default_value("uk");
    let tree = render(&builder);

    send(&tree, "escape-input", EventContext::input("can"));
    assert!(send(&tree, "escape-input", EventContext::key_down(Key::Escape)));

    let tree = render(&countries("escape"));
    let input = tree.find_by_id("escape-input").unwrap();
    assert_eq!(tree.attr(input, "value"), Some("United Kingdom"));
    assert_eq!(tree.attr(input, "aria-expanded"), Some("false"));
}

#[test]
fn disabled_combobox_ignores_everything() {
    let builder = countries("off").disabled(true);
    let tree = render(&builder);

    let outcome = tree
        .dispatch_to_id("off-input", EventContext::key_down(Key::ArrowDown))
        .unwrap();
    assert_eq!(outcome.handled, 0);
    send(&tree, "off-input", EventContext::input("can"));

    let input = tree.find_by_id("off-input").unwrap();
    assert!(tree.has_attr(input, "disabled"));
    assert_eq!(builder.current_state(), ComboboxState::default());
}

#[test]
fn clicking_disabled_option_does_nothing() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let make = || {
        let sink = seen.clone();
        countries("click")
            .option_disabled("mx", "Mexico")
            .on_value_change(move |v| sink.borrow_mut().push(v.to_string()))
    };
    let builder = make();
    let tree = render(&builder);
    send(&tree, "click-input", EventContext::focus());

    let tree = render(&make());
    let mexico = tree.find_by_id("click-option-3").unwrap();
    assert_eq!(tree.attr(mexico, "aria-disabled"), Some("true"));
    tree.dispatch(mexico, EventContext::click()).unwrap();
    assert_eq!(builder.current_state().selected_value, None);
    assert!(seen.borrow().is_empty());

    let us = tree.find_by_id("click-option-0").unwrap();
    tree.dispatch(us, EventContext::click()).unwrap();
    assert_eq!(builder.current_state().selected_value.as_deref(), Some("us"));
    assert_eq!(*seen.borrow(), ["us"]);
}

#[test]
fn allow_create_commits_typed_text() {
    let country = use_state_keyed("created-country", String::new);
    let make = || countries("create").allow_create(true).bind(&country);
    let tree = render(&make());

    send(&tree, "create-input", EventContext::input("  Peru "));
    let tree = render(&make());
    let status = tree.find_by_role("status")[0];
    assert_eq!(tree.text_content(status), "Press Enter to create \"Peru\"");

    assert!(send(&tree, "create-input", EventContext::key_down(Key::Enter)));
    assert_eq!(country.get(), "Peru");
    assert!(ember_core::take_rebuild_request());

    let tree = render(&make());
    let input = tree.find_by_id("create-input").unwrap();
    assert_eq!(tree.attr(input, "value"), Some("Peru"));
}

#[test]
fn reopening_created_value_does_not_offer_it_again() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let place = use_state_keyed("reopen-place", || "Narnia".to_string());
    let make = || {
        let sink = seen.clone();
        ComboboxBuilder::with_key("reopen")
            .label("Place")
            .allow_create(true)
            .bind(&place)
            .on_value_change(move |v| sink.borrow_mut().push(v.to_string()))
    };
    let tree = render(&make());
    send(&tree, "reopen-input", EventContext::focus());

    let tree = render(&make());
    let status = tree.find_by_role("status")[0];
    assert_eq!(tree.text_content(status), "No results found");

    send(&tree, "reopen-input", EventContext::key_down(Key::Enter));
    assert!(seen.borrow().is_empty());
    assert_eq!(place.get(), "Narnia");
}

#[test]
fn empty_results_without_create_show_message() {
    let make = || countries("empty").empty_text("Nothing matches");
    let tree = render(&make());
    send(&tree, "empty-input", EventContext::input("zz"));

    let tree = render(&make());
    assert!(option_labels(&tree).is_empty());
    let status = tree.find_by_role("status")[0];
    assert_eq!(tree.text_content(status), "Nothing matches");

    assert!(send(&tree, "empty-input", EventContext::key_down(Key::Enter)));
    assert_eq!(make().current_state().selected_value, None);
}

#[test]
fn bound_state_follows_external_changes() {
    let country = use_state_keyed("bound-country", || "us".to_string());
    let make = || countries("bound").bind(&country);

    let tree = render(&make());
    let input = tree.find_by_id("bound-input").unwrap();
    assert_eq!(tree.attr(input, "value"), Some("United States"));

    country.set("ca".to_string());
    let tree = render(&make());
    let input = tree.find_by_id("bound-input").unwrap();
    assert_eq!(tree.attr(input, "value"), Some("Canada"));
}

#[test]
fn html_output_carries_aria_contract() {
    let tree = render(&countries("html"));
    send(&tree, "html-input", EventContext::focus());
    let html = render(&countries("html")).to_html();

    assert!(html.contains("role=\"combobox\""));
    assert!(html.contains("aria-autocomplete=\"list\""));
    assert!(html.contains("aria-controls=\"html-listbox\""));
    assert!(html.contains("<ul id=\"html-listbox\""));
    assert!(html.contains("aria-selected=\"false\""));
}
