//! Component gallery
//!
//! Renders one section per component into a standalone HTML page so the
//! markup and class names can be inspected against a stylesheet.

use ember_cn::prelude::*;
use ember_cn::{AccordionBuilder, TabsBuilder};
use ember_theme::{Theme, ThemeState};

use crate::config::EmberConfig;

/// A titled gallery entry
struct Section {
    id: &'static str,
    title: &'static str,
    body: Box<dyn ElementBuilder>,
}

impl Section {
    fn new(id: &'static str, title: &'static str, body: impl ElementBuilder + 'static) -> Self {
        Self {
            id,
            title,
            body: Box::new(body),
        }
    }

    fn into_div(self) -> Div {
        div()
            .id(format!("gallery-{}", self.id))
            .class("gallery-section")
            .aria("labelledby", format!("gallery-{}-title", self.id))
            .child(
                heading(2)
                    .id(format!("gallery-{}-title", self.id))
                    .text(self.title),
            )
            .child_box(self.body)
    }
}

fn sections() -> Vec<Section> {
    let country = use_state_keyed("gallery-country", || "ca".to_string());
    let plan = use_state_keyed("gallery-plan", || "pro".to_string());
    let bio = use_state_keyed("gallery-bio", String::new);
    let email = use_state_keyed("gallery-email", String::new);
    let agree = use_state_keyed("gallery-agree", || false);
    let notify = use_state_keyed("gallery-notify", || true);
    let details = use_state_keyed("gallery-details", || false);
    let tab = use_state_keyed("gallery-tab", String::new);

    vec![
        Section::new(
            "combobox",
            "Combobox",
            ComboboxBuilder::with_key("gallery-combobox")
                .label("Country")
                .placeholder("Search countries...")
                .option("us", "United States")
                .option("uk", "United Kingdom")
                .option("ca", "Canada")
                .option_disabled("mx", "Mexico")
                .bind(&country)
                .allow_create(true),
        ),
        Section::new(
            "form",
            "Form",
            FormBuilder::with_key("gallery-form")
                .id("gallery-signup")
                .field(FieldDescriptor::text("name", "Name").required())
                .field(
                    FieldDescriptor::email("email", "Email")
                        .placeholder("you@example.com")
                        .description("We never share it.")
                        .validate_on_blur(|v| {
                            let bad = v.as_text().is_some_and(|t| !t.is_empty() && !t.contains('@'));
                            bad.then(|| "Enter a valid email".to_string())
                        }),
                )
                .field(FieldDescriptor::number("age", "Age").min(13.0).max(120.0))
                .field(FieldDescriptor::select(
                    "plan",
                    "Plan",
                    [
                        SelectOption::new("free", "Free"),
                        SelectOption::new("pro", "Pro"),
                    ],
                ))
                .field(FieldDescriptor::textarea("about", "About you"))
                .field(FieldDescriptor::checkbox("terms", "Accept the terms").required())
                .default_value("plan", FieldValue::text("free")),
        ),
        Section::new(
            "buttons",
            "Buttons and badges",
            cn::stack()
                .horizontal()
                .gap(SpacingToken::Space2)
                .child(cn::button("Save"))
                .child(cn::button("Cancel").variant(ButtonVariant::Outline))
                .child(cn::button("Delete").variant(ButtonVariant::Destructive))
                .child(cn::button("Saving").loading(true))
                .child(cn::badge("New"))
                .child(cn::badge("Beta").variant(BadgeVariant::Secondary)),
        ),
        Section::new(
            "inputs",
            "Inputs",
            cn::grid(2)
                .gap(SpacingToken::Space4)
                .child(cn::input(&email).id("gallery-email").placeholder("Email"))
                .child(
                    cn::select(&plan)
                        .id("gallery-plan")
                        .option("free", "Free")
                        .option("pro", "Pro")
                        .option_disabled("team", "Team"),
                )
                .child(cn::textarea(&bio).id("gallery-bio").rows(4))
                .child(
                    cn::stack()
                        .child(cn::checkbox(&agree).id("gallery-agree").label("I agree"))
                        .child(cn::switch(&notify).id("gallery-notify").label("Notifications")),
                ),
        ),
        Section::new(
            "disclosure",
            "Accordion and collapsible",
            cn::stack()
                .gap(SpacingToken::Space6)
                .child(
                    AccordionBuilder::with_key("gallery-faq")
                        .id("gallery-faq")
                        .default_open("shipping")
                        .item("shipping", "Shipping", || {
                            paragraph().text("Orders ship within two days.")
                        })
                        .item("returns", "Returns", || {
                            paragraph().text("Returns are free for 30 days.")
                        })
                        .item_disabled("gifts", "Gift cards", || div()),
                )
                .child(
                    cn::collapsible(&details)
                        .id("gallery-details")
                        .trigger("Show details")
                        .content(|| paragraph().text("Extra details.")),
                ),
        ),
        Section::new(
            "tabs",
            "Tabs",
            TabsBuilder::with_key("gallery-tabs", &tab)
                .id("gallery-tabs")
                .tab("account", "Account", || paragraph().text("Account settings"))
                .tab("billing", "Billing", || paragraph().text("Billing settings"))
                .tab_disabled("admin", "Admin", || div()),
        ),
        Section::new(
            "table",
            "Data table",
            cn::data_table()
                .id("gallery-invoices")
                .caption("Recent invoices")
                .column("Invoice")
                .column("Status")
                .column_aligned("Amount", ColumnAlign::End)
                .row(["INV001", "Paid", "$250.00"])
                .row(["INV002", "Pending", "$150.00"])
                .row(["INV003", "Unpaid", "$350.00"])
                .striped(true),
        ),
        Section::new(
            "feedback",
            "Alerts and cards",
            cn::stack()
                .child(
                    cn::alert_box()
                        .title("Heads up")
                        .description("You can add components from the CLI."),
                )
                .child(cn::alert("Your session expired.").variant(AlertVariant::Destructive))
                .child(cn::separator())
                .child(
                    cn::card()
                        .child(
                            cn::card_header()
                                .title("Team")
                                .description("Invite your colleagues."),
                        )
                        .child(cn::card_content().child(paragraph().text("3 members")))
                        .child(cn::card_footer().child(cn::button("Invite"))),
                ),
        ),
    ]
}

/// Build the gallery body under the active theme
pub fn build_gallery() -> Div {
    let theme = ThemeState::get().theme();
    let mut body = cn::container(ContainerSize::Lg);
    for section in sections() {
        body = body.child(section.into_div());
    }
    div()
        .id("gallery")
        .classes(theme.root_classes())
        .child(body)
}

/// Install the configured theme and render the full HTML page
pub fn render_page(config: &EmberConfig) -> String {
    ThemeState::init(Theme::from_config(&config.theme));

    let tree = DomTree::from_element(&build_gallery());
    tracing::debug!("Gallery tree has {} nodes", tree.len());

    let title = html_escape::encode_text(&config.gallery.title);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{}\n</body>\n</html>\n",
        tree.to_html()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_renders() {
        let tree = DomTree::from_element(&build_gallery());
        let headings = tree.find_by_tag("h2");
        let titles: Vec<String> = headings.iter().map(|&h| tree.text_content(h)).collect();
        assert_eq!(
            titles,
            [
                "Combobox",
                "Form",
                "Buttons and badges",
                "Inputs",
                "Accordion and collapsible",
                "Tabs",
                "Data table",
                "Alerts and cards",
            ]
        );
        assert_eq!(tree.find_by_role("combobox").len(), 1);
        assert!(tree.find_by_id("gallery-signup").is_some());
        assert!(tree.find_by_id("gallery-invoices").is_some());
    }

    #[test]
    fn test_page_escapes_title() {
        let mut config = EmberConfig::default();
        config.gallery.title = "Tom & Jerry <UI>".to_string();
        let page = render_page(&config);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Tom &amp; Jerry &lt;UI&gt;</title>"));
        assert!(page.contains("role=\"combobox\""));
        assert!(page.contains("<form"));
    }
}
