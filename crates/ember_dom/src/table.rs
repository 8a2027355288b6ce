//! Table element builders

use crate::div::Div;

pub fn table() -> Div {
    Div::with_tag("table")
}

pub fn caption() -> Div {
    Div::with_tag("caption")
}

pub fn thead() -> Div {
    Div::with_tag("thead")
}

pub fn tbody() -> Div {
    Div::with_tag("tbody")
}

pub fn tfoot() -> Div {
    Div::with_tag("tfoot")
}

pub fn tr() -> Div {
    Div::with_tag("tr")
}

/// Column header cell (`scope="col"`)
pub fn th() -> Div {
    Div::with_tag("th").attr("scope", "col")
}

/// Row header cell (`scope="row"`)
pub fn th_row() -> Div {
    Div::with_tag("th").attr("scope", "row")
}

pub fn td() -> Div {
    Div::with_tag("td")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DomTree;

    #[test]
    fn test_table_structure() {
        let ui = table()
            .child(thead().child(tr().child(th().text("Name"))))
            .child(tbody().child(tr().child(td().text("Ada"))));
        let html = DomTree::from_element(&ui).to_html();

        assert_eq!(
            html,
            "<table><thead><tr><th scope=\"col\">Name</th></tr></thead>\
             <tbody><tr><td>Ada</td></tr></tbody></table>"
        );
    }
}
