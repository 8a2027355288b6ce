//! Data table - static rows of text under column headers
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::data_table()
//!     .caption("Invoices")
//!     .column("Invoice")
//!     .column_aligned("Amount", ColumnAlign::End)
//!     .row(["INV001", "$250.00"])
//!     .row(["INV002", "$150.00"])
//!     .striped(true)
//! ```

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// Horizontal alignment of a column's cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnAlign {
    #[default]
    Start,
    Center,
    End,
}

impl ColumnAlign {
    fn modifier(&self) -> &'static str {
        match self {
            ColumnAlign::Start => "start",
            ColumnAlign::Center => "center",
            ColumnAlign::End => "end",
        }
    }
}

#[derive(Clone, Debug)]
struct Column {
    header: String,
    align: ColumnAlign,
}

const DEFAULT_EMPTY_MESSAGE: &str = "No results.";

#[derive(Clone, Debug, Default)]
pub struct DataTable {
    id: Option<String>,
    caption: Option<String>,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    striped: bool,
    empty_message: Option<String>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn column(self, header: impl Into<String>) -> Self {
        self.column_aligned(header, ColumnAlign::Start)
    }

    pub fn column_aligned(mut self, header: impl Into<String>, align: ColumnAlign) -> Self {
        self.columns.push(Column {
            header: header.into(),
            align,
        });
        self
    }

    /// Append a row
    ///
    /// Short rows are padded with empty cells; extra cells are dropped.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() > self.columns.len() && !self.columns.is_empty() {
            tracing::warn!(
                "data_table: row has {} cells for {} columns, truncating",
                row.len(),
                self.columns.len()
            );
            row.truncate(self.columns.len());
        }
        self.rows.push(row);
        self
    }

    pub fn rows<R, I, S>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().fold(self, |table, r| table.row(r))
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Message shown in place of rows when there are none
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }
}

impl ElementBuilder for DataTable {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let align_class =
            |align: ColumnAlign| theme.modifier("data-table-cell", align.modifier());

        let mut head_row = tr();
        for column in &self.columns {
            head_row = head_row.child(
                th().class(theme.element("data-table", "head"))
                    .class(align_class(column.align))
                    .text(column.header.clone()),
            );
        }

        let mut body = tbody();
        if self.rows.is_empty() {
            let message = self
                .empty_message
                .clone()
                .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
            body = body.child(
                tr().child(
                    td().attr("colspan", self.columns.len().max(1).to_string())
                        .class(theme.element("data-table", "empty"))
                        .text(message),
                ),
            );
        }
        for (index, row) in self.rows.iter().enumerate() {
            let mut row_el = tr()
                .class(theme.element("data-table", "row"))
                .class_if(
                    self.striped && index % 2 == 1,
                    theme.modifier("data-table-row", "striped"),
                );
            for (col, column) in self.columns.iter().enumerate() {
                let value = row.get(col).cloned().unwrap_or_default();
                row_el = row_el.child(
                    td().class(theme.element("data-table", "cell"))
                        .class(align_class(column.align))
                        .text(value),
                );
            }
            body = body.child(row_el);
        }

        let mut table_el = table()
            .class(theme.block("data-table"))
            .class_if(self.striped, theme.modifier("data-table", "striped"))
            .attr_opt("id", self.id.clone());
        if let Some(caption_text) = &self.caption {
            table_el = table_el.child(
                caption()
                    .class(theme.element("data-table", "caption"))
                    .text(caption_text.clone()),
            );
        }

        div()
            .class(theme.element("data-table", "wrapper"))
            .class(theme.token(theme.radius()))
            .child(table_el.child(thead().child(head_row)).child(body))
            .build(tree)
    }
}

pub fn data_table() -> DataTable {
    DataTable::new()
}
