//! Ember element tree
//!
//! Builders (`div()`, `span()`, `table()`, ...) describe elements; building
//! one into a [`DomTree`] materializes it into an arena that can be queried,
//! driven with events and serialized to HTML.
//!
//! ```ignore
//! use ember_dom::prelude::*;
//!
//! let tree = DomTree::from_element(&div().id("hello").text("Hello"));
//! assert_eq!(tree.to_html(), "<div id=\"hello\">Hello</div>");
//! ```

pub mod div;
pub mod error;
pub mod event_handler;
pub mod html;
pub mod key;
pub mod table;
pub mod text;
pub mod tree;

pub use div::{Div, ElementBuilder, ElementTypeId};
pub use error::DomError;
pub use event_handler::{EventCallback, EventContext, EventHandlers};
pub use key::InstanceKey;
pub use text::Text;
pub use tree::{DispatchOutcome, DomNode, DomTree, NodeId, NodeKind};

/// Common imports for building elements
pub mod prelude {
    pub use crate::div::{
        button_element, div, element, heading, input_element, label_element, list, list_item,
        paragraph, span, Div, ElementBuilder,
    };
    pub use crate::event_handler::EventContext;
    pub use crate::key::InstanceKey;
    pub use crate::table::{caption, table, tbody, td, tfoot, th, th_row, thead, tr};
    pub use crate::text::{text, Text};
    pub use crate::tree::{DomTree, NodeId};
    pub use ember_core::events::{EventType, Key, Modifiers};
}
