//! Text node builder

use crate::div::{ElementBuilder, ElementTypeId};
use crate::tree::{DomTree, NodeId};

/// A text node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl ElementBuilder for Text {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        tree.create_text(self.content.clone())
    }

    fn element_type_id(&self) -> ElementTypeId {
        ElementTypeId::Text
    }
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}
