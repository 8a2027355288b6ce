//! Layout primitives: stack, grid and container
//!
//! These only attach classes; spacing comes from [`SpacingToken`] so the
//! stylesheet owns the actual values.
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::container(ContainerSize::Md).child(
//!     cn::stack()
//!         .gap(SpacingToken::Space4)
//!         .child(cn::button("Save"))
//!         .child(cn::button("Cancel").variant(ButtonVariant::Ghost)),
//! )
//! ```

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::{SpacingToken, ThemeState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Cross-axis alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
    #[default]
    Stretch,
}

impl Align {
    fn modifier(&self) -> &'static str {
        match self {
            Align::Start => "align-start",
            Align::Center => "align-center",
            Align::End => "align-end",
            Align::Stretch => "align-stretch",
        }
    }
}

/// Main-axis distribution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    Between,
}

impl Justify {
    fn modifier(&self) -> &'static str {
        match self {
            Justify::Start => "justify-start",
            Justify::Center => "justify-center",
            Justify::End => "justify-end",
            Justify::Between => "justify-between",
        }
    }
}

type Children = Vec<Box<dyn ElementBuilder>>;

/// Build `shell` with `children` appended below it
fn build_with_children(shell: Div, children: &Children, tree: &mut DomTree) -> NodeId {
    let node = shell.build(tree);
    for child in children {
        let child_node = child.build(tree);
        tree.add_child(node, child_node);
    }
    node
}

/// Flex stack of children
pub struct Stack {
    children: Children,
    direction: StackDirection,
    gap: SpacingToken,
    align: Align,
    justify: Justify,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            direction: StackDirection::Vertical,
            gap: SpacingToken::default(),
            align: Align::default(),
            justify: Justify::default(),
        }
    }

    pub fn horizontal(mut self) -> Self {
        self.direction = StackDirection::Horizontal;
        self
    }

    pub fn direction(mut self, direction: StackDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: SpacingToken) -> Self {
        self.gap = gap;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder for Stack {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let direction = match self.direction {
            StackDirection::Vertical => "vertical",
            StackDirection::Horizontal => "horizontal",
        };
        let shell = div()
            .class(theme.block("stack"))
            .class(theme.modifier("stack", direction))
            .class(theme.modifier("stack", self.align.modifier()))
            .class(theme.modifier("stack", self.justify.modifier()))
            .class(theme.token(self.gap))
            .data("direction", direction);
        build_with_children(shell, &self.children, tree)
    }
}

/// Fixed-column grid
pub struct Grid {
    children: Children,
    columns: u8,
    gap: SpacingToken,
}

impl Grid {
    /// Grid with `columns` columns (clamped to 1..=12)
    pub fn new(columns: u8) -> Self {
        Self {
            children: Vec::new(),
            columns: columns.clamp(1, 12),
            gap: SpacingToken::default(),
        }
    }

    pub fn gap(mut self, gap: SpacingToken) -> Self {
        self.gap = gap;
        self
    }

    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }
}

impl ElementBuilder for Grid {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let shell = div()
            .class(theme.block("grid"))
            .class(theme.modifier("grid", &format!("cols-{}", self.columns)))
            .class(theme.token(self.gap));
        build_with_children(shell, &self.children, tree)
    }
}

/// Maximum content width of a [`Container`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Full,
}

impl ContainerSize {
    fn modifier(&self) -> &'static str {
        match self {
            ContainerSize::Sm => "sm",
            ContainerSize::Md => "md",
            ContainerSize::Lg => "lg",
            ContainerSize::Xl => "xl",
            ContainerSize::Full => "full",
        }
    }
}

/// Centered, width-limited wrapper
pub struct Container {
    children: Children,
    size: ContainerSize,
}

impl Container {
    pub fn new(size: ContainerSize) -> Self {
        Self {
            children: Vec::new(),
            size,
        }
    }

    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl ElementBuilder for Container {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let shell = div()
            .class(theme.block("container"))
            .class(theme.modifier("container", self.size.modifier()));
        build_with_children(shell, &self.children, tree)
    }
}

pub fn stack() -> Stack {
    Stack::new()
}

pub fn grid(columns: u8) -> Grid {
    Grid::new(columns)
}

pub fn container(size: ContainerSize) -> Container {
    Container::new(size)
}
