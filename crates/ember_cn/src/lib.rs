//! # Ember Component Library (ember_cn)
//!
//! A shadcn-inspired component library built on `ember_dom` primitives.
//!
//! ## Philosophy
//!
//! Like shadcn/ui builds styled components on top of Radix UI primitives,
//! `ember_cn` builds themed, accessible components on top of `ember_dom`.
//!
//! - **Primitives**: `ember_dom` provides the element builder and tree (div, text, table, etc.)
//! - **Theme Tokens**: `ember_theme` provides class-name tokens (spacing, radii, shadows)
//! - **Components**: `ember_cn` provides components that render themed, ARIA-complete markup
//!
//! ## Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! // Searchable select
//! cn::combobox()
//!     .label("Country")
//!     .option("us", "United States")
//!     .option("uk", "United Kingdom")
//!     .option("ca", "Canada")
//!     .default_value("ca")
//!
//! // Destructive button
//! cn::button("Delete")
//!     .variant(ButtonVariant::Destructive)
//!
//! // Form with validation
//! cn::form()
//!     .field(FieldDescriptor::text("name", "Name").required())
//!     .on_submit(|values| println!("{:?}", values))
//! ```
//!
//! ## Components
//!
//! - **Combobox** - filterable select with keyboard navigation and optional create
//! - **Form** - field descriptors rendered to labelled controls with validation
//! - **Button**, **Badge**, **Label**, **Separator**, **Card**, **Alert**
//! - **Input**, **Textarea**, **Select**, **Checkbox**, **Switch**
//! - **Accordion**, **Collapsible**, **Tabs**, **DataTable**
//! - **Stack**, **Grid**, **Container** layout primitives

pub mod components;
pub mod form;

pub use components::*;
pub use form::{
    form, FieldDescriptor, FieldHandle, FieldKind, FieldRenderContext, FieldValue, Form,
    FormBuilder, FormError, FormState,
};

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::accordion::accordion;
    pub use crate::components::alert::{alert, alert_box};
    pub use crate::components::badge::badge;
    pub use crate::components::button::button;
    pub use crate::components::card::{card, card_content, card_footer, card_header};
    pub use crate::components::checkbox::checkbox;
    pub use crate::components::collapsible::collapsible;
    pub use crate::components::combobox::combobox;
    pub use crate::components::data_table::data_table;
    pub use crate::components::input::input;
    pub use crate::components::label::label;
    pub use crate::components::layout::{container, grid, stack};
    pub use crate::components::select::select;
    pub use crate::components::separator::separator;
    pub use crate::components::switch::switch;
    pub use crate::components::tabs::tabs;
    pub use crate::components::textarea::textarea;
    pub use crate::form::form;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::accordion::AccordionMode;
    pub use crate::components::alert::AlertVariant;
    pub use crate::components::badge::BadgeVariant;
    pub use crate::components::button::{ButtonSize, ButtonType, ButtonVariant};
    pub use crate::components::combobox::{
        ComboboxBuilder, ComboboxOption, ComboboxSize, ComboboxValue,
    };
    pub use crate::components::data_table::ColumnAlign;
    pub use crate::components::input::{InputSize, InputType};
    pub use crate::components::layout::{Align, ContainerSize, Justify, StackDirection};
    pub use crate::components::select::SelectOption;
    pub use crate::components::separator::SeparatorOrientation;
    pub use crate::components::tabs::TabsSize;
    pub use crate::form::{FieldDescriptor, FieldKind, FieldValue, FormBuilder, FormError};

    pub use ember_core::{use_state_keyed, State};
    pub use ember_dom::prelude::*;
    // Re-export commonly needed theme types
    pub use ember_theme::{RadiusToken, ShadowToken, SpacingToken, ThemeState};
}
