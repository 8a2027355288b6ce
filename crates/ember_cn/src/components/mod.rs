//! Themed components built on ember_dom primitives
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `button("Label")`)
//! - Variant enum (e.g., `ButtonVariant`)
//! - Size enum (e.g., `ButtonSize`)
//! - Implements `ElementBuilder` for rendering

pub mod accordion;
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod collapsible;
pub mod combobox;
pub mod data_table;
pub mod input;
pub mod label;
pub mod layout;
pub mod select;
pub mod separator;
pub mod switch;
pub mod tabs;
pub mod textarea;
mod toggle;

pub use accordion::{accordion, Accordion, AccordionBuilder, AccordionMode};
pub use alert::{alert, alert_box, Alert, AlertBox, AlertVariant};
pub use badge::{badge, Badge, BadgeVariant};
pub use button::{button, Button, ButtonBuilder, ButtonSize, ButtonType, ButtonVariant};
pub use card::{
    card, card_content, card_footer, card_header, Card, CardContent, CardFooter, CardHeader,
};
pub use checkbox::{checkbox, Checkbox, CheckboxBuilder, CheckboxSize};
pub use collapsible::{collapsible, Collapsible};
pub use combobox::{
    combobox, Combobox, ComboboxBuilder, ComboboxInput, ComboboxOption, ComboboxSize,
    ComboboxState, ComboboxValue, Commit, Transition, ValueChangeFn,
};
pub use data_table::{data_table, ColumnAlign, DataTable};
pub use input::{input, Input, InputSize, InputType, TextChangeFn};
pub use label::{label, Label, LabelSize};
pub use layout::{
    container, grid, stack, Align, Container, ContainerSize, Grid, Justify, Stack,
    StackDirection,
};
pub use select::{select, Select, SelectOption};
pub use separator::{separator, Separator, SeparatorOrientation};
pub use switch::{switch, Switch, SwitchSize};
pub use tabs::{tabs, Tabs, TabsBuilder, TabsSize};
pub use textarea::{textarea, Textarea};
pub use toggle::ToggleChangeFn;
