//! Input event vocabulary shared by elements and components

use std::fmt;

/// Kind of event delivered to an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Focus,
    Blur,
    /// Text content of an editable element changed
    Input,
    /// Committed value change (select, checkbox)
    Change,
    KeyDown,
    Submit,
    Reset,
    PointerEnter,
    PointerLeave,
}

impl EventType {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::Focus => "focus",
            EventType::Blur => "blur",
            EventType::Input => "input",
            EventType::Change => "change",
            EventType::KeyDown => "keydown",
            EventType::Submit => "submit",
            EventType::Reset => "reset",
            EventType::PointerEnter => "pointerenter",
            EventType::PointerLeave => "pointerleave",
        }
    }

    /// Whether the event bubbles to ancestors
    pub fn bubbles(&self) -> bool {
        !matches!(
            self,
            EventType::Focus | EventType::Blur | EventType::PointerEnter | EventType::PointerLeave
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical key, named after the DOM `KeyboardEvent.key` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Escape,
    Tab,
    Space,
    Backspace,
    Character(char),
    Unidentified,
}

impl Key {
    /// Parse a DOM key name (`"ArrowDown"`, `"Enter"`, `"a"`, ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            " " | "Spacebar" => Key::Space,
            "Backspace" => Key::Backspace,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Unidentified,
                }
            }
        }
    }

    /// Whether this key activates buttons and toggles
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Modifier keys held during an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Win on Windows
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("a"), Key::Character('a'));
        assert_eq!(Key::from_name("é"), Key::Character('é'));
        assert_eq!(Key::from_name("F13"), Key::Unidentified);
    }

    #[test]
    fn test_focus_does_not_bubble() {
        assert!(!EventType::Focus.bubbles());
        assert!(!EventType::Blur.bubbles());
        assert!(EventType::Click.bubbles());
        assert!(EventType::KeyDown.bubbles());
    }

    #[test]
    fn test_modifiers() {
        assert!(!Modifiers::NONE.any());
        assert!(Modifiers::shift().any());
    }
}
