//! Button input

use serde::{Deserialize, Serialize};

/// Physical buttons (three on the right side, back on the left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Select,
    Down,
    Back,
}

impl Button {
    /// Parse a terminal key or word
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "k" | "u" | "+" | "up" => Some(Button::Up),
            "" | "s" | "select" => Some(Button::Select),
            "j" | "d" | "-" | "down" => Some(Button::Down),
            "b" | "q" | "back" => Some(Button::Back),
            _ => None,
        }
    }
}

/// How buttons control the shuffle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlScheme {
    /// Select opens a list of speed presets; the choice is persisted
    #[default]
    SpeedMenu,
    /// Up/Down step the interval, Select pauses
    Stepper,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::SpeedMenu => "speed-menu",
            ControlScheme::Stepper => "stepper",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_keys() {
        assert_eq!(Button::from_str("+"), Some(Button::Up));
        assert_eq!(Button::from_str("DOWN\n"), Some(Button::Down));
        assert_eq!(Button::from_str("\n"), Some(Button::Select));
        assert_eq!(Button::from_str("q"), Some(Button::Back));
        assert_eq!(Button::from_str("x"), None);
    }
}
