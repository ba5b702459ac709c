//! User interface models
//!
//! Host-independent: buttons arrive as `Button` values and the speed menu is
//! plain state for a `Renderer` to draw.

pub mod input;
pub mod menu;

pub use input::{Button, ControlScheme};
pub use menu::SpeedMenu;
