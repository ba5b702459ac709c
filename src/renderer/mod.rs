//! Rendering collaborator
//!
//! The app never draws; it hands moves, menus and status to a `Renderer`.
//! A graphical host blits `SpriteRect` out of its sprite sheet and draws the
//! label. `TextRenderer` prints the same information as lines of text.

mod text;

pub use text::TextRenderer;

use glam::IVec2;

use crate::consts::SPRITE_SIZE;
use crate::sim::MoveRecord;
use crate::ui::SpeedMenu;

/// Sub-image of the sprite sheet showing one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRect {
    pub origin: IVec2,
    pub size: IVec2,
}

impl SpriteRect {
    pub fn for_move(record: &MoveRecord) -> Self {
        Self {
            origin: record.display_position,
            size: IVec2::splat(SPRITE_SIZE),
        }
    }
}

/// Pacing state shown alongside the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub interval: u16,
    pub paused: bool,
}

/// Presentation layer the app drives
pub trait Renderer {
    /// A new move is current
    fn show_move(&mut self, record: &MoveRecord);

    /// The speed menu opened or its highlight moved
    fn show_menu(&mut self, menu: &SpeedMenu);

    /// The speed menu closed
    fn hide_menu(&mut self) {}

    /// Interval or pause flag changed
    fn show_status(&mut self, _status: Status) {}
}
