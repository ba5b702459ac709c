//! Cube Shuffle - an endless random Rubik's cube move sequence
//!
//! Core modules:
//! - `sim`: Deterministic sequencing (move table, random walk, tick pacing)
//! - `settings`: Speed presets and the persisted move interval
//! - `persistence`: Integer key/value stores (memory, JSON file)
//! - `ui`: Button input, control schemes and the speed menu model
//! - `renderer`: Rendering collaborator trait and a plain-text renderer
//! - `app`: Event handlers tying the pieces together for any host loop
//! - `platform`: Native tick clock and stdin button source

pub mod app;
pub mod persistence;
#[cfg(not(target_arch = "wasm32"))]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::{App, Control};
pub use persistence::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use renderer::{Renderer, SpriteRect, Status, TextRenderer};
pub use settings::{Settings, SpeedPreset};
pub use sim::{Move, MoveRecord, MoveSequencer, MoveTable, SequencerError, ShuffleState};
pub use ui::{Button, ControlScheme, SpeedMenu};

/// Application configuration constants
pub mod consts {
    /// Number of moves in the standard table (6 faces x 2 directions)
    pub const MOVES_AVAILABLE: usize = 12;
    /// Legal successors per move (every move of the other 4 faces)
    pub const SUCCESSORS_AVAILABLE: usize = 8;

    /// Store key holding the move interval
    pub const SHUFFLE_STORAGE_KEY: u32 = 0xffdd_fdfd;
    /// Seconds between moves when nothing is persisted ("Walk")
    pub const DEFAULT_INTERVAL: u16 = 3;
    /// Upper bound for the stepper controls and for persisted values
    pub const MAX_INTERVAL: u16 = 60;

    /// Timer cadence driving the pacer
    pub const TICK_PERIOD_MS: u64 = 1000;

    /// Sprite sheet cell size (pixels, square)
    pub const SPRITE_SIZE: i32 = 100;
}
