//! Deterministic sequencing module
//!
//! All shuffle logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed table order
//! - No rendering, storage or platform dependencies

pub mod moves;
pub mod sequencer;
pub mod state;
pub mod tick;

pub use moves::{Direction, Face, Move, MoveRecord, MoveTable, TableDefect};
pub use sequencer::{MoveSequencer, SequencerError};
pub use state::{Pacer, ShuffleState};
pub use tick::{TickOutcome, tick};
