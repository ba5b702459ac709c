//! Shuffle state and pacing types
//!
//! Everything the tick loop mutates lives here, owned by the caller.

use serde::{Deserialize, Serialize};

use super::moves::{MoveRecord, MoveTable};
use super::sequencer::{MoveSequencer, SequencerError};

/// Countdown between moves
///
/// With interval `n` the pacer waits `n` ticks after each move, so a new
/// move shows every `n + 1` ticks. Interval 0 moves on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacer {
    interval: u16,
    /// Ticks left before the next move
    counter: u16,
    paused: bool,
}

impl Pacer {
    pub fn new(interval: u16) -> Self {
        Self {
            interval,
            counter: 0,
            paused: false,
        }
    }

    pub fn interval(&self) -> u16 {
        self.interval
    }

    pub fn counter(&self) -> u16 {
        self.counter
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Change the interval; a pending countdown is shortened to fit
    pub fn set_interval(&mut self, interval: u16) {
        self.interval = interval;
        self.counter = self.counter.min(interval);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Make the next tick move immediately
    pub fn restart(&mut self) {
        self.counter = 0;
    }

    /// Start a fresh countdown after a move
    pub(crate) fn rearm(&mut self) {
        self.counter = self.interval;
    }

    /// Count one tick down, returning true when a move is due
    pub(crate) fn is_due(&mut self) -> bool {
        if self.counter == 0 {
            return true;
        }
        self.counter -= 1;
        false
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_INTERVAL)
    }
}

/// Complete shuffle state: the sequencer and its pacer
#[derive(Debug, Clone)]
pub struct ShuffleState {
    pub sequencer: MoveSequencer,
    pub pacer: Pacer,
}

impl ShuffleState {
    /// Build state over a validated table; the sequencer still needs seeding
    pub fn new(table: MoveTable, interval: u16) -> Result<Self, SequencerError> {
        Ok(Self {
            sequencer: MoveSequencer::new(table)?,
            pacer: Pacer::new(interval),
        })
    }

    /// Seed the sequencer and arm the pacer so the first tick moves
    pub fn start(&mut self, seed: u64) -> Result<&MoveRecord, SequencerError> {
        let first = self.sequencer.initialize(seed)?;
        self.pacer.restart();
        Ok(first)
    }

    pub fn current(&self) -> Option<&MoveRecord> {
        self.sequencer.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacer_counts_down() {
        let mut pacer = Pacer::new(2);
        assert!(pacer.is_due());
        pacer.rearm();
        assert!(!pacer.is_due());
        assert!(!pacer.is_due());
        assert!(pacer.is_due());
    }

    #[test]
    fn test_set_interval_shortens_countdown() {
        let mut pacer = Pacer::new(5);
        pacer.rearm();
        assert_eq!(pacer.counter(), 5);

        pacer.set_interval(1);
        assert_eq!(pacer.counter(), 1);

        // Lengthening leaves the running countdown alone
        pacer.set_interval(10);
        assert_eq!(pacer.counter(), 1);
        assert_eq!(pacer.interval(), 10);
    }

    #[test]
    fn test_toggle_pause() {
        let mut pacer = Pacer::default();
        assert!(!pacer.is_paused());
        assert!(pacer.toggle_pause());
        assert!(!pacer.toggle_pause());
    }

    #[test]
    fn test_state_start() {
        let mut state = ShuffleState::new(MoveTable::standard(), 3).unwrap();
        assert!(state.current().is_none());
        let first = state.start(11).unwrap().id;
        assert_eq!(state.current().map(|r| r.id), Some(first));
        assert_eq!(state.pacer.counter(), 0);
        assert!(state.start(11).is_err());
    }

    #[test]
    fn test_restart_rejected_keeps_countdown() {
        let mut state = ShuffleState::new(MoveTable::standard(), 3).unwrap();
        state.start(1).unwrap();
        let shown = state.sequencer.advance().unwrap().id;
        state.pacer.rearm();
        assert_eq!(state.pacer.counter(), 3);

        assert_eq!(
            state.start(2).unwrap_err(),
            SequencerError::AlreadyInitialized
        );
        assert_eq!(state.pacer.counter(), 3);
        assert_eq!(state.current().map(|r| r.id), Some(shown));
    }
}
