//! Timer tick handling
//!
//! Turns the host's 1 Hz timer into sequencer advances.

use super::moves::Move;
use super::sequencer::SequencerError;
use super::state::ShuffleState;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new move is current
    Advanced(Move),
    /// Still counting down
    Waiting { remaining: u16 },
    /// Paused; the countdown is frozen
    Paused,
}

/// Advance the shuffle state by one timer tick
pub fn tick(state: &mut ShuffleState) -> Result<TickOutcome, SequencerError> {
    if state.pacer.is_paused() {
        return Ok(TickOutcome::Paused);
    }

    if !state.pacer.is_due() {
        let remaining = state.pacer.counter();
        log::trace!("Next move in {} ticks", remaining);
        return Ok(TickOutcome::Waiting { remaining });
    }

    let next = state.sequencer.advance()?.id;
    state.pacer.rearm();
    Ok(TickOutcome::Advanced(next))
}
