//! Random walk over the move table
//!
//! The sequencer holds the current move and replaces it with a uniformly
//! drawn successor on every advance. The walk is memoryless: the current
//! move is the only state besides the RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::moves::{Move, MoveRecord, MoveTable, TableDefect};
use crate::consts::SUCCESSORS_AVAILABLE;

/// Sequencer failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("malformed move table: {0}")]
    MalformedMoveTable(#[from] TableDefect),
    #[error("no move {0} in table")]
    UnknownMoveId(Move),
    #[error("sequencer is already initialized")]
    AlreadyInitialized,
    #[error("sequencer is not initialized")]
    NotInitialized,
}

/// Seeded RNG plus the position in the walk
#[derive(Debug, Clone)]
struct Walk {
    seed: u64,
    rng: Pcg32,
    current: usize,
}

/// Holds the move table and produces the next move in the sequence
#[derive(Debug, Clone)]
pub struct MoveSequencer {
    table: MoveTable,
    /// Successor indices into `table`, resolved once at construction
    links: Vec<[usize; SUCCESSORS_AVAILABLE]>,
    walk: Option<Walk>,
}

impl MoveSequencer {
    /// Validate the table and resolve every successor reference.
    ///
    /// A table that fails validation never produces a move.
    pub fn new(table: MoveTable) -> Result<Self, SequencerError> {
        table.validate()?;

        let links = table
            .records()
            .iter()
            .map(|record| {
                let mut slots = [0; SUCCESSORS_AVAILABLE];
                for (slot, &id) in slots.iter_mut().zip(&record.successors) {
                    *slot = table
                        .index_of(id)
                        .ok_or(SequencerError::UnknownMoveId(id))?;
                }
                Ok::<_, SequencerError>(slots)
            })
            .collect::<Result<Vec<_>, SequencerError>>()?;

        Ok(Self {
            table,
            links,
            walk: None,
        })
    }

    /// Seed the RNG and pick the starting move uniformly over the whole table.
    ///
    /// May be called once; later calls fail with `AlreadyInitialized` and
    /// leave the walk untouched.
    pub fn initialize(&mut self, seed: u64) -> Result<&MoveRecord, SequencerError> {
        if self.walk.is_some() {
            return Err(SequencerError::AlreadyInitialized);
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let current = rng.random_range(0..self.table.len());
        log::debug!(
            "Sequencer seeded with {} (start {})",
            seed,
            self.label_at(current)
        );

        self.walk = Some(Walk { seed, rng, current });
        Ok(self.record_at(current))
    }

    /// Move to a uniformly drawn successor of the current move
    pub fn advance(&mut self) -> Result<&MoveRecord, SequencerError> {
        let walk = self.walk.as_mut().ok_or(SequencerError::NotInitialized)?;
        let draw = walk.rng.random_range(0..SUCCESSORS_AVAILABLE);
        self.step(draw)
    }

    /// Move to successor number `draw` of the current move, without using the RNG.
    ///
    /// # Panics
    ///
    /// If `draw` is not below `SUCCESSORS_AVAILABLE`.
    pub fn step(&mut self, draw: usize) -> Result<&MoveRecord, SequencerError> {
        assert!(
            draw < SUCCESSORS_AVAILABLE,
            "successor draw {draw} out of range"
        );
        let walk = self.walk.as_mut().ok_or(SequencerError::NotInitialized)?;

        let previous = walk.current;
        walk.current = self.links[previous][draw];
        let current = walk.current;

        log::debug!(
            "Advance {} -> {} (draw {})",
            self.label_at(previous),
            self.label_at(current),
            draw
        );
        Ok(self.record_at(current))
    }

    /// The current move, `None` before `initialize`
    pub fn current(&self) -> Option<&MoveRecord> {
        self.walk.as_ref().map(|w| self.record_at(w.current))
    }

    pub fn is_initialized(&self) -> bool {
        self.walk.is_some()
    }

    /// Seed passed to `initialize`
    pub fn seed(&self) -> Option<u64> {
        self.walk.as_ref().map(|w| w.seed)
    }

    pub fn table(&self) -> &MoveTable {
        &self.table
    }

    /// Resolve a move id to its table row
    pub fn resolve(&self, id: Move) -> Result<&MoveRecord, SequencerError> {
        self.table.find(id).ok_or(SequencerError::UnknownMoveId(id))
    }

    fn record_at(&self, index: usize) -> &MoveRecord {
        &self.table.records()[index]
    }

    fn label_at(&self, index: usize) -> &'static str {
        self.record_at(index).label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MOVES_AVAILABLE;
    use crate::sim::moves::{Face, MoveRecord};

    /// A sequencer whose initial move is `start`
    fn started_at(start: Move) -> MoveSequencer {
        let seed = (0..)
            .find(|&seed| {
                let mut seq = MoveSequencer::new(MoveTable::standard()).unwrap();
                seq.initialize(seed).unwrap().id == start
            })
            .unwrap();
        let mut seq = MoveSequencer::new(MoveTable::standard()).unwrap();
        seq.initialize(seed).unwrap();
        seq
    }

    #[test]
    fn test_new_rejects_malformed_table() {
        let mut records = MoveTable::standard().records().to_vec();
        records[5].successors.truncate(4);
        let err = MoveSequencer::new(MoveTable::from_records(records)).unwrap_err();
        assert!(matches!(
            err,
            SequencerError::MalformedMoveTable(TableDefect::SuccessorCount { count: 4, .. })
        ));
    }

    #[test]
    fn test_advance_before_initialize() {
        let mut seq = MoveSequencer::new(MoveTable::standard()).unwrap();
        assert!(seq.current().is_none());
        assert_eq!(seq.advance().unwrap_err(), SequencerError::NotInitialized);
        assert_eq!(seq.step(0).unwrap_err(), SequencerError::NotInitialized);
    }

    #[test]
    fn test_initialize_twice() {
        let mut seq = MoveSequencer::new(MoveTable::standard()).unwrap();
        let first = seq.initialize(7).unwrap().id;
        assert_eq!(seq.initialize(7).unwrap_err(), SequencerError::AlreadyInitialized);
        assert_eq!(seq.initialize(8).unwrap_err(), SequencerError::AlreadyInitialized);
        assert_eq!(seq.current().unwrap().id, first);
        assert_eq!(seq.seed(), Some(7));
    }

    #[test]
    fn test_initialize_is_deterministic() {
        for seed in [0, 1, 42, 0xdead_beef, u64::MAX] {
            let mut a = MoveSequencer::new(MoveTable::standard()).unwrap();
            let mut b = MoveSequencer::new(MoveTable::standard()).unwrap();
            assert_eq!(a.initialize(seed).unwrap(), b.initialize(seed).unwrap());
        }
    }

    #[test]
    fn test_initial_pick_reaches_every_move() {
        let mut seen = [false; MOVES_AVAILABLE];
        for seed in 0..2000 {
            let mut seq = MoveSequencer::new(MoveTable::standard()).unwrap();
            let id = seq.initialize(seed).unwrap().id;
            seen[MoveTable::standard().index_of(id).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "initial pool must cover all 12 moves");
    }

    #[test]
    fn test_step_from_front() {
        // F lists l L r R u U d D; slot 3 is the move keyed 'R'
        let mut seq = started_at(Move::F);
        let next = seq.step(3).unwrap().id;
        assert_eq!(next, Move::from_key('R').unwrap());
        assert_eq!(next, Move::RPrime);
        assert_eq!(seq.current().unwrap().id, Move::RPrime);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_step_out_of_range() {
        let mut seq = started_at(Move::U);
        let _ = seq.step(SUCCESSORS_AVAILABLE);
    }

    #[test]
    fn test_advance_never_repeats_face() {
        let mut seq = MoveSequencer::new(MoveTable::standard()).unwrap();
        seq.initialize(1234).unwrap();
        for _ in 0..1000 {
            let before = seq.current().unwrap().clone();
            let after = seq.advance().unwrap().id;
            assert!(before.successors.contains(&after));
            assert_ne!(after.face(), before.id.face());
        }
    }

    #[test]
    fn test_current_is_pure() {
        let mut seq = MoveSequencer::new(MoveTable::standard()).unwrap();
        seq.initialize(99).unwrap();
        seq.advance().unwrap();
        let a = seq.current().cloned();
        let b = seq.current().cloned();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve() {
        let seq = MoveSequencer::new(MoveTable::standard()).unwrap();
        assert_eq!(seq.resolve(Move::BPrime).unwrap().label(), "B'");
    }

    #[test]
    fn test_five_face_table() {
        // Without the front face every move still has 8 legal successors
        let faces = [Face::Back, Face::Left, Face::Right, Face::Up, Face::Down];
        let records = Move::ALL
            .iter()
            .filter(|m| m.face() != Face::Front)
            .map(|&m| {
                let successors: Vec<_> = Move::ALL
                    .iter()
                    .copied()
                    .filter(|s| s.face() != m.face() && faces.contains(&s.face()))
                    .collect();
                MoveRecord::new(m, &successors, 0, 0)
            })
            .collect();

        let mut seq = MoveSequencer::new(MoveTable::from_records(records)).unwrap();
        assert_eq!(seq.table().len(), 10);
        assert_eq!(seq.resolve(Move::F).unwrap_err(), SequencerError::UnknownMoveId(Move::F));

        seq.initialize(5).unwrap();
        for _ in 0..200 {
            assert_ne!(seq.advance().unwrap().id.face(), Face::Front);
        }
    }
}
