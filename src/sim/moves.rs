//! Move vocabulary and the fixed move table
//!
//! A move is a quarter turn of one of the six faces, clockwise or
//! counter-clockwise (prime). Each move lists the 8 moves allowed to follow
//! it: every turn of the four other faces.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MOVES_AVAILABLE, SPRITE_SIZE, SUCCESSORS_AVAILABLE};

/// Cube face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
}

/// Quarter-turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    /// Prime move (`F'`)
    CounterClockwise,
}

/// One of the 12 face turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    F,
    FPrime,
    B,
    BPrime,
    L,
    LPrime,
    R,
    RPrime,
    U,
    UPrime,
    D,
    DPrime,
}

impl Move {
    /// Every move, in standard table order
    pub const ALL: [Move; MOVES_AVAILABLE] = [
        Move::F,
        Move::FPrime,
        Move::B,
        Move::BPrime,
        Move::L,
        Move::LPrime,
        Move::R,
        Move::RPrime,
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
    ];

    pub fn new(face: Face, direction: Direction) -> Self {
        use Direction::*;
        match (face, direction) {
            (Face::Front, Clockwise) => Move::F,
            (Face::Front, CounterClockwise) => Move::FPrime,
            (Face::Back, Clockwise) => Move::B,
            (Face::Back, CounterClockwise) => Move::BPrime,
            (Face::Left, Clockwise) => Move::L,
            (Face::Left, CounterClockwise) => Move::LPrime,
            (Face::Right, Clockwise) => Move::R,
            (Face::Right, CounterClockwise) => Move::RPrime,
            (Face::Up, Clockwise) => Move::U,
            (Face::Up, CounterClockwise) => Move::UPrime,
            (Face::Down, Clockwise) => Move::D,
            (Face::Down, CounterClockwise) => Move::DPrime,
        }
    }

    pub fn face(self) -> Face {
        match self {
            Move::F | Move::FPrime => Face::Front,
            Move::B | Move::BPrime => Face::Back,
            Move::L | Move::LPrime => Face::Left,
            Move::R | Move::RPrime => Face::Right,
            Move::U | Move::UPrime => Face::Up,
            Move::D | Move::DPrime => Face::Down,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Move::F | Move::B | Move::L | Move::R | Move::U | Move::D => Direction::Clockwise,
            Move::FPrime
            | Move::BPrime
            | Move::LPrime
            | Move::RPrime
            | Move::UPrime
            | Move::DPrime => Direction::CounterClockwise,
        }
    }

    /// Same face, opposite direction (undoes this move)
    pub fn inverse(self) -> Self {
        let direction = match self.direction() {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        };
        Move::new(self.face(), direction)
    }

    /// Display label in standard notation
    pub fn label(self) -> &'static str {
        match self {
            Move::F => "F",
            Move::FPrime => "F'",
            Move::B => "B",
            Move::BPrime => "B'",
            Move::L => "L",
            Move::LPrime => "L'",
            Move::R => "R",
            Move::RPrime => "R'",
            Move::U => "U",
            Move::UPrime => "U'",
            Move::D => "D",
            Move::DPrime => "D'",
        }
    }

    /// Legacy single-character tag: lowercase is clockwise, uppercase is prime
    pub fn key(self) -> char {
        let letter = match self.face() {
            Face::Front => 'f',
            Face::Back => 'b',
            Face::Left => 'l',
            Face::Right => 'r',
            Face::Up => 'u',
            Face::Down => 'd',
        };
        match self.direction() {
            Direction::Clockwise => letter,
            Direction::CounterClockwise => letter.to_ascii_uppercase(),
        }
    }

    /// Parse a legacy single-character tag
    pub fn from_key(key: char) -> Option<Self> {
        let direction = if key.is_ascii_uppercase() {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        };
        let face = match key.to_ascii_lowercase() {
            'f' => Face::Front,
            'b' => Face::Back,
            'l' => Face::Left,
            'r' => Face::Right,
            'u' => Face::Up,
            'd' => Face::Down,
            _ => return None,
        };
        Some(Move::new(face, direction))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A row of the move table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub id: Move,
    /// Legal next moves, in draw order
    pub successors: Vec<Move>,
    /// Top-left corner of this move's cell in the sprite sheet
    pub display_position: IVec2,
}

impl MoveRecord {
    pub fn new(id: Move, successors: &[Move], x: i32, y: i32) -> Self {
        Self {
            id,
            successors: successors.to_vec(),
            display_position: IVec2::new(x, y),
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }
}

/// Why a move table was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableDefect {
    #[error("table has no moves")]
    Empty,
    #[error("move {0} appears more than once")]
    DuplicateMove(Move),
    #[error("move {id} has {count} successors, expected {}", SUCCESSORS_AVAILABLE)]
    SuccessorCount { id: Move, count: usize },
    #[error("move {id} lists successor {successor} twice")]
    DuplicateSuccessor { id: Move, successor: Move },
    #[error("move {id} may not be followed by {successor} (same face)")]
    SameFace { id: Move, successor: Move },
    #[error("move {id} references {successor}, which is not in the table")]
    Dangling { id: Move, successor: Move },
}

/// Ordered, immutable table of moves
///
/// Table order matters: the initial pick indexes into it, so the same seed
/// only reproduces the same walk for the same ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveTable {
    records: Vec<MoveRecord>,
}

impl MoveTable {
    /// The 12-move table with its sprite sheet layout
    pub fn standard() -> Self {
        use Move::*;

        const FRONT_BACK: [Move; 8] = [L, LPrime, R, RPrime, U, UPrime, D, DPrime];
        const LEFT_RIGHT: [Move; 8] = [F, FPrime, B, BPrime, U, UPrime, D, DPrime];
        const UP_DOWN: [Move; 8] = [F, FPrime, B, BPrime, L, LPrime, R, RPrime];
        const S: i32 = SPRITE_SIZE;

        Self::from_records(vec![
            MoveRecord::new(F, &FRONT_BACK, 0, 0),
            MoveRecord::new(FPrime, &FRONT_BACK, 0, S),
            MoveRecord::new(B, &FRONT_BACK, S, 0),
            MoveRecord::new(BPrime, &FRONT_BACK, S, S),
            // L and L' sit swapped on the sheet
            MoveRecord::new(L, &LEFT_RIGHT, 2 * S, S),
            MoveRecord::new(LPrime, &LEFT_RIGHT, 2 * S, 0),
            MoveRecord::new(R, &LEFT_RIGHT, 3 * S, 0),
            MoveRecord::new(RPrime, &LEFT_RIGHT, 3 * S, S),
            MoveRecord::new(U, &UP_DOWN, 4 * S, 0),
            MoveRecord::new(UPrime, &UP_DOWN, 4 * S, S),
            MoveRecord::new(D, &UP_DOWN, 5 * S, 0),
            MoveRecord::new(DPrime, &UP_DOWN, 5 * S, S),
        ])
    }

    /// Wrap records without checking them (see [`MoveTable::validate`])
    pub fn from_records(records: Vec<MoveRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    pub fn index_of(&self, id: Move) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn find(&self, id: Move) -> Option<&MoveRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check the table invariants, reporting the first defect found
    pub fn validate(&self) -> Result<(), TableDefect> {
        if self.records.is_empty() {
            return Err(TableDefect::Empty);
        }

        for (i, record) in self.records.iter().enumerate() {
            let id = record.id;

            if self.records[..i].iter().any(|r| r.id == id) {
                return Err(TableDefect::DuplicateMove(id));
            }

            if record.successors.len() != SUCCESSORS_AVAILABLE {
                return Err(TableDefect::SuccessorCount {
                    id,
                    count: record.successors.len(),
                });
            }

            for (j, &successor) in record.successors.iter().enumerate() {
                // Covers both the move itself and its inverse
                if successor.face() == id.face() {
                    return Err(TableDefect::SameFace { id, successor });
                }
                if record.successors[..j].contains(&successor) {
                    return Err(TableDefect::DuplicateSuccessor { id, successor });
                }
                if self.index_of(successor).is_none() {
                    return Err(TableDefect::Dangling { id, successor });
                }
            }
        }

        Ok(())
    }
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::standard()
    }
}
