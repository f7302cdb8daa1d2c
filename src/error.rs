//! Error types for the sliding-penguin engine.

use std::fmt;

use crate::game::{PenguinId, Position};

/// Errors raised by engine operations.
///
/// Invariant-class errors (`CellOccupied`, `Invariant`) indicate engine bugs
/// and abort the game; the remaining variants are caller misuse rejected at
/// the API boundary with core state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An object was placed on a cell that already holds one.
    CellOccupied {
        /// The contested cell.
        pos: Position,
    },
    /// A penguin id outside the spawned population.
    UnknownPenguin(PenguinId),
    /// A slide was requested for a penguin no longer on the grid.
    EliminatedActor(PenguinId),
    /// A game invariant failed to hold after an operation.
    Invariant(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::CellOccupied { pos } => {
                write!(f, "cell {pos} is already occupied")
            }
            EngineError::UnknownPenguin(id) => write!(f, "unknown penguin id P{id}"),
            EngineError::EliminatedActor(id) => {
                write!(f, "penguin P{id} is eliminated and cannot act")
            }
            EngineError::Invariant(msg) => write!(f, "invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
