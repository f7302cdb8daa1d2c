// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Floe: a deterministic sliding-penguin puzzle engine.
//!
//! Three penguins of random species share a 10×10 ice field with food and
//! hazards. Each turn a penguin picks a direction and slides frictionlessly
//! until something stops it; collisions cascade recursively through momentum
//! transfer, sea-lion bounces, and secondary hazard slides. The engine is
//! fully deterministic given a seed and a decider.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Session (scheduler, decider)    │
//! ├─────────────────────────────────────┤
//! │   Slide engine (collision cascade)  │
//! ├─────────────────────────────────────┤
//! │     Grid / objects / event log      │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod rng;
pub mod session;

pub use error::{EngineError, EngineResult};

// Re-export key types at the crate root for convenience
pub use game::{
    Direction, Food, FoodKind, GameEvent, GameState, Grid, Hazard, Penguin, PenguinId, Position,
    Species, TerrainObject, GRID_SIZE,
};
pub use session::{
    run_game, AiDecider, Decider, FinalStanding, GameResult, Session, SessionConfig, TurnDecision,
};
