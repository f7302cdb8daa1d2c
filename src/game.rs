//! Game layer: the ice field and the collision resolution engine.
//!
//! - Bounded positions, directions, and the 10×10 occupancy grid
//! - Terrain objects (penguins by id, food, hazards) as a closed union
//! - The recursive slide-and-collide algorithm for actors and hazards
//! - Observable events, the game state, and invariant checks

mod event;
mod grid;
mod invariants;
mod object;
mod penguin;
mod slide;
mod state;

pub use event::{EliminationCause, GameEvent};
pub use grid::{Direction, Grid, Position, GRID_SIZE};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use object::{Food, FoodKind, Hazard, TerrainObject, PLUGGED_NOTATION};
pub use penguin::{Penguin, PenguinId, Species};
pub use slide::{slide, slide_with, SlideFx};
pub use state::GameState;
