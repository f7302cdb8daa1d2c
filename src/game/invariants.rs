//! Game invariants - sanity checks that detect bugs.
//!
//! In a correctly implemented engine these never trigger. They are not
//! gameplay rules: a violation means the slide engine or scheduler has a
//! bug, and the session aborts the game when one is found.

use std::collections::HashMap;

use crate::game::object::TerrainObject;
use crate::game::penguin::PenguinId;
use crate::game::state::GameState;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
/// Checked: grid/mirror agreement in both directions, eliminated penguins
/// absent from the grid, each penguin on at most one cell, and food-weight
/// conservation (carried + on-grid + crushed = spawned).
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Collect every penguin cell on the grid
    let mut on_grid: HashMap<PenguinId, Vec<_>> = HashMap::new();
    for (pos, obj) in state.grid().occupants() {
        if let TerrainObject::Penguin(id) = obj {
            on_grid.entry(*id).or_default().push(pos);
        }
    }

    for (id, cells) in &on_grid {
        if cells.len() > 1 {
            violations.push(InvariantViolation {
                message: format!("penguin P{id} occupies {} cells: {cells:?}", cells.len()),
            });
        }
        if state.penguin(*id).is_err() {
            violations.push(InvariantViolation {
                message: format!("grid references unknown penguin P{id}"),
            });
        }
    }

    for penguin in state.penguins() {
        match penguin.position {
            Some(pos) => {
                let mirrored = matches!(
                    state.grid().get(pos),
                    Some(TerrainObject::Penguin(id)) if *id == penguin.id
                );
                if !mirrored {
                    violations.push(InvariantViolation {
                        message: format!(
                            "penguin P{} claims {pos} but the grid disagrees",
                            penguin.id
                        ),
                    });
                }
            }
            None => {
                if on_grid.contains_key(&penguin.id) {
                    violations.push(InvariantViolation {
                        message: format!(
                            "eliminated penguin P{} still occupies the grid",
                            penguin.id
                        ),
                    });
                }
            }
        }
    }

    // Food-weight conservation
    let carried = state.carried_food_weight();
    let on_ice = state.grid_food_weight();
    let crushed = state.crushed_food_weight();
    let spawned = state.spawned_food_weight();
    if carried + on_ice + crushed != spawned {
        violations.push(InvariantViolation {
            message: format!(
                "food weight not conserved: {carried} carried + {on_ice} on grid + \
                 {crushed} crushed != {spawned} spawned"
            ),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
