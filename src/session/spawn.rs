//! Deterministic board population.
//!
//! The spawner places exactly three penguins on perimeter cells, fifteen
//! hazards, and twenty food items, drawing species, hazard kind, food kind,
//! and food weight uniformly from the injected RNG. Cells are picked by
//! rejection sampling; penguins are labelled P1..P3 in placement order.

use crate::error::EngineResult;
use crate::game::{Food, FoodKind, GameState, Hazard, Position, Species, GRID_SIZE};
use crate::rng::Rng;

/// Number of penguins placed at spawn.
pub const PENGUIN_COUNT: usize = 3;

/// Number of hazards placed at spawn.
pub const HAZARD_COUNT: usize = 15;

/// Number of food items placed at spawn.
pub const FOOD_COUNT: usize = 20;

/// Populate a fresh board.
///
/// # Errors
///
/// Propagates placement errors; with the fixed object counts on a 10×10
/// field these cannot occur in practice.
pub fn spawn_board(rng: &mut Rng) -> EngineResult<GameState> {
    let mut state = GameState::new();

    let mut penguins = 0;
    while penguins < PENGUIN_COUNT {
        let Some(pos) = random_perimeter_cell(rng) else {
            continue;
        };
        if state.grid().get(pos).is_none() {
            let species = Species::ALL[rng.next_index(Species::ALL.len())];
            state.add_penguin(species, pos)?;
            penguins += 1;
        }
    }

    let mut hazards = 0;
    while hazards < HAZARD_COUNT {
        let Some(pos) = random_cell(rng) else {
            continue;
        };
        if state.grid().get(pos).is_none() {
            let hazard = Hazard::ALL[rng.next_index(Hazard::ALL.len())];
            state.add_hazard(hazard, pos)?;
            hazards += 1;
        }
    }

    let mut foods = 0;
    while foods < FOOD_COUNT {
        let Some(pos) = random_cell(rng) else {
            continue;
        };
        if state.grid().get(pos).is_none() {
            let kind = FoodKind::ALL[rng.next_index(FoodKind::ALL.len())];
            #[allow(clippy::cast_possible_truncation)]
            let weight = 1 + rng.next_u32(5) as u8;
            state.add_food(Food::new(kind, weight), pos)?;
            foods += 1;
        }
    }

    Ok(state)
}

/// A uniformly random cell on the outer ring: pick a side, then a cell
/// along it.
fn random_perimeter_cell(rng: &mut Rng) -> Option<Position> {
    #[allow(clippy::cast_possible_truncation)]
    let along = rng.next_u32(u32::from(GRID_SIZE)) as u8;
    let (x, y) = match rng.next_u32(4) {
        0 => (along, 0),
        1 => (along, GRID_SIZE - 1),
        2 => (0, along),
        _ => (GRID_SIZE - 1, along),
    };
    Position::new(x, y)
}

fn random_cell(rng: &mut Rng) -> Option<Position> {
    #[allow(clippy::cast_possible_truncation)]
    let x = rng.next_u32(u32::from(GRID_SIZE)) as u8;
    #[allow(clippy::cast_possible_truncation)]
    let y = rng.next_u32(u32::from(GRID_SIZE)) as u8;
    Position::new(x, y)
}
