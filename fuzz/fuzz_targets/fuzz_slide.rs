#![no_main]

//! Slide cascade fuzzer.
//!
//! Builds an arbitrary board (penguins, hazards, food, plugged holes on
//! distinct cells) and fires arbitrary slides, with and without ability
//! modifiers. After every slide the full invariant set must hold: unique
//! occupancy, grid/mirror agreement, and food-weight conservation.

use arbitrary::Arbitrary;
use floe::game::{
    check_invariants, slide_with, Food, FoodKind, GameState, Hazard, Position, SlideFx, Species,
    GRID_SIZE,
};
use floe::Direction;
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated cell occupant.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzObject {
    Food { kind: u8, weight: u8 },
    Hazard { kind: u8 },
    PluggedHole,
}

/// A fuzzer-generated move.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct FuzzMove {
    actor: u8,
    direction: u8,
    cap: Option<u8>,
    jump: bool,
}

/// Structured input for slide fuzzing.
#[derive(Arbitrary, Debug)]
struct SlideInput {
    penguins: Vec<(u8, u8)>,
    objects: Vec<(u8, FuzzObject)>,
    moves: Vec<FuzzMove>,
}

fn cell(idx: u8) -> Position {
    Position::new(idx % GRID_SIZE, (idx / GRID_SIZE) % GRID_SIZE).expect("both coords in range")
}

fuzz_target!(|input: SlideInput| {
    let mut state = GameState::new();

    // Up to three penguins on free cells
    for (idx, species) in input.penguins.iter().take(3) {
        let pos = cell(*idx);
        if state.grid().get(pos).is_none() {
            let species = Species::ALL[*species as usize % Species::ALL.len()];
            state.add_penguin(species, pos).expect("cell checked free");
        }
    }
    if state.penguins().is_empty() {
        return;
    }

    // Arbitrary terrain on the remaining cells
    for (idx, obj) in input.objects.iter().take(60) {
        let pos = cell(*idx);
        if state.grid().get(pos).is_some() {
            continue;
        }
        match obj {
            FuzzObject::Food { kind, weight } => {
                let kind = FoodKind::ALL[*kind as usize % FoodKind::ALL.len()];
                let weight = 1 + weight % 5;
                state.add_food(Food::new(kind, weight), pos).expect("cell checked free");
            }
            FuzzObject::Hazard { kind } => {
                let hazard = Hazard::ALL[*kind as usize % Hazard::ALL.len()];
                state.add_hazard(hazard, pos).expect("cell checked free");
            }
            FuzzObject::PluggedHole => state.add_plugged_hole(pos),
        }
    }

    let spawned = state.spawned_food_weight();
    let ids: Vec<u8> = state.penguins().iter().map(|p| p.id).collect();

    for mv in input.moves.iter().take(30) {
        let id = ids[mv.actor as usize % ids.len()];
        if state.penguin(id).expect("id from table").is_eliminated() {
            continue;
        }
        let direction = Direction::ALL[mv.direction as usize % Direction::ALL.len()];
        let fx = SlideFx {
            step_cap: mv.cap.map(|c| 1 + c % 5),
            jump_armed: mv.jump,
        };

        slide_with(&mut state, id, direction, fx).expect("slide on living actor");

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "invariants broken: {violations:?}");
        assert_eq!(
            state.carried_food_weight() + state.grid_food_weight() + state.crushed_food_weight(),
            spawned,
            "food weight not conserved"
        );
    }
});
