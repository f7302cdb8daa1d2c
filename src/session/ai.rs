//! The reference AI decider.
//!
//! Evaluates the four directions by tracing where the slide would end:
//! food beats any non-fatal stop, and water or an open hole is chosen only
//! when nothing else exists. Ties break uniformly through the injected RNG,
//! so a seeded AI is fully deterministic.

use crate::game::{Direction, GameState, Hazard, PenguinId, Position, Species, TerrainObject};
use crate::rng::Rng;
use crate::session::{Decider, TurnDecision};

/// Where a simulated slide would end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlideOutcome {
    /// Ends on a food item.
    Food,
    /// Stops against a penguin or a non-fatal hazard.
    Safe,
    /// Falls into water or an open hole.
    Fatal,
}

/// Chance in ten that a non-Rockhopper arms its unused ability on a turn.
const ABILITY_CHANCE_IN_TEN: u32 = 3;

/// Priority-driven decider for AI penguins.
#[derive(Debug, Clone, Copy)]
pub struct AiDecider {
    rng: Rng,
}

impl AiDecider {
    /// Create an AI decider with its own deterministic RNG.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
        }
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> Option<T> {
        if options.is_empty() {
            None
        } else {
            Some(options[self.rng.next_index(options.len())])
        }
    }
}

impl Decider for AiDecider {
    fn decide(&mut self, state: &GameState, id: PenguinId, _round: u8) -> TurnDecision {
        let Ok(penguin) = state.penguin(id) else {
            return TurnDecision::plain(Direction::Up);
        };
        let Some(origin) = penguin.position else {
            return TurnDecision::plain(Direction::Up);
        };

        // Rank the four directions by simulated destination
        let mut food_dirs = Vec::new();
        let mut safe_dirs = Vec::new();
        let mut fatal_dirs = Vec::new();
        for dir in Direction::ALL {
            match simulate_slide(state, origin, dir) {
                SlideOutcome::Food => food_dirs.push(dir),
                SlideOutcome::Safe => safe_dirs.push(dir),
                SlideOutcome::Fatal => fatal_dirs.push(dir),
            }
        }

        let direction = self
            .pick(&food_dirs)
            .or_else(|| self.pick(&safe_dirs))
            .or_else(|| self.pick(&fatal_dirs))
            .unwrap_or(Direction::Up);

        // Ability usage: Rockhoppers auto-arm the first time their chosen
        // direction faces a hazard; everyone else rolls the 30% chance.
        let use_ability = if penguin.ability_used {
            false
        } else if penguin.species == Species::Rockhopper {
            faces_hazard(state, origin, direction)
        } else {
            self.rng.next_u32(10) < ABILITY_CHANCE_IN_TEN
        };

        let royal_direction = if use_ability && penguin.species == Species::Royal {
            Some(self.safe_royal_step(state, origin))
        } else {
            None
        };

        TurnDecision {
            use_ability,
            direction,
            royal_direction,
        }
    }
}

impl AiDecider {
    /// A pre-step direction whose adjacent cell is in bounds and not a
    /// hazard, falling back to any direction when cornered.
    fn safe_royal_step(&mut self, state: &GameState, origin: Position) -> Direction {
        let safe: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|dir| {
                origin.step(*dir).is_some_and(|next| {
                    !matches!(state.grid().get(next), Some(TerrainObject::Hazard(_)))
                })
            })
            .collect();
        self.pick(&safe)
            .unwrap_or_else(|| Direction::ALL[self.rng.next_index(4)])
    }
}

/// Trace a slide without mutating anything and classify its destination.
fn simulate_slide(state: &GameState, origin: Position, direction: Direction) -> SlideOutcome {
    let mut cur = origin;
    loop {
        let Some(next) = cur.step(direction) else {
            return SlideOutcome::Fatal;
        };
        match state.grid().get(next) {
            None => cur = next,
            Some(TerrainObject::Food(_)) => return SlideOutcome::Food,
            Some(TerrainObject::Hazard(Hazard::Hole)) => return SlideOutcome::Fatal,
            Some(TerrainObject::Hazard(_) | TerrainObject::Penguin(_)) => {
                return SlideOutcome::Safe;
            }
        }
    }
}

/// Whether the first blocking object along `direction` is a hazard. Food in
/// the path is slid past for this purpose; a penguin blocks the view.
fn faces_hazard(state: &GameState, origin: Position, direction: Direction) -> bool {
    let mut cur = origin;
    loop {
        let Some(next) = cur.step(direction) else {
            return false;
        };
        match state.grid().get(next) {
            None | Some(TerrainObject::Food(_)) => cur = next,
            Some(TerrainObject::Hazard(_)) => return true,
            Some(TerrainObject::Penguin(_)) => return false,
        }
    }
}
