//! Penguin state.

use crate::game::grid::Position;
use crate::game::object::Food;

/// Identifier for a penguin, 1-indexed in spawn order (P1, P2, P3).
pub type PenguinId = u8;

/// The four penguin species and their abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// May cap a slide at five empty-cell moves.
    King,
    /// May cap a slide at three empty-cell moves.
    Emperor,
    /// May take a one-cell pre-step before the slide.
    Royal,
    /// May jump the first hazard in the slide path.
    Rockhopper,
}

impl Species {
    /// All species, for uniform spawning draws.
    pub const ALL: [Species; 4] = [
        Species::King,
        Species::Emperor,
        Species::Royal,
        Species::Rockhopper,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Species::King => "King",
            Species::Emperor => "Emperor",
            Species::Royal => "Royal",
            Species::Rockhopper => "Rockhopper",
        }
    }

    /// Empty-cell move cap granted by the bounded-stop ability, if this
    /// species has one.
    #[must_use]
    pub const fn step_cap(self) -> Option<u8> {
        match self {
            Species::King => Some(5),
            Species::Emperor => Some(3),
            Species::Royal | Species::Rockhopper => None,
        }
    }
}

/// A penguin: the only kind of actor.
///
/// Owned by the game state; grid cells refer to it by id. `position` mirrors
/// the grid cell holding this penguin's id and is `None` once eliminated.
/// Eliminated penguins keep their inventory for final scoring.
#[derive(Debug, Clone)]
pub struct Penguin {
    /// Identifier, 1-indexed in spawn order.
    pub id: PenguinId,
    /// Species, fixed at spawn.
    pub species: Species,
    /// Current cell, or `None` if eliminated.
    pub position: Option<Position>,
    /// Collected food, in pickup order.
    pub inventory: Vec<Food>,
    /// Whether the next turn is skipped.
    pub stunned: bool,
    /// Whether the once-per-game ability has been consumed.
    pub ability_used: bool,
    /// Whether this penguin is controlled by the human player.
    pub is_player: bool,
}

impl Penguin {
    /// Create a penguin at its spawn cell.
    #[must_use]
    pub const fn new(id: PenguinId, species: Species, position: Position) -> Self {
        Self {
            id,
            species,
            position: Some(position),
            inventory: Vec::new(),
            stunned: false,
            ability_used: false,
            is_player: false,
        }
    }

    /// Whether this penguin has been removed from the field.
    #[must_use]
    pub const fn is_eliminated(&self) -> bool {
        self.position.is_none()
    }

    /// Total weight of the carried food.
    #[must_use]
    pub fn carried_weight(&self) -> u32 {
        self.inventory.iter().map(|f| u32::from(f.weight)).sum()
    }

    /// Remove and return the lightest carried food item; the first such item
    /// wins ties. Returns `None` on an empty inventory.
    pub fn remove_lightest_food(&mut self) -> Option<Food> {
        let idx = self
            .inventory
            .iter()
            .enumerate()
            .min_by_key(|(_, f)| f.weight)
            .map(|(i, _)| i)?;
        Some(self.inventory.remove(idx))
    }

    /// Grid notation ("P1").
    #[must_use]
    pub fn notation(&self) -> String {
        format!("P{}", self.id)
    }
}
