//! Game state: the grid, the penguin table, and the event log.

use crate::error::{EngineError, EngineResult};
use crate::game::event::GameEvent;
use crate::game::grid::{Grid, Position};
use crate::game::object::{Food, Hazard, TerrainObject};
use crate::game::penguin::{Penguin, PenguinId, Species};

/// Complete state of one game.
///
/// The grid is the source of truth for occupancy; penguin `position` fields
/// are mirrors maintained by the slide engine. Food weight is conserved:
/// carried + on-grid + crushed always equals the spawned total.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    grid: Grid,
    penguins: Vec<Penguin>,
    events: Vec<GameEvent>,
    spawned_food_weight: u32,
    crushed_food_weight: u32,
}

impl GameState {
    /// Create an empty state with no objects placed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new penguin and assign it the next id in spawn order.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is occupied.
    pub fn add_penguin(&mut self, species: Species, pos: Position) -> EngineResult<PenguinId> {
        #[allow(clippy::cast_possible_truncation)]
        let id = (self.penguins.len() + 1) as PenguinId;
        self.grid.place(pos, TerrainObject::Penguin(id))?;
        self.penguins.push(Penguin::new(id, species, pos));
        Ok(id)
    }

    /// Place a hazard.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is occupied.
    pub fn add_hazard(&mut self, hazard: Hazard, pos: Position) -> EngineResult<()> {
        self.grid.place(pos, TerrainObject::Hazard(hazard))
    }

    /// Place a food item, crediting the conservation ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is occupied.
    pub fn add_food(&mut self, food: Food, pos: Position) -> EngineResult<()> {
        self.grid.place(pos, TerrainObject::Food(food))?;
        self.spawned_food_weight += u32::from(food.weight);
        Ok(())
    }

    /// Mark a cell as a hole already plugged, for seeding boards that start
    /// mid-story. In play, plugs only appear when a mobile hazard falls in.
    pub fn add_plugged_hole(&mut self, pos: Position) {
        self.grid.set_plugged(pos);
    }

    /// Read access to the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// All penguins, in id order, including eliminated ones.
    #[must_use]
    pub fn penguins(&self) -> &[Penguin] {
        &self.penguins
    }

    /// Penguins still on the field.
    pub fn alive_penguins(&self) -> impl Iterator<Item = &Penguin> {
        self.penguins.iter().filter(|p| !p.is_eliminated())
    }

    /// Look up a penguin by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPenguin`] for an id never spawned.
    pub fn penguin(&self, id: PenguinId) -> EngineResult<&Penguin> {
        self.penguins
            .iter()
            .find(|p| p.id == id)
            .ok_or(EngineError::UnknownPenguin(id))
    }

    /// Mutable access to a penguin. The slide engine is the intended
    /// mutator; writing `position` directly desynchronizes the grid mirror
    /// and trips the invariant checks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPenguin`] for an id never spawned.
    pub fn penguin_mut(&mut self, id: PenguinId) -> EngineResult<&mut Penguin> {
        self.penguins
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EngineError::UnknownPenguin(id))
    }

    /// Mark a penguin as the human player's.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPenguin`] for an id never spawned.
    pub fn set_player(&mut self, id: PenguinId) -> EngineResult<()> {
        self.penguin_mut(id)?.is_player = true;
        Ok(())
    }

    /// The ordered log of everything observable that has happened.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Total food weight placed at spawn time.
    #[must_use]
    pub const fn spawned_food_weight(&self) -> u32 {
        self.spawned_food_weight
    }

    /// Total food weight destroyed by sliding hazards.
    #[must_use]
    pub const fn crushed_food_weight(&self) -> u32 {
        self.crushed_food_weight
    }

    pub(crate) fn note_crushed(&mut self, weight: u8) {
        self.crushed_food_weight += u32::from(weight);
    }

    /// Total food weight still lying on the grid.
    #[must_use]
    pub fn grid_food_weight(&self) -> u32 {
        self.grid
            .occupants()
            .filter_map(|(_, obj)| match obj {
                TerrainObject::Food(food) => Some(u32::from(food.weight)),
                _ => None,
            })
            .sum()
    }

    /// Total food weight carried by penguins, eliminated ones included.
    #[must_use]
    pub fn carried_food_weight(&self) -> u32 {
        self.penguins.iter().map(Penguin::carried_weight).sum()
    }

    /// Penguins ranked for the scoreboard: total carried weight descending,
    /// ties broken by id order (stable sort over the id-ordered table).
    #[must_use]
    pub fn standings(&self) -> Vec<&Penguin> {
        let mut ranked: Vec<&Penguin> = self.penguins.iter().collect();
        ranked.sort_by(|a, b| b.carried_weight().cmp(&a.carried_weight()));
        ranked
    }
}
