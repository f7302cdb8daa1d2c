//! Positions, directions, and the occupancy grid.

use std::fmt;

use crate::game::object::TerrainObject;

/// Side length of the square ice field.
pub const GRID_SIZE: u8 = 10;

/// A bounded coordinate on the ice field.
///
/// Out-of-bounds coordinates are water and cannot be represented; every
/// movement step pre-checks bounds before a new `Position` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Create a position, or `None` if either coordinate is off the field.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// X coordinate (column).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Y coordinate (row).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// The neighbouring position one cell in `direction`, or `None` if that
    /// cell is water.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let nx = self.x as i16 + dx as i16;
        let ny = self.y as i16 + dy as i16;
        if nx < 0 || ny < 0 || nx >= GRID_SIZE as i16 || ny >= GRID_SIZE as i16 {
            None
        } else {
            Some(Self {
                x: nx as u8,
                y: ny as u8,
            })
        }
    }

    /// Whether this position lies on the outer ring of the field.
    #[must_use]
    pub const fn on_perimeter(self) -> bool {
        self.x == 0 || self.y == 0 || self.x == GRID_SIZE - 1 || self.y == GRID_SIZE - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal slide directions.
///
/// `Up` decreases y, `Down` increases y, `Left` decreases x, `Right`
/// increases x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 9.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 9.
    Right,
}

impl Direction {
    /// All four directions, in a fixed order used for deterministic iteration.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        write!(f, "{name}")
    }
}

/// A single cell of the field: at most one occupant, plus a flag marking a
/// hole that has been plugged by a mobile hazard.
///
/// The plug is terrain, not an occupant: actors and mobile hazards can
/// legally stop on the cell (the plugged hole "behaves as empty"), and the
/// one-occupant-per-cell invariant must keep holding when they do.
#[derive(Debug, Clone, Default)]
struct Cell {
    occupant: Option<TerrainObject>,
    plugged: bool,
}

/// The 10×10 occupancy map. Source of truth for where every object is;
/// object `position` mirrors are maintained by the engine.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        let size = usize::from(GRID_SIZE) * usize::from(GRID_SIZE);
        Self {
            cells: vec![Cell::default(); size],
        }
    }

    fn index(pos: Position) -> usize {
        usize::from(pos.y()) * usize::from(GRID_SIZE) + usize::from(pos.x())
    }

    /// Get the occupant of a cell, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&TerrainObject> {
        self.cells[Self::index(pos)].occupant.as_ref()
    }

    /// Place an object on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOccupied`](crate::EngineError::CellOccupied)
    /// if the cell already holds an object; the grid is unchanged.
    pub fn place(
        &mut self,
        pos: Position,
        object: TerrainObject,
    ) -> crate::EngineResult<()> {
        let cell = &mut self.cells[Self::index(pos)];
        if cell.occupant.is_some() {
            return Err(crate::EngineError::CellOccupied { pos });
        }
        cell.occupant = Some(object);
        Ok(())
    }

    /// Remove and return the occupant of a cell. Idempotent on empty cells.
    pub fn remove(&mut self, pos: Position) -> Option<TerrainObject> {
        self.cells[Self::index(pos)].occupant.take()
    }

    /// Whether the cell carries a plugged hole under its occupant (if any).
    #[must_use]
    pub fn is_plugged(&self, pos: Position) -> bool {
        self.cells[Self::index(pos)].plugged
    }

    /// Mark the cell as holding a plugged hole.
    pub(crate) fn set_plugged(&mut self, pos: Position) {
        self.cells[Self::index(pos)].plugged = true;
    }

    /// Iterate over all occupied cells.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &TerrainObject)> {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            #[allow(clippy::cast_possible_truncation)]
            let x = (idx % usize::from(GRID_SIZE)) as u8;
            #[allow(clippy::cast_possible_truncation)]
            let y = (idx / usize::from(GRID_SIZE)) as u8;
            let pos = Position::new(x, y)?;
            cell.occupant.as_ref().map(|obj| (pos, obj))
        })
    }

    /// Count the occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupant.is_some()).count()
    }
}
