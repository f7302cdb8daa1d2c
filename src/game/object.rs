//! Terrain objects: food, hazards, and the cell-level tagged union.

use std::fmt;

use crate::game::penguin::PenguinId;

/// The five kinds of food that spawn on the ice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    /// Kr
    Krill,
    /// Cr
    Crustacean,
    /// An
    Anchovy,
    /// Sq
    Squid,
    /// Ma
    Mackerel,
}

impl FoodKind {
    /// All food kinds, for uniform spawning draws.
    pub const ALL: [FoodKind; 5] = [
        FoodKind::Krill,
        FoodKind::Crustacean,
        FoodKind::Anchovy,
        FoodKind::Squid,
        FoodKind::Mackerel,
    ];

    /// Two-character grid notation.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            FoodKind::Krill => "Kr",
            FoodKind::Crustacean => "Cr",
            FoodKind::Anchovy => "An",
            FoodKind::Squid => "Sq",
            FoodKind::Mackerel => "Ma",
        }
    }

    /// Full display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FoodKind::Krill => "Krill",
            FoodKind::Crustacean => "Crustacean",
            FoodKind::Anchovy => "Anchovy",
            FoodKind::Squid => "Squid",
            FoodKind::Mackerel => "Mackerel",
        }
    }
}

/// A food item. Immutable after creation; destroyed when collected by a
/// penguin or crushed by a sliding hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Food {
    /// What kind of food this is.
    pub kind: FoodKind,
    /// Weight in units, 1..=5.
    pub weight: u8,
}

impl Food {
    /// Create a food item.
    #[must_use]
    pub const fn new(kind: FoodKind, weight: u8) -> Self {
        Self { kind, weight }
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} units)", self.kind.name(), self.weight)
    }
}

/// A hazard on the ice. The collision semantics live in the slide engine;
/// this enum carries only identity and mobility.
///
/// A *plugged* hole is not a hazard occupant: plugging removes the hole from
/// the cell and marks the cell terrain instead (see
/// [`Grid::is_plugged`](crate::game::Grid::is_plugged)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    /// Mobile block; stuns the penguin that hits it.
    LightIce,
    /// Stationary block; costs the colliding penguin its lightest food.
    HeavyIce,
    /// Mobile; bounces the penguin backward and slides forward itself.
    SeaLion,
    /// Stationary unplugged hole; eliminates penguins, consumes mobile
    /// hazards to become plugged.
    Hole,
}

impl Hazard {
    /// All hazard kinds, for uniform spawning draws.
    pub const ALL: [Hazard; 4] = [
        Hazard::LightIce,
        Hazard::HeavyIce,
        Hazard::SeaLion,
        Hazard::Hole,
    ];

    /// Whether this hazard slides when struck.
    #[must_use]
    pub const fn can_slide(self) -> bool {
        matches!(self, Hazard::LightIce | Hazard::SeaLion)
    }

    /// Two-character grid notation.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Hazard::LightIce => "LB",
            Hazard::HeavyIce => "HB",
            Hazard::SeaLion => "SL",
            Hazard::Hole => "HI",
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hazard::LightIce => "Light Ice Block",
            Hazard::HeavyIce => "Heavy Ice Block",
            Hazard::SeaLion => "Sea Lion",
            Hazard::Hole => "Hole In Ice",
        };
        write!(f, "{name}")
    }
}

/// Notation for a plugged hole, rendered from the cell terrain flag.
pub const PLUGGED_NOTATION: &str = "PH";

/// What a grid cell can hold. Penguins are stored by id; their state lives
/// in the game state's penguin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainObject {
    /// A penguin, by id.
    Penguin(PenguinId),
    /// A food item.
    Food(Food),
    /// A hazard.
    Hazard(Hazard),
}

impl TerrainObject {
    /// Two-character grid notation.
    #[must_use]
    pub fn notation(&self) -> String {
        match self {
            TerrainObject::Penguin(id) => format!("P{id}"),
            TerrainObject::Food(food) => food.kind.notation().to_string(),
            TerrainObject::Hazard(hazard) => hazard.notation().to_string(),
        }
    }
}
