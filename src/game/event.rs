//! Observable game events.
//!
//! Every outcome a player can see — eliminations, stuns, pickups, plugs,
//! destructions — is pushed onto the game state's event log in the order it
//! occurs during slide recursion. Expected game events are never errors.

use crate::game::grid::{Direction, Position};
use crate::game::object::{Food, Hazard};
use crate::game::penguin::PenguinId;

/// How a penguin left the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationCause {
    /// Slid off the edge of the ice.
    Water,
    /// Fell into an unplugged hole.
    Hole,
}

/// One observable outcome during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A penguin began sliding (including transferred momentum and bounces).
    SlideStarted {
        /// The sliding penguin.
        penguin: PenguinId,
        /// Slide direction.
        direction: Direction,
    },
    /// A stunned penguin skipped its turn; the stun is now cleared.
    StunSkipped {
        /// The skipping penguin.
        penguin: PenguinId,
    },
    /// A penguin armed its once-per-game ability.
    AbilityArmed {
        /// The arming penguin.
        penguin: PenguinId,
    },
    /// A capped slide stopped early on an empty cell.
    StoppedShort {
        /// The stopping penguin.
        penguin: PenguinId,
        /// Where it stopped.
        at: Position,
    },
    /// A penguin picked up food and stopped.
    FoodCollected {
        /// The collecting penguin.
        penguin: PenguinId,
        /// The collected item.
        food: Food,
    },
    /// A penguin lost its lightest food to a heavy ice block.
    FoodDropped {
        /// The penalized penguin.
        penguin: PenguinId,
        /// The lost item.
        food: Food,
    },
    /// A sliding hazard crushed a food item.
    FoodCrushed {
        /// The sliding hazard.
        hazard: Hazard,
        /// The destroyed item.
        food: Food,
    },
    /// A penguin was stunned by a light ice block.
    Stunned {
        /// The stunned penguin.
        penguin: PenguinId,
    },
    /// A slide ended against another penguin, which now slides instead.
    MomentumTransfer {
        /// The stopping penguin.
        from: PenguinId,
        /// The penguin that inherits the slide.
        to: PenguinId,
        /// Slide direction.
        direction: Direction,
    },
    /// A penguin bounced off a sea lion and will slide back.
    Bounced {
        /// The bounced penguin.
        penguin: PenguinId,
        /// The reversed direction it will slide in.
        direction: Direction,
    },
    /// A penguin jumped clean over a hazard.
    JumpSucceeded {
        /// The jumping penguin.
        penguin: PenguinId,
        /// The hazard left untouched behind it.
        over: Hazard,
        /// The cell it came down on.
        landing: Position,
    },
    /// A jump failed because the landing cell was occupied.
    JumpFailed {
        /// The jumping penguin.
        penguin: PenguinId,
        /// The hazard it then collides with normally.
        over: Hazard,
    },
    /// A penguin left the game. Its inventory still counts for scoring.
    Eliminated {
        /// The eliminated penguin.
        penguin: PenguinId,
        /// What removed it.
        cause: EliminationCause,
    },
    /// A mobile hazard slid off the edge of the ice.
    HazardDrowned {
        /// The destroyed hazard.
        hazard: Hazard,
    },
    /// A mobile hazard fell into a hole and plugged it, destroying itself.
    HolePlugged {
        /// The consumed hazard.
        hazard: Hazard,
        /// The plugged cell.
        at: Position,
    },
}
