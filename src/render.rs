//! Text rendering: the board, the scoreboard, and event narration.

use std::fmt::Write as _;

use crate::game::{
    Direction, EliminationCause, GameEvent, GameState, Position, GRID_SIZE, PLUGGED_NOTATION,
};
use crate::session::FinalStanding;

/// Width of the content inside one cell.
const CELL_WIDTH: usize = 4;

/// Render the board as a bordered grid of two-character notations.
///
/// Empty cells are blank; a cell whose plugged hole is currently covered by
/// an actor or hazard shows the occupant, and shows `PH` again once vacated.
#[must_use]
pub fn render_board(state: &GameState) -> String {
    let border = horizontal_border();
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');

    for y in 0..GRID_SIZE {
        out.push('|');
        for x in 0..GRID_SIZE {
            let Some(pos) = Position::new(x, y) else {
                continue;
            };
            let symbol = cell_symbol(state, pos);
            out.push_str(&center(&symbol));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }

    out
}

fn cell_symbol(state: &GameState, pos: Position) -> String {
    match state.grid().get(pos) {
        Some(obj) => obj.notation(),
        None if state.grid().is_plugged(pos) => PLUGGED_NOTATION.to_string(),
        None => String::new(),
    }
}

fn horizontal_border() -> String {
    let mut border = String::from("+");
    for _ in 0..GRID_SIZE {
        border.push_str(&"-".repeat(CELL_WIDTH));
        border.push('+');
    }
    border
}

fn center(s: &str) -> String {
    if s.len() >= CELL_WIDTH {
        return s[..CELL_WIDTH].to_string();
    }
    let pad = CELL_WIDTH - s.len();
    let left = pad / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(pad - left))
}

/// Render the final scoreboard: rank, player marker, items, total weight.
#[must_use]
pub fn render_scoreboard(standings: &[FinalStanding]) -> String {
    let mut out = String::from("***** SCOREBOARD FOR THE PENGUINS *****\n");

    for (i, standing) in standings.iter().enumerate() {
        let rank = i + 1;
        let marker = if standing.is_player {
            " (Your Penguin)"
        } else {
            ""
        };
        let _ = writeln!(out, "* {}{} place: P{}{}", rank, suffix(rank), standing.id, marker);

        let items = if standing.foods.is_empty() {
            "None".to_string()
        } else {
            standing
                .foods
                .iter()
                .map(|f| format!("{} ({} units)", f.kind.notation(), f.weight))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "  |---> Food items: {items}");
        let _ = writeln!(out, "  |---> Total weight: {} units", standing.total_weight);
    }

    out
}

const fn suffix(rank: usize) -> &'static str {
    match rank {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

const fn direction_phrase(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "UPWARDS",
        Direction::Down => "DOWNWARDS",
        Direction::Left => "to the LEFT",
        Direction::Right => "to the RIGHT",
    }
}

/// One narration line per event, in the voice of the original game.
#[must_use]
pub fn narrate(event: GameEvent) -> String {
    match event {
        GameEvent::SlideStarted { penguin, direction } => {
            format!("P{penguin} starts sliding {}!", direction_phrase(direction))
        }
        GameEvent::StunSkipped { penguin } => {
            format!("P{penguin} is stunned and skips this turn!")
        }
        GameEvent::AbilityArmed { penguin } => {
            format!("P{penguin} chooses to USE its special action.")
        }
        GameEvent::StoppedShort { penguin, .. } => {
            format!("P{penguin} stops at an empty square using its special action.")
        }
        GameEvent::FoodCollected { penguin, food } => format!(
            "P{penguin} takes the {} on the ground. (Weight={} units)",
            food.kind.name(),
            food.weight
        ),
        GameEvent::FoodDropped { penguin, food } => format!(
            "P{penguin} loses {} ({} units) due to collision!",
            food.kind.notation(),
            food.weight
        ),
        GameEvent::FoodCrushed { hazard, food } => format!(
            "{} destroys {}!",
            hazard.notation(),
            food.kind.notation()
        ),
        GameEvent::Stunned { penguin } => {
            format!("P{penguin} is stunned by hitting the ice block!")
        }
        GameEvent::MomentumTransfer { from, to, .. } => {
            format!("P{from} collides with P{to}!")
        }
        GameEvent::Bounced { penguin, direction } => {
            format!("P{penguin} bounces {}!", direction_phrase(direction))
        }
        GameEvent::JumpSucceeded { penguin, over, .. } => {
            format!("P{penguin} successfully jumps over {}!", over.notation())
        }
        GameEvent::JumpFailed { penguin, .. } => {
            format!("P{penguin} fails to jump - landing spot is not empty!")
        }
        GameEvent::Eliminated { penguin, cause } => match cause {
            EliminationCause::Water => format!("P{penguin} falls into the water!"),
            EliminationCause::Hole => format!("P{penguin} falls into HI!"),
        },
        GameEvent::HazardDrowned { hazard } => {
            format!("{} falls into the water!", hazard.notation())
        }
        GameEvent::HolePlugged { hazard, .. } => {
            format!("{} falls into HI and plugs it!", hazard.notation())
        }
    }
}
