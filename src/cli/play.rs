//! Play command implementation - interactive game with one human penguin.

use std::io::{self, Write as _};

use super::CliError;
use floe::game::{Direction, GameState, PenguinId, Species};
use floe::render;
use floe::session::{AiDecider, Decider, Session, SessionConfig, TurnDecision};

/// Routes the player's penguin to stdin prompts and everyone else to the AI.
struct PlayDecider {
    ai: AiDecider,
}

impl Decider for PlayDecider {
    fn decide(&mut self, state: &GameState, id: PenguinId, round: u8) -> TurnDecision {
        let Ok(penguin) = state.penguin(id) else {
            return TurnDecision::plain(Direction::Up);
        };
        if !penguin.is_player {
            return self.ai.decide(state, id, round);
        }

        println!("YOUR PENGUIN (P{id}, {} Penguin)", penguin.species.name());
        let use_ability = if penguin.ability_used {
            println!("P{id} has already used its special action.");
            false
        } else {
            prompt_yes_no(&format!(
                "Will P{id} use its special action? Answer with Y or N: "
            ))
        };

        let royal_direction = if use_ability && penguin.species == Species::Royal {
            Some(prompt_direction(
                "Which direction for the special move? Answer with U (Up), D (Down), L (Left), R (Right): ",
            ))
        } else {
            None
        };

        let direction = prompt_direction(&format!(
            "Which direction will P{id} move? Answer with U (Up), D (Down), L (Left), R (Right): "
        ));

        TurnDecision {
            use_ability,
            direction,
            royal_direction,
        }
    }
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the engine aborts.
pub(crate) fn execute(seed: u64, rounds: u8) -> Result<(), CliError> {
    let config = SessionConfig { rounds };
    let mut decider = PlayDecider {
        ai: AiDecider::new(seed ^ 0x00C0_FFEE),
    };

    let mut session = Session::new(seed, config, &mut decider)?;

    println!("Welcome to the Sliding Penguins puzzle. A 10x10 icy terrain has been generated.");
    println!("The initial icy terrain grid:");
    println!("{}", render::render_board(session.state()));

    println!("These are the penguins on the icy terrain:");
    for penguin in session.state().penguins() {
        let marker = if penguin.is_player {
            " - YOUR PENGUIN"
        } else {
            ""
        };
        println!(
            "- P{} ({} Penguin){marker}",
            penguin.id,
            penguin.species.name()
        );
    }

    while let Some(report) = session.tick()? {
        println!();
        println!("*** Turn {} - P{}:", report.round, report.penguin);
        for event in &report.events {
            println!("{}", render::narrate(*event));
        }
        println!("New state of the grid:");
        println!("{}", render::render_board(session.state()));
    }

    println!("***** GAME OVER *****");
    let result = session.into_result();
    println!("{}", render::render_scoreboard(&result.standings));

    Ok(())
}

/// Ask a yes/no question, re-prompting until the answer parses. Answers
/// "no" if stdin closes.
fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        let Some(answer) = read_answer(prompt) else {
            return false;
        };
        match answer.to_uppercase().as_str() {
            "Y" | "YES" => return true,
            "N" | "NO" => return false,
            _ => println!("Please answer with Y or N."),
        }
    }
}

/// Ask for a direction, re-prompting until the answer parses. Picks Up if
/// stdin closes.
fn prompt_direction(prompt: &str) -> Direction {
    loop {
        let Some(answer) = read_answer(prompt) else {
            return Direction::Up;
        };
        match answer.to_uppercase().as_str() {
            "U" | "UP" => return Direction::Up,
            "D" | "DOWN" => return Direction::Down,
            "L" | "LEFT" => return Direction::Left,
            "R" | "RIGHT" => return Direction::Right,
            _ => println!("Please answer with U, D, L or R."),
        }
    }
}

/// Read one trimmed line, or `None` on EOF or a read error.
fn read_answer(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
