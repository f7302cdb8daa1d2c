//! Run command implementation - a single AI-only game.

use super::{output, CliError, OutputFormat};
use floe::render;
use floe::session::{AiDecider, Session, SessionConfig};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the engine aborts or JSON encoding fails.
pub(crate) fn execute(
    seed: u64,
    rounds: u8,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let config = SessionConfig { rounds };
    let mut decider = AiDecider::new(seed ^ 0x00C0_FFEE);

    let mut session = Session::new(seed, config, &mut decider)?;

    if !quiet && format == OutputFormat::Text {
        println!("Initial icy terrain (seed {seed}):");
        println!("{}", render::render_board(session.state()));
    }

    while let Some(report) = session.tick()? {
        if !quiet && format == OutputFormat::Text {
            println!("*** Turn {} - P{}:", report.round, report.penguin);
            for event in &report.events {
                println!("{}", render::narrate(*event));
            }
            println!("{}", render::render_board(session.state()));
        }
    }

    let result = session.into_result();
    match format {
        OutputFormat::Text => {
            println!("{}", render::render_scoreboard(&result.standings));
            println!("{}", output::format_text(&result));
        }
        OutputFormat::Json => {
            let json = output::JsonGameResult::from_game_result(&result);
            let encoded = serde_json::to_string_pretty(&json)
                .map_err(|e| CliError::new(format!("JSON encoding failed: {e}")))?;
            println!("{encoded}");
        }
    }

    Ok(())
}
