//! Output formatting utilities for CLI.

use floe::session::GameResult;
use serde::Serialize;

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Final standings, best first.
    pub(super) standings: Vec<JsonStanding>,
}

/// JSON-serializable scoreboard entry.
#[derive(Debug, Serialize)]
pub(super) struct JsonStanding {
    /// Penguin id (1-3).
    pub(super) id: u8,
    /// Species name.
    pub(super) species: String,
    /// Whether this was the player's penguin.
    pub(super) is_player: bool,
    /// Whether the penguin was eliminated.
    pub(super) eliminated: bool,
    /// Collected food as "Kr:3" entries, in pickup order.
    pub(super) foods: Vec<String>,
    /// Total carried weight.
    pub(super) total_weight: u32,
}

impl JsonGameResult {
    /// Create from a `GameResult`.
    pub(super) fn from_game_result(result: &GameResult) -> Self {
        Self {
            seed: result.seed,
            standings: result
                .standings
                .iter()
                .map(|s| JsonStanding {
                    id: s.id,
                    species: s.species.name().to_string(),
                    is_player: s.is_player,
                    eliminated: s.eliminated,
                    foods: s
                        .foods
                        .iter()
                        .map(|f| format!("{}:{}", f.kind.notation(), f.weight))
                        .collect(),
                    total_weight: s.total_weight,
                })
                .collect(),
        }
    }
}

/// Format a game result as a short human-readable summary.
pub(super) fn format_text(result: &GameResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {})\n", result.seed));
    for (i, standing) in result.standings.iter().enumerate() {
        let marker = if standing.is_player { " [player]" } else { "" };
        let fate = if standing.eliminated {
            " (eliminated)"
        } else {
            ""
        };
        output.push_str(&format!(
            "  {}. P{} {}{}: {} units{}\n",
            i + 1,
            standing.id,
            standing.species.name(),
            marker,
            standing.total_weight,
            fate
        ));
    }

    output
}
