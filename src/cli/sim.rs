//! Sim command implementation - mass parallel games with aggregate stats.

use std::collections::BTreeMap;

use super::{CliError, SimFormat};
use floe::game::Species;
use floe::session::{run_game, AiDecider, GameResult, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

/// Aggregated statistics over a batch of games.
#[derive(Debug, Default, Serialize)]
struct SimStats {
    games: u64,
    /// Wins per species name (winner = top of the scoreboard).
    wins_by_species: BTreeMap<String, u64>,
    /// Total eliminations across all games.
    eliminations: u64,
    /// Games where every penguin was eliminated.
    wipeouts: u64,
    /// Mean of the winning penguin's carried weight.
    mean_winning_weight: f64,
    /// Mean food weight destroyed by hazards per game.
    mean_crushed_weight: f64,
}

impl SimStats {
    fn accumulate(results: &[GameResult]) -> Self {
        let mut stats = SimStats {
            games: results.len() as u64,
            ..SimStats::default()
        };

        let mut winning_weight_total = 0u64;
        let mut crushed_total = 0u64;
        for result in results {
            if let Some(winner) = result.standings.first() {
                *stats
                    .wins_by_species
                    .entry(winner.species.name().to_string())
                    .or_default() += 1;
                winning_weight_total += u64::from(winner.total_weight);
            }
            let eliminated = result.standings.iter().filter(|s| s.eliminated).count() as u64;
            stats.eliminations += eliminated;
            if eliminated == result.standings.len() as u64 {
                stats.wipeouts += 1;
            }
            crushed_total += u64::from(crushed_weight(result));
        }

        #[allow(clippy::cast_precision_loss)]
        if stats.games > 0 {
            stats.mean_winning_weight = winning_weight_total as f64 / stats.games as f64;
            stats.mean_crushed_weight = crushed_total as f64 / stats.games as f64;
        }
        stats
    }
}

fn crushed_weight(result: &GameResult) -> u32 {
    result
        .events
        .iter()
        .filter_map(|e| match e {
            floe::game::GameEvent::FoodCrushed { food, .. } => Some(u32::from(food.weight)),
            _ => None,
        })
        .sum()
}

/// Execute the sim command.
///
/// # Errors
///
/// Returns an error if any game aborts or JSON encoding fails.
pub(crate) fn execute(
    games: u64,
    base_seed: u64,
    rounds: u8,
    format: SimFormat,
) -> Result<(), CliError> {
    let config = SessionConfig { rounds };

    let bar = ProgressBar::new(games);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let results: Result<Vec<GameResult>, CliError> = (0..games)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(i);
            let mut decider = AiDecider::new(seed ^ 0x00C0_FFEE);
            let result = run_game(seed, config, &mut decider).map_err(CliError::from);
            bar.inc(1);
            result
        })
        .collect();
    bar.finish_and_clear();

    let results = results?;
    let stats = SimStats::accumulate(&results);

    match format {
        SimFormat::Text => {
            println!("Simulated {} games (seeds {base_seed}..)", stats.games);
            println!("  Wins by species:");
            for species in Species::ALL {
                let wins = stats
                    .wins_by_species
                    .get(species.name())
                    .copied()
                    .unwrap_or(0);
                println!("    {:<11} {wins}", species.name());
            }
            println!("  Eliminations: {}", stats.eliminations);
            println!("  Full wipeouts: {}", stats.wipeouts);
            println!("  Mean winning weight: {:.2}", stats.mean_winning_weight);
            println!("  Mean crushed weight: {:.2}", stats.mean_crushed_weight);
        }
        SimFormat::Json => {
            let encoded = serde_json::to_string_pretty(&stats)
                .map_err(|e| CliError::new(format!("JSON encoding failed: {e}")))?;
            println!("{encoded}");
        }
    }

    Ok(())
}
