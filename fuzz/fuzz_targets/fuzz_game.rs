#![no_main]

//! Full game fuzzer.
//!
//! Runs complete seeded games with a fuzzer-scripted decider (arbitrary
//! directions and ability requests), checking the scheduler's accounting:
//! invariants after every turn, abilities armed at most once, and the
//! scoreboard sorted with stable ties.

use arbitrary::Arbitrary;
use floe::game::{check_invariants, GameEvent, GameState, PenguinId};
use floe::session::{Decider, Session, SessionConfig, TurnDecision};
use floe::Direction;
use libfuzzer_sys::fuzz_target;

/// Structured input for game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    seed: u64,
    rounds: u8,
    script: Vec<(u8, bool, Option<u8>)>,
}

/// Replays fuzzer-chosen decisions, falling back to Up when exhausted.
struct FuzzDecider {
    script: Vec<(u8, bool, Option<u8>)>,
    cursor: usize,
}

impl Decider for FuzzDecider {
    fn decide(&mut self, _state: &GameState, _id: PenguinId, _round: u8) -> TurnDecision {
        let (dir, use_ability, royal) = self
            .script
            .get(self.cursor)
            .copied()
            .unwrap_or((0, false, None));
        self.cursor += 1;
        TurnDecision {
            use_ability,
            direction: Direction::ALL[dir as usize % Direction::ALL.len()],
            royal_direction: royal.map(|r| Direction::ALL[r as usize % Direction::ALL.len()]),
        }
    }
}

fuzz_target!(|input: GameInput| {
    let rounds = (input.rounds % 8).max(1);
    let mut decider = FuzzDecider {
        script: input.script,
        cursor: 0,
    };

    let mut session = match Session::new(input.seed, SessionConfig { rounds }, &mut decider) {
        Ok(s) => s,
        Err(e) => panic!("spawn failed: {e}"),
    };

    let mut turns = 0u32;
    while let Some(report) = session.tick().expect("tick must not error") {
        turns += 1;
        assert!(report.round <= rounds);

        let violations = check_invariants(session.state());
        assert!(violations.is_empty(), "invariants broken: {violations:?}");
    }
    assert!(turns <= u32::from(rounds) * 3);

    let result = session.into_result();

    // Abilities armed at most once per penguin
    for id in 1u8..=3 {
        let armed = result
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::AbilityArmed { penguin } if *penguin == id))
            .count();
        assert!(armed <= 1, "P{id} armed {armed} times");
    }

    // Scoreboard sorted, ties in id order
    for pair in result.standings.windows(2) {
        assert!(pair[0].total_weight >= pair[1].total_weight);
        if pair[0].total_weight == pair[1].total_weight {
            assert!(pair[0].id < pair[1].id);
        }
    }
});
