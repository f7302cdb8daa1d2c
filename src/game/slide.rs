//! The slide-and-collide engine.
//!
//! An actor slides frictionlessly cell by cell until a stopping event
//! resolves. Collisions cascade by direct call-stack recursion: a penguin
//! struck by a slider inherits the momentum, a sea lion bounces its victim
//! backward while sliding forward itself, and mobile hazards take their own
//! secondary slides. Recursion depth is bounded by the grid diameter times
//! the number of actors.
//!
//! Species abilities modify a single slide through [`SlideFx`]: a step cap
//! (King 5, Emperor 3, and the Royal pre-step as a one-cell cap) or an armed
//! hazard jump (Rockhopper). The cap counts only moves onto empty cells; any
//! other stopping event discards it.

use crate::error::EngineResult;
use crate::game::event::{EliminationCause, GameEvent};
use crate::game::grid::{Direction, Position};
use crate::game::object::{Hazard, TerrainObject};
use crate::game::penguin::PenguinId;
use crate::game::state::GameState;
use crate::EngineError;

/// Per-slide ability modifiers. [`SlideFx::NONE`] is a plain slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideFx {
    /// Stop after this many moves onto empty cells.
    pub step_cap: Option<u8>,
    /// The first hazard cell in the path may be jumped.
    pub jump_armed: bool,
}

impl SlideFx {
    /// No ability in effect.
    pub const NONE: SlideFx = SlideFx {
        step_cap: None,
        jump_armed: false,
    };

    /// A capped slide of `cap` empty-cell moves.
    #[must_use]
    pub const fn capped(cap: u8) -> Self {
        SlideFx {
            step_cap: Some(cap),
            jump_armed: false,
        }
    }

    /// A slide with the hazard jump armed.
    #[must_use]
    pub const fn jump() -> Self {
        SlideFx {
            step_cap: None,
            jump_armed: true,
        }
    }
}

/// Slide a penguin with no ability in effect.
///
/// # Errors
///
/// Returns an error for an eliminated or unknown actor, or if an invariant
/// breaks mid-cascade.
pub fn slide(state: &mut GameState, id: PenguinId, direction: Direction) -> EngineResult<()> {
    slide_with(state, id, direction, SlideFx::NONE)
}

/// Slide a penguin with ability modifiers in effect.
///
/// Steps outward from the penguin's cell and resolves the first stopping
/// event. Transferred and bounced slides triggered along the way resolve
/// fully before this returns; events land in the log in occurrence order.
///
/// # Errors
///
/// Returns an error for an eliminated or unknown actor, or if an invariant
/// breaks mid-cascade.
pub fn slide_with(
    state: &mut GameState,
    id: PenguinId,
    direction: Direction,
    fx: SlideFx,
) -> EngineResult<()> {
    let Some(mut cur) = state.penguin(id)?.position else {
        return Err(EngineError::EliminatedActor(id));
    };
    state.push_event(GameEvent::SlideStarted {
        penguin: id,
        direction,
    });

    let mut fx = fx;
    let mut empty_moves = 0u8;

    loop {
        let Some(next) = cur.step(direction) else {
            // Off the edge: open water.
            return eliminate(state, id, cur, EliminationCause::Water);
        };

        match state.grid().get(next).copied() {
            None => {
                // Empty ice, or a plugged hole behaving as empty.
                advance(state, id, cur, next)?;
                cur = next;
                if let Some(cap) = fx.step_cap {
                    empty_moves += 1;
                    if empty_moves >= cap {
                        state.push_event(GameEvent::StoppedShort {
                            penguin: id,
                            at: next,
                        });
                        return Ok(());
                    }
                }
            }
            Some(TerrainObject::Food(food)) => {
                state.grid_mut().remove(next);
                advance(state, id, cur, next)?;
                state.penguin_mut(id)?.inventory.push(food);
                state.push_event(GameEvent::FoodCollected { penguin: id, food });
                return Ok(());
            }
            Some(TerrainObject::Penguin(other)) => {
                // Stop here; the struck penguin inherits the momentum.
                state.push_event(GameEvent::MomentumTransfer {
                    from: id,
                    to: other,
                    direction,
                });
                return slide_with(state, other, direction, SlideFx::NONE);
            }
            Some(TerrainObject::Hazard(hazard)) => {
                if fx.jump_armed {
                    // Armed or not after this point, the jump is spent.
                    fx.jump_armed = false;
                    match attempt_jump(state, id, cur, next, hazard, direction)? {
                        JumpOutcome::Landed(landing) => {
                            cur = landing;
                            continue;
                        }
                        JumpOutcome::Ended => return Ok(()),
                        JumpOutcome::Blocked => {}
                    }
                }
                return collide_hazard(state, id, cur, next, hazard, direction);
            }
        }
    }
}

/// Result of a Rockhopper jump attempt.
enum JumpOutcome {
    /// Came down on `landing`; the slide continues from there.
    Landed(Position),
    /// The jump ended the slide (food landing, hole landing, water).
    Ended,
    /// Landing cell occupied; normal hazard collision applies.
    Blocked,
}

/// Try to jump the hazard at `hazard_cell`. The landing cell one beyond is
/// entered exactly as a normal slide arrival would enter it; only a landing
/// cell occupied by a penguin or a solid hazard blocks the jump.
fn attempt_jump(
    state: &mut GameState,
    id: PenguinId,
    cur: Position,
    hazard_cell: Position,
    hazard: Hazard,
    direction: Direction,
) -> EngineResult<JumpOutcome> {
    let Some(landing) = hazard_cell.step(direction) else {
        // Cleared the hazard straight into open water.
        eliminate(state, id, cur, EliminationCause::Water)?;
        return Ok(JumpOutcome::Ended);
    };

    match state.grid().get(landing).copied() {
        None => {
            state.push_event(GameEvent::JumpSucceeded {
                penguin: id,
                over: hazard,
                landing,
            });
            advance(state, id, cur, landing)?;
            Ok(JumpOutcome::Landed(landing))
        }
        Some(TerrainObject::Food(food)) => {
            state.push_event(GameEvent::JumpSucceeded {
                penguin: id,
                over: hazard,
                landing,
            });
            state.grid_mut().remove(landing);
            advance(state, id, cur, landing)?;
            state.penguin_mut(id)?.inventory.push(food);
            state.push_event(GameEvent::FoodCollected { penguin: id, food });
            Ok(JumpOutcome::Ended)
        }
        Some(TerrainObject::Hazard(Hazard::Hole)) => {
            // The landing is entered normally, and normally it swallows.
            state.push_event(GameEvent::JumpSucceeded {
                penguin: id,
                over: hazard,
                landing,
            });
            eliminate(state, id, cur, EliminationCause::Hole)?;
            Ok(JumpOutcome::Ended)
        }
        Some(TerrainObject::Penguin(_) | TerrainObject::Hazard(_)) => {
            state.push_event(GameEvent::JumpFailed {
                penguin: id,
                over: hazard,
            });
            Ok(JumpOutcome::Blocked)
        }
    }
}

/// Resolve a penguin's collision with the hazard at `cell`. The penguin is
/// at `cur`, the cell immediately before.
fn collide_hazard(
    state: &mut GameState,
    id: PenguinId,
    cur: Position,
    cell: Position,
    hazard: Hazard,
    direction: Direction,
) -> EngineResult<()> {
    match hazard {
        Hazard::Hole => eliminate(state, id, cur, EliminationCause::Hole),
        Hazard::HeavyIce => {
            if let Some(food) = state.penguin_mut(id)?.remove_lightest_food() {
                state.push_event(GameEvent::FoodDropped { penguin: id, food });
            }
            Ok(())
        }
        Hazard::LightIce => {
            state.penguin_mut(id)?.stunned = true;
            state.push_event(GameEvent::Stunned { penguin: id });
            state.grid_mut().remove(cell);
            slide_hazard(state, hazard, cell, direction)
        }
        Hazard::SeaLion => {
            // Hazard slide first, then the bounce; both fully recursive.
            state.grid_mut().remove(cell);
            slide_hazard(state, hazard, cell, direction)?;
            let back = direction.opposite();
            state.push_event(GameEvent::Bounced {
                penguin: id,
                direction: back,
            });
            slide_with(state, id, back, SlideFx::NONE)
        }
    }
}

/// Slide a mobile hazard that has already been lifted off `from`.
///
/// Crushes food, plugs holes (destroying itself), drowns off the edge, and
/// stops in the cell before any penguin or other hazard. Never transfers
/// momentum.
pub(crate) fn slide_hazard(
    state: &mut GameState,
    hazard: Hazard,
    from: Position,
    direction: Direction,
) -> EngineResult<()> {
    let mut cur = from;
    loop {
        let Some(next) = cur.step(direction) else {
            state.push_event(GameEvent::HazardDrowned { hazard });
            return Ok(());
        };

        match state.grid().get(next).copied() {
            None => {
                cur = next;
            }
            Some(TerrainObject::Food(food)) => {
                state.grid_mut().remove(next);
                state.note_crushed(food.weight);
                state.push_event(GameEvent::FoodCrushed { hazard, food });
                cur = next;
            }
            Some(TerrainObject::Hazard(Hazard::Hole)) => {
                state.grid_mut().remove(next);
                state.grid_mut().set_plugged(next);
                state.push_event(GameEvent::HolePlugged { hazard, at: next });
                return Ok(());
            }
            Some(TerrainObject::Penguin(_) | TerrainObject::Hazard(_)) => {
                return state.grid_mut().place(cur, TerrainObject::Hazard(hazard));
            }
        }
    }
}

/// Move a penguin from `from` to `to`, keeping grid and mirror in step.
fn advance(
    state: &mut GameState,
    id: PenguinId,
    from: Position,
    to: Position,
) -> EngineResult<()> {
    let lifted = state.grid_mut().remove(from);
    debug_assert!(
        matches!(lifted, Some(TerrainObject::Penguin(p)) if p == id),
        "grid/mirror divergence at {from}"
    );
    state.grid_mut().place(to, TerrainObject::Penguin(id))?;
    state.penguin_mut(id)?.position = Some(to);
    Ok(())
}

/// Remove a penguin from the field; its inventory survives for scoring.
fn eliminate(
    state: &mut GameState,
    id: PenguinId,
    at: Position,
    cause: EliminationCause,
) -> EngineResult<()> {
    state.grid_mut().remove(at);
    state.penguin_mut(id)?.position = None;
    state.push_event(GameEvent::Eliminated { penguin: id, cause });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::object::{Food, FoodKind};
    use crate::game::penguin::Species;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    fn food(kind: FoodKind, weight: u8) -> Food {
        Food::new(kind, weight)
    }

    #[test]
    fn test_slide_to_food() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 5)).unwrap();
        state.add_food(food(FoodKind::Krill, 3), pos(4, 5)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(4, 5)));
        assert_eq!(p.carried_weight(), 3);
        assert_eq!(state.grid_food_weight(), 0);
    }

    #[test]
    fn test_slide_off_edge_eliminates() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Royal, pos(0, 0)).unwrap();

        slide(&mut state, id, Direction::Up).unwrap();

        let p = state.penguin(id).unwrap();
        assert!(p.is_eliminated());
        assert_eq!(state.grid().occupied_count(), 0);
        assert!(state.events().contains(&GameEvent::Eliminated {
            penguin: id,
            cause: EliminationCause::Water,
        }));
    }

    #[test]
    fn test_heavy_ice_penalty_and_stop() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Emperor, pos(0, 0)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(3, 0)).unwrap();
        {
            let p = state.penguin_mut(id).unwrap();
            p.inventory.push(food(FoodKind::Squid, 2));
            p.inventory.push(food(FoodKind::Krill, 1));
        }

        slide(&mut state, id, Direction::Right).unwrap();

        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(2, 0)));
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.inventory[0].kind, FoodKind::Squid);
        // The block itself has not moved
        assert!(matches!(
            state.grid().get(pos(3, 0)),
            Some(TerrainObject::Hazard(Hazard::HeavyIce))
        ));
    }

    #[test]
    fn test_heavy_ice_empty_inventory_noop() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Emperor, pos(0, 0)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(2, 0)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(1, 0)));
        assert!(!state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::FoodDropped { .. })));
    }

    #[test]
    fn test_momentum_transfer_chain() {
        let mut state = GameState::new();
        let p1 = state.add_penguin(Species::King, pos(0, 0)).unwrap();
        let p2 = state.add_penguin(Species::Royal, pos(3, 0)).unwrap();
        state.add_food(food(FoodKind::Mackerel, 5), pos(9, 0)).unwrap();

        slide(&mut state, p1, Direction::Right).unwrap();

        assert_eq!(state.penguin(p1).unwrap().position, Some(pos(2, 0)));
        let second = state.penguin(p2).unwrap();
        assert_eq!(second.position, Some(pos(9, 0)));
        assert_eq!(second.carried_weight(), 5);
    }

    #[test]
    fn test_adjacent_penguin_transfers_without_moving() {
        let mut state = GameState::new();
        let p1 = state.add_penguin(Species::King, pos(0, 0)).unwrap();
        let p2 = state.add_penguin(Species::Royal, pos(1, 0)).unwrap();

        slide(&mut state, p1, Direction::Right).unwrap();

        // P1 never left its cell; P2 inherited the slide down the empty row
        // and went off the far edge.
        assert_eq!(state.penguin(p1).unwrap().position, Some(pos(0, 0)));
        assert!(state.penguin(p2).unwrap().is_eliminated());
    }

    #[test]
    fn test_light_ice_stuns_and_slides_away() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 4)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(3, 4)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(2, 4)));
        assert!(p.stunned);
        // The block slid off the right edge and drowned
        assert!(state.grid().get(pos(3, 4)).is_none());
        assert!(state
            .events()
            .contains(&GameEvent::HazardDrowned { hazard: Hazard::LightIce }));
    }

    #[test]
    fn test_hazard_slide_stops_before_obstacle() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 4)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(2, 4)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(6, 4)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        // The light block stops in the cell before the heavy block
        assert!(matches!(
            state.grid().get(pos(5, 4)),
            Some(TerrainObject::Hazard(Hazard::LightIce))
        ));
        assert_eq!(state.penguin(id).unwrap().position, Some(pos(1, 4)));
    }

    #[test]
    fn test_hazard_crushes_food() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 4)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(2, 4)).unwrap();
        state.add_food(food(FoodKind::Anchovy, 4), pos(5, 4)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(8, 4)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        assert_eq!(state.crushed_food_weight(), 4);
        assert_eq!(state.grid_food_weight(), 0);
        // Conservation: 0 carried + 0 on grid + 4 crushed == 4 spawned
        assert_eq!(
            state.carried_food_weight() + state.grid_food_weight() + state.crushed_food_weight(),
            state.spawned_food_weight()
        );
        assert!(matches!(
            state.grid().get(pos(7, 4)),
            Some(TerrainObject::Hazard(Hazard::LightIce))
        ));
    }

    #[test]
    fn test_unplugged_hole_eliminates() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 2)).unwrap();
        state.add_hazard(Hazard::Hole, pos(4, 2)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        assert!(state.penguin(id).unwrap().is_eliminated());
        // The hole is untouched and still dangerous
        assert!(matches!(
            state.grid().get(pos(4, 2)),
            Some(TerrainObject::Hazard(Hazard::Hole))
        ));
        assert!(state.events().contains(&GameEvent::Eliminated {
            penguin: id,
            cause: EliminationCause::Hole,
        }));
    }

    #[test]
    fn test_sea_lion_bounce_and_plug() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 5)).unwrap();
        state.add_hazard(Hazard::SeaLion, pos(3, 5)).unwrap();
        state.add_hazard(Hazard::Hole, pos(7, 5)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        // Sea lion slid forward into the hole and plugged it
        assert!(state.grid().get(pos(7, 5)).is_none());
        assert!(state.grid().is_plugged(pos(7, 5)));
        // The penguin bounced left off the open edge
        assert!(state.penguin(id).unwrap().is_eliminated());

        // Ordering: plug resolves before the bounce begins
        let plug_idx = state
            .events()
            .iter()
            .position(|e| matches!(e, GameEvent::HolePlugged { .. }))
            .unwrap();
        let bounce_idx = state
            .events()
            .iter()
            .position(|e| matches!(e, GameEvent::Bounced { .. }))
            .unwrap();
        assert!(plug_idx < bounce_idx);
    }

    #[test]
    fn test_bounce_can_transfer_momentum() {
        let mut state = GameState::new();
        let a = state.add_penguin(Species::King, pos(4, 3)).unwrap();
        let b = state.add_penguin(Species::Royal, pos(1, 3)).unwrap();
        state.add_hazard(Hazard::SeaLion, pos(6, 3)).unwrap();
        state.add_food(food(FoodKind::Krill, 2), pos(0, 3)).unwrap();

        slide(&mut state, a, Direction::Right).unwrap();

        // A stopped at (5,3), bounced left, stopped against B at (2,3);
        // B inherited the momentum and collected the food at the edge.
        assert_eq!(state.penguin(a).unwrap().position, Some(pos(2, 3)));
        let second = state.penguin(b).unwrap();
        assert_eq!(second.position, Some(pos(0, 3)));
        assert_eq!(second.carried_weight(), 2);
        // The sea lion slid right and drowned
        assert!(state
            .events()
            .contains(&GameEvent::HazardDrowned { hazard: Hazard::SeaLion }));
    }

    #[test]
    fn test_plugged_hole_passes_actor() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 6)).unwrap();
        state.grid_mut().set_plugged(pos(3, 6));
        state.add_food(food(FoodKind::Crustacean, 2), pos(6, 6)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(6, 6)));
        assert_eq!(p.carried_weight(), 2);
        assert!(state.grid().is_plugged(pos(3, 6)));
    }

    #[test]
    fn test_stop_on_plugged_hole_cell() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 6)).unwrap();
        state.grid_mut().set_plugged(pos(3, 6));
        state.add_hazard(Hazard::HeavyIce, pos(4, 6)).unwrap();

        slide(&mut state, id, Direction::Right).unwrap();

        // Stopped in the cell before the block, which happens to be the plug
        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(3, 6)));
        assert!(state.grid().is_plugged(pos(3, 6)));
        assert!(matches!(
            state.grid().get(pos(3, 6)),
            Some(TerrainObject::Penguin(_))
        ));
    }

    #[test]
    fn test_capped_slide_stops_short() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 5)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::capped(5)).unwrap();

        assert_eq!(state.penguin(id).unwrap().position, Some(pos(5, 5)));
        assert!(state.events().contains(&GameEvent::StoppedShort {
            penguin: id,
            at: pos(5, 5),
        }));
    }

    #[test]
    fn test_cap_discarded_by_food() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 5)).unwrap();
        state.add_food(food(FoodKind::Krill, 1), pos(2, 5)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::capped(5)).unwrap();

        // Food at step 2 wins; the cap never fires
        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(2, 5)));
        assert_eq!(p.carried_weight(), 1);
        assert!(!state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::StoppedShort { .. })));
    }

    #[test]
    fn test_cap_hits_obstacle_normally() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Emperor, pos(0, 5)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(2, 5)).unwrap();
        state
            .penguin_mut(id)
            .unwrap()
            .inventory
            .push(food(FoodKind::Squid, 3));

        slide_with(&mut state, id, Direction::Right, SlideFx::capped(3)).unwrap();

        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(1, 5)));
        assert!(p.inventory.is_empty());
    }

    #[test]
    fn test_jump_clears_hazard_and_continues() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Rockhopper, pos(0, 0)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(3, 0)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::jump()).unwrap();

        // Landed at (4,0), kept sliding, went off the far edge
        assert!(state.penguin(id).unwrap().is_eliminated());
        assert!(matches!(
            state.grid().get(pos(3, 0)),
            Some(TerrainObject::Hazard(Hazard::LightIce))
        ));
        assert!(state.events().contains(&GameEvent::JumpSucceeded {
            penguin: id,
            over: Hazard::LightIce,
            landing: pos(4, 0),
        }));
    }

    #[test]
    fn test_jump_landing_on_food_collects_and_stops() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Rockhopper, pos(0, 0)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(3, 0)).unwrap();
        state.add_food(food(FoodKind::Squid, 4), pos(4, 0)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::jump()).unwrap();

        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(4, 0)));
        assert_eq!(p.carried_weight(), 4);
    }

    #[test]
    fn test_jump_landing_out_of_bounds_eliminates() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Rockhopper, pos(6, 0)).unwrap();
        state.add_hazard(Hazard::SeaLion, pos(9, 0)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::jump()).unwrap();

        assert!(state.penguin(id).unwrap().is_eliminated());
        // The sea lion was never struck
        assert!(matches!(
            state.grid().get(pos(9, 0)),
            Some(TerrainObject::Hazard(Hazard::SeaLion))
        ));
    }

    #[test]
    fn test_jump_blocked_falls_back_to_collision() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Rockhopper, pos(0, 0)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(3, 0)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(4, 0)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::jump()).unwrap();

        // Jump failed on the occupied landing; the light block collision
        // applied instead: stun, and the block slid up against the heavy one
        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(2, 0)));
        assert!(p.stunned);
        assert!(state.events().contains(&GameEvent::JumpFailed {
            penguin: id,
            over: Hazard::LightIce,
        }));
        assert!(matches!(
            state.grid().get(pos(3, 0)),
            Some(TerrainObject::Hazard(Hazard::LightIce))
        ));
    }

    #[test]
    fn test_jump_landing_in_hole_eliminates() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Rockhopper, pos(0, 0)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(3, 0)).unwrap();
        state.add_hazard(Hazard::Hole, pos(4, 0)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::jump()).unwrap();

        assert!(state.penguin(id).unwrap().is_eliminated());
        // Jumped hazard untouched; hole still open (penguins never plug)
        assert!(matches!(
            state.grid().get(pos(3, 0)),
            Some(TerrainObject::Hazard(Hazard::LightIce))
        ));
        assert!(matches!(
            state.grid().get(pos(4, 0)),
            Some(TerrainObject::Hazard(Hazard::Hole))
        ));
    }

    #[test]
    fn test_jump_spent_only_on_first_hazard() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::Rockhopper, pos(0, 0)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(2, 0)).unwrap();
        state.add_hazard(Hazard::HeavyIce, pos(5, 0)).unwrap();

        slide_with(&mut state, id, Direction::Right, SlideFx::jump()).unwrap();

        // Jumped the first hazard, then stopped normally before the second
        let p = state.penguin(id).unwrap();
        assert_eq!(p.position, Some(pos(4, 0)));
        assert!(!p.stunned);
    }

    #[test]
    fn test_hazard_slide_never_transfers_to_penguin() {
        let mut state = GameState::new();
        let a = state.add_penguin(Species::King, pos(0, 7)).unwrap();
        let b = state.add_penguin(Species::Royal, pos(5, 7)).unwrap();
        state.add_hazard(Hazard::LightIce, pos(2, 7)).unwrap();

        slide(&mut state, a, Direction::Right).unwrap();

        // The block stopped short of B; B never moved
        assert!(matches!(
            state.grid().get(pos(4, 7)),
            Some(TerrainObject::Hazard(Hazard::LightIce))
        ));
        assert_eq!(state.penguin(b).unwrap().position, Some(pos(5, 7)));
    }

    #[test]
    fn test_slide_requires_living_actor() {
        let mut state = GameState::new();
        let id = state.add_penguin(Species::King, pos(0, 0)).unwrap();
        slide(&mut state, id, Direction::Up).unwrap();

        let err = slide(&mut state, id, Direction::Down).unwrap_err();
        assert_eq!(err, EngineError::EliminatedActor(id));
    }
}
