//! Per-frame step
//!
//! Driven once per display frame by the host loop: advances the fall
//! animation and polls the board for completion. Elapsed-time ticking lives
//! in the controller's stopwatch, not here - the frame rate never affects
//! the clock.

use crate::consts::FALL_SPEED;

use super::grade::grade_for;
use super::state::{GameEvent, GameState};

/// Advance one frame.
///
/// Falling tiles descend at a fixed per-frame speed and clamp exactly at
/// their anchor. Completion fires at most once per session: the first frame
/// on which every slot is correct awards the grade and returns
/// `GameEvent::Solved`.
pub fn frame(state: &mut GameState) -> Option<GameEvent> {
    for tile in &mut state.tiles {
        if tile.falling {
            tile.pos.y += FALL_SPEED;
            if tile.pos.y > tile.start_pos.y {
                tile.pos.y = tile.start_pos.y;
                tile.falling = false;
            }
        }
    }

    if !state.solved && state.slots.iter().all(|s| s.correct) {
        state.solved = true;
        let grade = grade_for(state.item_set, state.elapsed_secs);
        state.grade = Some(grade);
        log::debug!(
            "board solved: set={} elapsed={}s grade={}%",
            state.item_set.as_str(),
            state.elapsed_secs,
            grade
        );
        return Some(GameEvent::Solved { grade });
    }

    None
}
