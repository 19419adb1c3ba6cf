//! Pointer interaction: press, drag, release
//!
//! Free functions mutating session state, dispatched synchronously between
//! frame ticks. All three are full-list sweeps, never first-match-wins: a
//! press grabs every tile under the point, and a release tests every slot
//! for every dropped tile, so overlapping geometry resolves by last writer.

use glam::Vec2;

use crate::consts::TILE_SIZE;

use super::state::{GameEvent, GameState};

/// Pointer pressed at `p`. Every tile whose bounding square contains the
/// point starts dragging and reports a `TilePicked` event for its cue.
/// Inert unless an attempt is active.
pub fn press(state: &mut GameState, p: Vec2) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.running {
        return events;
    }
    for tile in &mut state.tiles {
        if tile.hit(p) {
            // Re-grabbing a tile mid-fall cancels the fall; a tile is never
            // both dragging and falling
            tile.falling = false;
            tile.dragging = true;
            events.push(GameEvent::TilePicked(tile.label));
        }
    }
    events
}

/// Pointer moved to `p` while held. Every dragging tile is recentered on the
/// point. No clamping - a drag may park a tile outside the play area.
pub fn drag(state: &mut GameState, p: Vec2) {
    if !state.running {
        return;
    }
    for tile in &mut state.tiles {
        if tile.dragging {
            tile.pos = p - Vec2::splat(TILE_SIZE / 2.0);
        }
    }
}

/// Pointer released. Each dragging tile is dropped: every slot that strictly
/// contains the tile's center and carries the same label gets the tile
/// snapped onto it and is marked correct. A drop that matched no slot sends
/// the tile falling back toward its anchor.
pub fn release(state: &mut GameState) {
    if !state.running {
        return;
    }
    for tile in &mut state.tiles {
        if !tile.dragging {
            continue;
        }
        tile.dragging = false;
        let mut matched = false;

        for slot in &mut state.slots {
            if slot.contains(tile) && slot.label == tile.label {
                tile.snap_to(slot);
                slot.correct = true;
                matched = true;
            }
        }

        if !matched {
            tile.start_fall();
        }
    }
}
