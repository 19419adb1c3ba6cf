//! Board setup: slot layout and tile scramble
//!
//! Slots are laid out row-major in canonical order near the top-left of the
//! play area; tiles get a shuffled permutation of the same labels, scattered
//! across the lower half.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

use super::state::{GameState, Slot, Tile};

/// Take the next RNG stream for this session. Counter-mixed so every board
/// rebuild reshuffles but the whole session replays from its seed.
fn next_rng(state: &mut GameState) -> Pcg32 {
    let mix = u64::from(state.reseeds).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    state.reseeds += 1;
    Pcg32::seed_from_u64(state.seed ^ mix)
}

/// Random top-left position within the scramble region
fn scramble_pos(rng: &mut Pcg32) -> Vec2 {
    Vec2::new(
        rng.random_range(SCRAMBLE_X_MIN..SCRAMBLE_X_MAX),
        rng.random_range(SCRAMBLE_Y_MIN..SCRAMBLE_Y_MAX),
    )
}

/// Rebuild the board for the session's active item set.
///
/// Clears all per-board state (tiles, slots, solved flag, grade), lays out
/// one slot per canonical label, then spawns one tile per shuffled label in
/// the scramble region. Idempotent - callable at any time.
pub fn setup_board(state: &mut GameState) {
    let mut rng = next_rng(state);

    state.slots.clear();
    state.tiles.clear();
    state.solved = false;
    state.grade = None;

    let ordered = state.item_set.labels();

    for (index, &label) in ordered.iter().enumerate() {
        let row = index / ROW_CAPACITY;
        let col = index % ROW_CAPACITY;
        let pos = Vec2::new(
            GRID_ORIGIN_X + col as f32 * (TILE_SIZE + GRID_GUTTER),
            GRID_ORIGIN_Y + row as f32 * (TILE_SIZE + GRID_GUTTER),
        );
        state.slots.push(Slot::new(pos, label));
    }

    // Shuffle until the permutation is not the identity, so the scramble
    // never hands the player a pre-sorted tile order
    let mut shuffled = ordered.clone();
    loop {
        shuffled.shuffle(&mut rng);
        if shuffled != ordered || ordered.len() <= 1 {
            break;
        }
    }

    for &label in &shuffled {
        let pos = scramble_pos(&mut rng);
        state.tiles.push(Tile::new(pos, label));
    }
}

/// Re-scatter every tile (current position and fall anchor) within the
/// scramble region. No-op unless an attempt is active. Slots and their
/// `correct` flags are untouched.
pub fn randomize_tiles(state: &mut GameState) {
    if !state.running {
        return;
    }
    let mut rng = next_rng(state);
    for tile in &mut state.tiles {
        let pos = scramble_pos(&mut rng);
        tile.pos = pos;
        tile.start_pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ItemSet, Label};
    use proptest::prelude::*;

    fn sorted_labels(labels: &[Label]) -> Vec<String> {
        let mut v: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn letters_board_has_26_of_each() {
        let state = GameState::new(ItemSet::Letters, 1);
        assert_eq!(state.slots.len(), 26);
        assert_eq!(state.tiles.len(), 26);
    }

    #[test]
    fn numbers_board_has_11_of_each() {
        let state = GameState::new(ItemSet::Numbers, 1);
        assert_eq!(state.slots.len(), 11);
        assert_eq!(state.tiles.len(), 11);
        // 0..=10 inclusive
        assert!(state.slots.iter().any(|s| s.label == Label::Number(10)));
    }

    #[test]
    fn slots_follow_row_major_grid() {
        let state = GameState::new(ItemSet::Letters, 1);
        assert_eq!(state.slots[0].pos, Vec2::new(50.0, 50.0));
        assert_eq!(state.slots[1].pos, Vec2::new(110.0, 50.0));
        // Last slot of the first row (12 per row)
        assert_eq!(state.slots[11].pos, Vec2::new(710.0, 50.0));
        // First slot of the second row
        assert_eq!(state.slots[12].pos, Vec2::new(50.0, 110.0));
        // Layout order is canonical ascending order
        assert_eq!(state.slots[0].label, Label::Letter('A'));
        assert_eq!(state.slots[25].label, Label::Letter('Z'));
    }

    #[test]
    fn tiles_are_a_permutation_of_the_slots() {
        let state = GameState::new(ItemSet::Letters, 42);
        let slot_labels: Vec<Label> = state.slots.iter().map(|s| s.label).collect();
        let tile_labels: Vec<Label> = state.tiles.iter().map(|t| t.label).collect();
        assert_eq!(sorted_labels(&slot_labels), sorted_labels(&tile_labels));
        // Not handed out in sorted order
        assert_ne!(slot_labels, tile_labels);
    }

    #[test]
    fn tiles_spawn_inside_scramble_region() {
        let state = GameState::new(ItemSet::Letters, 3);
        for tile in &state.tiles {
            assert!(tile.pos.x >= SCRAMBLE_X_MIN && tile.pos.x < SCRAMBLE_X_MAX);
            assert!(tile.pos.y >= SCRAMBLE_Y_MIN && tile.pos.y < SCRAMBLE_Y_MAX);
            assert_eq!(tile.start_pos, tile.pos);
        }
    }

    #[test]
    fn rebuild_reshuffles() {
        let mut state = GameState::new(ItemSet::Letters, 9);
        let first: Vec<Label> = state.tiles.iter().map(|t| t.label).collect();
        setup_board(&mut state);
        let second: Vec<Label> = state.tiles.iter().map(|t| t.label).collect();
        // Same multiset, and (with 26 items) a different order
        assert_eq!(sorted_labels(&first), sorted_labels(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn randomize_is_a_noop_while_idle() {
        let mut state = GameState::new(ItemSet::Numbers, 5);
        let before: Vec<Vec2> = state.tiles.iter().map(|t| t.pos).collect();
        randomize_tiles(&mut state);
        let after: Vec<Vec2> = state.tiles.iter().map(|t| t.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn randomize_moves_tiles_but_not_slots() {
        let mut state = GameState::new(ItemSet::Numbers, 5);
        state.running = true;
        state.slots[0].correct = true;
        let slots_before: Vec<Vec2> = state.slots.iter().map(|s| s.pos).collect();
        let tiles_before: Vec<Vec2> = state.tiles.iter().map(|t| t.pos).collect();

        randomize_tiles(&mut state);

        let slots_after: Vec<Vec2> = state.slots.iter().map(|s| s.pos).collect();
        let tiles_after: Vec<Vec2> = state.tiles.iter().map(|t| t.pos).collect();
        assert_eq!(slots_before, slots_after);
        assert!(state.slots[0].correct);
        assert_ne!(tiles_before, tiles_after);
        for tile in &state.tiles {
            assert_eq!(tile.start_pos, tile.pos);
        }
    }

    proptest! {
        #[test]
        fn any_seed_yields_exact_permutation(seed in any::<u64>()) {
            for item_set in [ItemSet::Letters, ItemSet::Numbers] {
                let state = GameState::new(item_set, seed);
                let slot_labels: Vec<Label> = state.slots.iter().map(|s| s.label).collect();
                let tile_labels: Vec<Label> = state.tiles.iter().map(|t| t.label).collect();
                // Exactly the canonical values, each exactly once
                prop_assert_eq!(sorted_labels(&slot_labels), sorted_labels(&tile_labels));
                prop_assert_ne!(slot_labels, tile_labels);
                for tile in &state.tiles {
                    prop_assert!(tile.pos.x >= SCRAMBLE_X_MIN && tile.pos.x < SCRAMBLE_X_MAX);
                    prop_assert!(tile.pos.y >= SCRAMBLE_Y_MIN && tile.pos.y < SCRAMBLE_Y_MAX);
                }
            }
        }
    }
}
