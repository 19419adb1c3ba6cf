//! Game state and core entity types
//!
//! All per-session state lives here. Everything is plain data so a session
//! can be snapshotted and replayed from its seed.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;
use crate::square_center;

use super::hit::{center_in_square, point_in_square};

/// One value from the active item set - a letter A-Z or a number 0-10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Letter(char),
    Number(u8),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Letter(c) => write!(f, "{c}"),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The active category of values in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemSet {
    #[default]
    Letters,
    Numbers,
}

impl ItemSet {
    /// Canonical ordered label sequence for this set.
    ///
    /// Numbers spans 0..=10 - eleven values, not ten. That is observable
    /// behavior of the game and is kept as-is.
    pub fn labels(&self) -> Vec<Label> {
        match self {
            ItemSet::Letters => ('A'..='Z').map(Label::Letter).collect(),
            ItemSet::Numbers => (0..=10).map(Label::Number).collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSet::Letters => "letters",
            ItemSet::Numbers => "numbers",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "letters" => Some(ItemSet::Letters),
            "numbers" => Some(ItemSet::Numbers),
            _ => None,
        }
    }
}

/// A draggable labeled square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub label: Label,
    /// Current top-left position (mutable)
    pub pos: Vec2,
    /// Anchor the tile falls back to when a drop misses
    pub start_pos: Vec2,
    pub dragging: bool,
    pub falling: bool,
}

impl Tile {
    pub fn new(pos: Vec2, label: Label) -> Self {
        Self {
            label,
            pos,
            start_pos: pos,
            dragging: false,
            falling: false,
        }
    }

    /// Geometric center of the tile's bounding square
    pub fn center(&self) -> Vec2 {
        square_center(self.pos, TILE_SIZE)
    }

    /// Whether a pointer position lands on this tile
    pub fn hit(&self, point: Vec2) -> bool {
        point_in_square(point, self.pos, TILE_SIZE)
    }

    /// Move the tile onto a slot. Does not clear `dragging` - the
    /// interaction engine owns that flag.
    pub fn snap_to(&mut self, slot: &Slot) {
        self.pos = slot.pos;
    }

    /// Begin the fall animation back toward `start_pos`
    pub fn start_fall(&mut self) {
        self.falling = true;
    }
}

/// A fixed-position drop target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub label: Label,
    pub pos: Vec2,
    /// Set once a matching tile has been seated; never reverts within a session
    pub correct: bool,
}

impl Slot {
    pub fn new(pos: Vec2, label: Label) -> Self {
        Self {
            label,
            pos,
            correct: false,
        }
    }

    /// True iff the tile's center lies strictly inside this slot's square.
    /// Centers exactly on a boundary do not count.
    pub fn contains(&self, tile: &Tile) -> bool {
        center_in_square(tile.center(), self.pos, TILE_SIZE)
    }
}

/// Events the core hands back to the caller, who owns presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A tile was picked up; play its audio cue
    TilePicked(Label),
    /// Every slot just became correct; exactly once per session
    Solved { grade: u8 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG streams consumed so far. Each board setup or randomize
    /// takes a fresh stream mixed from this counter and the session seed,
    /// so rebuilds reshuffle while staying reproducible.
    pub reseeds: u32,
    pub item_set: ItemSet,
    /// Layout order = canonical ascending order
    pub slots: Vec<Slot>,
    /// Scrambled order, one tile per slot label
    pub tiles: Vec<Tile>,
    pub elapsed_secs: u32,
    /// Attempt underway. Stays true after solving - dragging and randomize
    /// keep working until the user resets.
    pub running: bool,
    /// Every slot confirmed correct and the solve fired. Only a board
    /// rebuild clears it.
    pub solved: bool,
    /// Awarded percentage, set on solve
    pub grade: Option<u8>,
}

impl GameState {
    /// Create a session with the given seed and set up the board
    pub fn new(item_set: ItemSet, seed: u64) -> Self {
        let mut state = Self {
            seed,
            reseeds: 0,
            item_set,
            slots: Vec::new(),
            tiles: Vec::new(),
            elapsed_secs: 0,
            running: false,
            solved: false,
            grade: None,
        };
        super::board::setup_board(&mut state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display_covers_two_digit_numbers() {
        assert_eq!(Label::Letter('Q').to_string(), "Q");
        assert_eq!(Label::Number(7).to_string(), "7");
        assert_eq!(Label::Number(10).to_string(), "10");
    }

    #[test]
    fn item_set_sizes() {
        assert_eq!(ItemSet::Letters.labels().len(), 26);
        // 0..=10 inclusive - eleven values
        assert_eq!(ItemSet::Numbers.labels().len(), 11);
    }

    #[test]
    fn item_set_round_trips_names() {
        assert_eq!(ItemSet::from_str("letters"), Some(ItemSet::Letters));
        assert_eq!(ItemSet::from_str("NUMBERS"), Some(ItemSet::Numbers));
        assert_eq!(ItemSet::from_str("shapes"), None);
    }

    #[test]
    fn snap_moves_tile_onto_slot() {
        let slot = Slot::new(Vec2::new(110.0, 50.0), Label::Letter('B'));
        let mut tile = Tile::new(Vec2::new(300.0, 300.0), Label::Letter('B'));
        tile.snap_to(&slot);
        assert_eq!(tile.pos, slot.pos);
        // Anchor is untouched by a snap
        assert_eq!(tile.start_pos, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn containment_is_strict_at_boundaries() {
        let slot = Slot::new(Vec2::new(100.0, 100.0), Label::Letter('A'));

        // Tile center exactly on the slot's left edge: x = 100
        let on_edge = Tile::new(Vec2::new(75.0, 110.0), Label::Letter('A'));
        assert!(!slot.contains(&on_edge));

        // Nudged one unit inward
        let inside = Tile::new(Vec2::new(76.0, 110.0), Label::Letter('A'));
        assert!(slot.contains(&inside));

        // Center exactly on the bottom edge: y = 150
        let on_bottom = Tile::new(Vec2::new(110.0, 125.0), Label::Letter('A'));
        assert!(!slot.contains(&on_bottom));
    }

    #[test]
    fn new_session_is_idle_with_board_built() {
        let state = GameState::new(ItemSet::Letters, 7);
        assert!(!state.running);
        assert!(!state.solved);
        assert_eq!(state.slots.len(), 26);
        assert_eq!(state.tiles.len(), 26);
        assert_eq!(state.elapsed_secs, 0);
        assert!(state.grade.is_none());
    }
}
