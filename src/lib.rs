//! Tile Snap - a drag-and-drop matching game
//!
//! Core modules:
//! - `sim`: Deterministic game core (entities, board setup, interaction, grading)
//! - `controller`: Session lifecycle, stopwatch, and control surface
//! - `present`: Presentation adapter trait (drawing, cues, status widgets)
//! - `cues`: Per-value audio cue lookup

pub mod controller;
pub mod cues;
pub mod present;
pub mod sim;

pub use controller::{GameController, Stopwatch};
pub use cues::CueBank;
pub use present::{NullPresenter, Presenter};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (logical units)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 400.0;

    /// Tiles and slots are squares of this size
    pub const TILE_SIZE: f32 = 50.0;
    /// Gap between adjacent slot cells in the grid
    pub const GRID_GUTTER: f32 = 10.0;
    /// Slots per grid row
    pub const ROW_CAPACITY: usize = 12;
    /// Top-left corner of the slot grid
    pub const GRID_ORIGIN_X: f32 = 50.0;
    pub const GRID_ORIGIN_Y: f32 = 50.0;

    /// Scramble region for initial tile placement (lower half of the play area)
    pub const SCRAMBLE_X_MIN: f32 = 100.0;
    pub const SCRAMBLE_X_MAX: f32 = PLAY_WIDTH - TILE_SIZE;
    pub const SCRAMBLE_Y_MIN: f32 = PLAY_HEIGHT / 2.0;
    pub const SCRAMBLE_Y_MAX: f32 = PLAY_HEIGHT - TILE_SIZE;

    /// Downward speed of an unmatched tile returning to its anchor, per frame
    pub const FALL_SPEED: f32 = 1.5;

    /// Cue key played on completion
    pub const APPLAUSE_CUE: &str = "applause";
}

/// Center of a square whose top-left corner is at `pos`
#[inline]
pub fn square_center(pos: Vec2, size: f32) -> Vec2 {
    Vec2::new(pos.x + size / 2.0, pos.y + size / 2.0)
}
