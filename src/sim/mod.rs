//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//! - Pointer events and frame ticks mutate state directly and run to completion

pub mod board;
pub mod grade;
pub mod hit;
pub mod pointer;
pub mod state;
pub mod tick;

pub use board::{randomize_tiles, setup_board};
pub use grade::grade_for;
pub use hit::{center_in_square, point_in_square};
pub use pointer::{drag, press, release};
pub use state::{GameEvent, GameState, ItemSet, Label, Slot, Tile};
pub use tick::frame;
