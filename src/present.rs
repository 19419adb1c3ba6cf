//! Presentation adapter
//!
//! The core consumes this capability and never renders, plays, or touches a
//! DOM itself. Hosts implement `Presenter` for their canvas/audio/widget
//! stack; tests use `NullPresenter`.

use crate::sim::{Slot, Tile};

/// Everything the game asks of its surroundings
pub trait Presenter {
    /// Draw a tile as a labeled square at its current position
    fn draw_tile(&mut self, tile: &Tile);
    /// Draw a slot as a labeled square, highlighted once correct
    fn draw_slot(&mut self, slot: &Slot);
    /// Play the audio cue registered under `key`. Unknown keys are the
    /// host's problem to ignore; the core never passes unregistered keys.
    fn play_cue(&mut self, key: &str);
    fn show_success_overlay(&mut self);
    fn hide_success_overlay(&mut self);
    /// Stopwatch display, already formatted `mm:ss`
    fn set_stopwatch_text(&mut self, text: &str);
    fn set_grade_text(&mut self, percent: u8);
    fn show_grade_panel(&mut self);
    fn hide_grade_panel(&mut self);
}

/// Presenter that drops everything on the floor
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn draw_tile(&mut self, _tile: &Tile) {}
    fn draw_slot(&mut self, _slot: &Slot) {}
    fn play_cue(&mut self, _key: &str) {}
    fn show_success_overlay(&mut self) {}
    fn hide_success_overlay(&mut self) {}
    fn set_stopwatch_text(&mut self, _text: &str) {}
    fn set_grade_text(&mut self, _percent: u8) {}
    fn show_grade_panel(&mut self) {}
    fn hide_grade_panel(&mut self) {}
}
