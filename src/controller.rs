//! Session controller
//!
//! Owns the game state, the stopwatch, the cue map, and the presenter - the
//! explicit object the interaction and presentation layers talk to instead
//! of ambient globals. Single logical thread of control: pointer handlers
//! and frame ticks run to completion before the next event.

use glam::Vec2;
use rand::Rng;

use crate::consts::APPLAUSE_CUE;
use crate::cues::CueBank;
use crate::present::Presenter;
use crate::sim::{self, GameEvent, GameState, ItemSet};

/// Once-per-second elapsed-time ticker.
///
/// The host loop feeds wall-clock `dt`; whole seconds are carved off an
/// accumulator, so the clock is independent of frame rate. There is exactly
/// one accumulator per session and `cancel` zeroes it, which is what makes
/// two concurrent tickers impossible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    accumulator: f32,
    active: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin ticking. Any prior ticking is cancelled first.
    pub fn start(&mut self) {
        self.cancel();
        self.active = true;
    }

    /// Stop ticking and drop any partial second. Idempotent.
    pub fn cancel(&mut self) {
        self.active = false;
        self.accumulator = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed elapsed wall-clock time; returns how many whole seconds ticked
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.accumulator += dt;
        let mut ticks = 0;
        while self.accumulator >= 1.0 {
            self.accumulator -= 1.0;
            ticks += 1;
        }
        ticks
    }
}

/// Format elapsed seconds as zero-padded `mm:ss`
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// One game session from setup to solved/reset, plus its control surface
pub struct GameController<P: Presenter> {
    state: GameState,
    stopwatch: Stopwatch,
    cues: CueBank,
    presenter: P,
    /// True from `start` until `reset` - decides which way the
    /// attempt button toggles. Solving does not clear it.
    attempt_started: bool,
}

impl<P: Presenter> GameController<P> {
    /// Fresh session with an entropy seed and the default cue bank
    pub fn new(item_set: ItemSet, presenter: P) -> Self {
        let seed = rand::rng().random();
        Self::with_seed(item_set, seed, CueBank::with_defaults(), presenter)
    }

    /// Fully-specified constructor, used by tests and replays
    pub fn with_seed(item_set: ItemSet, seed: u64, cues: CueBank, presenter: P) -> Self {
        log::info!("new session: set={} seed={seed:#x}", item_set.as_str());
        Self {
            state: GameState::new(item_set, seed),
            stopwatch: Stopwatch::new(),
            cues,
            presenter,
            attempt_started: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Rebuild the board and clear the success state from the screen.
    /// Mirrors what every board rebuild does regardless of its trigger.
    fn rebuild_board(&mut self) {
        sim::setup_board(&mut self.state);
        self.presenter.hide_success_overlay();
    }

    /// Switch the active item set and rebuild. Deliberately leaves the
    /// stopwatch alone - switching mid-attempt keeps the clock running.
    pub fn select(&mut self, item_set: ItemSet) {
        self.state.item_set = item_set;
        self.rebuild_board();
    }

    /// Begin an attempt: full reset, then run
    pub fn start(&mut self) {
        self.reset();
        self.state.running = true;
        self.stopwatch.start();
        self.attempt_started = true;
        log::info!("attempt started: set={}", self.state.item_set.as_str());
    }

    /// Cancel the ticker, zero the clock, clear the attempt, reshuffle
    pub fn reset(&mut self) {
        self.stopwatch.cancel();
        self.state.elapsed_secs = 0;
        self.state.running = false;
        self.attempt_started = false;
        self.presenter.set_stopwatch_text(&format_clock(0));
        self.presenter.hide_grade_panel();
        self.rebuild_board();
    }

    /// The single attempt button: starts an attempt, or resets one that was
    /// already started (solved or not)
    pub fn attempt_toggle(&mut self) {
        if self.attempt_started {
            self.reset();
        } else {
            self.start();
        }
    }

    /// Re-scatter tiles; only meaningful while an attempt is active
    pub fn randomize(&mut self) {
        sim::randomize_tiles(&mut self.state);
    }

    /// Leave the success screen and rebuild the board. The clock and the
    /// attempt flag are untouched.
    pub fn back(&mut self) {
        self.rebuild_board();
    }

    /// Stop the session's ticking; safe to call repeatedly
    pub fn teardown(&mut self) {
        self.stopwatch.cancel();
    }

    pub fn pointer_pressed(&mut self, p: Vec2) {
        for event in sim::press(&mut self.state, p) {
            if let GameEvent::TilePicked(label) = event
                && let Some(key) = self.cues.cue_for(label)
            {
                self.presenter.play_cue(key);
            }
        }
    }

    pub fn pointer_dragged(&mut self, p: Vec2) {
        sim::drag(&mut self.state, p);
    }

    pub fn pointer_released(&mut self) {
        sim::release(&mut self.state);
    }

    /// One display frame: advance the clock, step the sim, dispatch events,
    /// draw slots then tiles
    pub fn frame(&mut self, dt: f32) {
        let ticks = self.stopwatch.advance(dt);
        if ticks > 0 {
            self.state.elapsed_secs += ticks;
            self.presenter
                .set_stopwatch_text(&format_clock(self.state.elapsed_secs));
        }

        if let Some(GameEvent::Solved { grade }) = sim::frame(&mut self.state) {
            self.stopwatch.cancel();
            self.presenter.set_grade_text(grade);
            self.presenter.show_grade_panel();
            self.presenter.show_success_overlay();
            self.presenter.play_cue(APPLAUSE_CUE);
            log::info!(
                "solved in {} ({}%)",
                format_clock(self.state.elapsed_secs),
                grade
            );
        }

        for slot in &self.state.slots {
            self.presenter.draw_slot(slot);
        }
        for tile in &self.state.tiles {
            self.presenter.draw_tile(tile);
        }
    }
}
