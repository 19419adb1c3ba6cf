//! Time-based grading
//!
//! A completed board earns an integer percentage from the elapsed seconds.
//! Each item set has its own threshold table - the numbers set expects
//! faster completion. Thresholds are inclusive upper bounds in strictly
//! ascending order, with a catch-all floor of 10.

use super::state::ItemSet;

/// Grade a completed board. Pure function of elapsed time and item set.
pub fn grade_for(item_set: ItemSet, elapsed_secs: u32) -> u8 {
    match item_set {
        ItemSet::Letters => match elapsed_secs {
            0..=30 => 100,
            31..=60 => 90,
            61..=90 => 80,
            91..=120 => 70,
            121..=180 => 60,
            181..=240 => 50,
            241..=300 => 40,
            301..=360 => 30,
            _ => 10,
        },
        ItemSet::Numbers => match elapsed_secs {
            0..=20 => 100,
            21..=60 => 80,
            61..=90 => 70,
            91..=120 => 60,
            121..=180 => 50,
            181..=240 => 40,
            241..=300 => 30,
            301..=360 => 20,
            _ => 10,
        },
    }
}
