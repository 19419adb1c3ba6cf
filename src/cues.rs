//! Per-value audio cue lookup
//!
//! Each label resolves to a cue key the presenter can play ("A".."Z",
//! "0".."10"). The mapping is built once at load time; a missing entry is a
//! valid, handled case - the pick just stays silent.

use std::collections::HashMap;

use crate::sim::{ItemSet, Label};

/// Mapping from item value to cue identifier
#[derive(Debug, Clone, Default)]
pub struct CueBank {
    cues: HashMap<Label, String>,
}

impl CueBank {
    /// Register cues for every value of both item sets
    pub fn with_defaults() -> Self {
        let mut bank = Self::default();
        for label in ItemSet::Letters
            .labels()
            .into_iter()
            .chain(ItemSet::Numbers.labels())
        {
            bank.register(label, label.to_string());
        }
        bank
    }

    /// An empty bank - every lookup misses, every pick is silent
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn register(&mut self, label: Label, key: impl Into<String>) {
        self.cues.insert(label, key.into());
    }

    /// Cue key for a value, if one was registered
    pub fn cue_for(&self, label: Label) -> Option<&str> {
        self.cues.get(&label).map(String::as_str)
    }
}
