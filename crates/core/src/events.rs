//! Notifications emitted when the score or combo changes.

use crate::ScoreChangeType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ScoreChanged {
    pub previous: u32,
    pub current: u32,
    /// Positive on gain, negative on loss.
    pub delta: i64,
    pub change_type: ScoreChangeType,
}

impl ScoreChanged {
    pub fn new(previous: u32, current: u32, change_type: ScoreChangeType) -> Self {
        Self {
            previous,
            current,
            delta: current as i64 - previous as i64,
            change_type,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ComboChanged {
    pub previous: u32,
    pub current: u32,
    /// Multiplier for `current`, recalculated after the change.
    pub multiplier: f32,
    pub was_reset: bool,
}

impl ComboChanged {
    pub fn new(previous: u32, current: u32, multiplier: f32, was_reset: bool) -> Self {
        Self {
            previous,
            current,
            multiplier,
            was_reset,
        }
    }
}
