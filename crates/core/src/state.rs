//! Point-in-time view of a score controller.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub score: u32,
    pub combo: u32,
    pub multiplier: f32,
}

impl Default for ScoreSnapshot {
    fn default() -> Self {
        Self {
            score: 0,
            combo: 0,
            multiplier: 1.0,
        }
    }
}

impl ScoreSnapshot {
    pub fn new(score: u32, combo: u32, multiplier: f32) -> Self {
        Self {
            score,
            combo,
            multiplier,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.score == 0 && self.combo == 0
    }
}
