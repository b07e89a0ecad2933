//! Inputs handed to score modifiers for a single computation.

use crate::ScoreChangeType;
use serde::{Deserialize, Serialize};

/// Snapshot of the scoring state at the moment points are added.
///
/// Built fresh for every computation and never mutated, so every modifier in
/// one pass sees the same values regardless of its position in the order.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScoreContext {
    /// Points requested by the caller, before combo and modifiers.
    pub base_points: u32,
    pub current_score: u32,
    pub combo_count: u32,
    pub combo_multiplier: f32,
    pub change_type: ScoreChangeType,
}

impl ScoreContext {
    pub fn new(
        base_points: u32,
        current_score: u32,
        combo_count: u32,
        combo_multiplier: f32,
        change_type: ScoreChangeType,
    ) -> Self {
        Self {
            base_points,
            current_score,
            combo_count,
            combo_multiplier,
            change_type,
        }
    }

    /// Base points scaled by the combo multiplier, before any modifier runs.
    pub fn combo_points(&self) -> f32 {
        self.base_points as f32 * self.combo_multiplier
    }
}
