//! Combo count to score multiplier strategies.

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_COMBO: f32 = 0.1;
pub const DEFAULT_MAX_MULTIPLIER: f32 = 5.0;

/// Maps a combo count to a multiplier in `[1.0, max_multiplier()]`.
///
/// Implementations must be pure functions of the combo count; the controller
/// calls them freely, including from read-only accessors.
pub trait ComboStrategy {
    fn calculate_multiplier(&self, combo: u32) -> f32;

    fn max_multiplier(&self) -> f32;
}

/// `1.0 + combo * per_combo`, capped at `max_multiplier`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearComboStrategy {
    per_combo: f32,
    max_multiplier: f32,
}

impl LinearComboStrategy {
    pub fn new(per_combo: f32, max_multiplier: f32) -> Result<Self> {
        if per_combo.is_nan() || per_combo < 0.0 {
            return Err(ScoringError::InvalidPerCombo(per_combo));
        }
        if max_multiplier.is_nan() || max_multiplier < 1.0 {
            return Err(ScoringError::InvalidMaxMultiplier(max_multiplier));
        }

        Ok(Self {
            per_combo,
            max_multiplier,
        })
    }

    pub fn per_combo(&self) -> f32 {
        self.per_combo
    }
}

impl Default for LinearComboStrategy {
    fn default() -> Self {
        Self {
            per_combo: DEFAULT_PER_COMBO,
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
        }
    }
}

impl ComboStrategy for LinearComboStrategy {
    fn calculate_multiplier(&self, combo: u32) -> f32 {
        if combo == 0 {
            return 1.0;
        }

        let multiplier = 1.0 + combo as f32 * self.per_combo;
        multiplier.min(self.max_multiplier)
    }

    fn max_multiplier(&self) -> f32 {
        self.max_multiplier
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboTier {
    pub min_combo: u32,
    pub multiplier: f32,
}

impl ComboTier {
    pub fn new(min_combo: u32, multiplier: f32) -> Self {
        Self {
            min_combo,
            multiplier,
        }
    }
}

/// Table lookup: the highest tier reached by the combo decides the multiplier.
#[derive(Clone, Debug, PartialEq)]
pub struct SteppedComboStrategy {
    tiers: Vec<ComboTier>,
    max_multiplier: f32,
}

impl SteppedComboStrategy {
    pub fn new(mut tiers: Vec<ComboTier>) -> Result<Self> {
        for tier in &tiers {
            if !tier.multiplier.is_finite() || tier.multiplier < 1.0 {
                return Err(ScoringError::InvalidTierMultiplier {
                    min_combo: tier.min_combo,
                    multiplier: tier.multiplier,
                });
            }
        }

        tiers.sort_by_key(|tier| tier.min_combo);
        if let Some(pair) = tiers
            .windows(2)
            .find(|pair| pair[0].min_combo == pair[1].min_combo)
        {
            return Err(ScoringError::DuplicateTier(pair[0].min_combo));
        }

        let max_multiplier = tiers
            .iter()
            .map(|tier| tier.multiplier)
            .fold(1.0_f32, f32::max);

        Ok(Self {
            tiers,
            max_multiplier,
        })
    }

    pub fn tiers(&self) -> &[ComboTier] {
        &self.tiers
    }
}

impl ComboStrategy for SteppedComboStrategy {
    fn calculate_multiplier(&self, combo: u32) -> f32 {
        if combo == 0 {
            return 1.0;
        }

        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_combo <= combo)
            .map_or(1.0, |tier| tier.multiplier)
    }

    fn max_multiplier(&self) -> f32 {
        self.max_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_zero_combo_is_one() {
        let strategy = LinearComboStrategy::new(0.5, 3.0).unwrap();
        assert_eq!(strategy.calculate_multiplier(0), 1.0);
    }

    #[test]
    fn test_linear_formula() {
        let strategy = LinearComboStrategy::default();
        assert!((strategy.calculate_multiplier(1) - 1.1).abs() < 0.0001);
        assert!((strategy.calculate_multiplier(3) - 1.3).abs() < 0.0001);
        assert!((strategy.calculate_multiplier(10) - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_linear_capped_at_max() {
        let strategy = LinearComboStrategy::default();
        assert_eq!(strategy.calculate_multiplier(40), 5.0);
        assert_eq!(strategy.calculate_multiplier(u32::MAX), 5.0);
    }

    #[test]
    fn test_linear_zero_rate_stays_flat() {
        let strategy = LinearComboStrategy::new(0.0, 1.0).unwrap();
        for combo in [0, 1, 7, 1000] {
            assert_eq!(strategy.calculate_multiplier(combo), 1.0);
        }
    }

    #[test]
    fn test_linear_rejects_negative_rate() {
        assert_eq!(
            LinearComboStrategy::new(-0.1, 5.0),
            Err(ScoringError::InvalidPerCombo(-0.1))
        );
    }

    #[test]
    fn test_linear_rejects_max_below_one() {
        assert_eq!(
            LinearComboStrategy::new(0.1, 0.5),
            Err(ScoringError::InvalidMaxMultiplier(0.5))
        );
    }

    #[test]
    fn test_linear_rejects_nan() {
        assert!(LinearComboStrategy::new(f32::NAN, 5.0).is_err());
        assert!(LinearComboStrategy::new(0.1, f32::NAN).is_err());
    }

    #[test]
    fn test_linear_default_values() {
        let strategy = LinearComboStrategy::default();
        assert_eq!(strategy.per_combo(), DEFAULT_PER_COMBO);
        assert_eq!(strategy.max_multiplier(), DEFAULT_MAX_MULTIPLIER);
    }

    #[test]
    fn test_stepped_lookup() {
        let strategy = SteppedComboStrategy::new(vec![
            ComboTier::new(10, 3.0),
            ComboTier::new(3, 1.5),
            ComboTier::new(5, 2.0),
        ])
        .unwrap();

        assert_eq!(strategy.calculate_multiplier(0), 1.0);
        assert_eq!(strategy.calculate_multiplier(2), 1.0);
        assert_eq!(strategy.calculate_multiplier(3), 1.5);
        assert_eq!(strategy.calculate_multiplier(4), 1.5);
        assert_eq!(strategy.calculate_multiplier(5), 2.0);
        assert_eq!(strategy.calculate_multiplier(99), 3.0);
        assert_eq!(strategy.max_multiplier(), 3.0);
    }

    #[test]
    fn test_stepped_tiers_sorted() {
        let strategy =
            SteppedComboStrategy::new(vec![ComboTier::new(8, 2.0), ComboTier::new(2, 1.2)])
                .unwrap();
        let thresholds: Vec<u32> = strategy.tiers().iter().map(|t| t.min_combo).collect();
        assert_eq!(thresholds, vec![2, 8]);
    }

    #[test]
    fn test_stepped_empty_table_is_flat() {
        let strategy = SteppedComboStrategy::new(Vec::new()).unwrap();
        assert_eq!(strategy.calculate_multiplier(50), 1.0);
        assert_eq!(strategy.max_multiplier(), 1.0);
    }

    #[test]
    fn test_stepped_rejects_low_multiplier() {
        let result = SteppedComboStrategy::new(vec![ComboTier::new(4, 0.9)]);
        assert_eq!(
            result,
            Err(ScoringError::InvalidTierMultiplier {
                min_combo: 4,
                multiplier: 0.9
            })
        );
    }

    #[test]
    fn test_stepped_rejects_duplicate_threshold() {
        let result =
            SteppedComboStrategy::new(vec![ComboTier::new(4, 1.5), ComboTier::new(4, 2.0)]);
        assert_eq!(result, Err(ScoringError::DuplicateTier(4)));
    }
}
