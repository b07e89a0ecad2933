use crate::combo::{
    ComboStrategy, ComboTier, LinearComboStrategy, SteppedComboStrategy, DEFAULT_MAX_MULTIPLIER,
    DEFAULT_PER_COMBO,
};
use crate::error::{Result, ScoringError};
use crate::modifier::FixedModifier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComboConfig {
    Linear { per_combo: f32, max_multiplier: f32 },
    Stepped { tiers: Vec<ComboTier> },
}

impl ComboConfig {
    pub fn standard() -> Self {
        Self::Linear {
            per_combo: DEFAULT_PER_COMBO,
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
        }
    }

    /// Combo still counts, but never scales points.
    pub fn disabled() -> Self {
        Self::Linear {
            per_combo: 0.0,
            max_multiplier: 1.0,
        }
    }

    pub fn build(&self) -> Result<Box<dyn ComboStrategy>> {
        match self {
            Self::Linear {
                per_combo,
                max_multiplier,
            } => Ok(Box::new(LinearComboStrategy::new(
                *per_combo,
                *max_multiplier,
            )?)),
            Self::Stepped { tiers } => Ok(Box::new(SteppedComboStrategy::new(tiers.clone())?)),
        }
    }
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModifierConfig {
    pub id: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub bonus: i32,
    #[serde(default = "default_multiplier")]
    pub multiplier: f32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_multiplier() -> f32 {
    1.0
}

fn default_active() -> bool {
    true
}

impl ModifierConfig {
    pub fn build(&self) -> Result<FixedModifier> {
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(ScoringError::InvalidModifierFactor {
                id: self.id.clone(),
                factor: self.multiplier,
            });
        }

        Ok(
            FixedModifier::new(self.id.clone(), self.priority, self.bonus, self.multiplier)
                .with_active(self.active),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub combo: ComboConfig,
    #[serde(default)]
    pub modifiers: Vec<ModifierConfig>,
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for modifier in &self.modifiers {
            if !seen.insert(modifier.id.as_str()) {
                return Err(ScoringError::DuplicateModifierId(modifier.id.clone()));
            }
        }
        Ok(())
    }
}
