use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("per-combo rate must be non-negative, got {0}")]
    InvalidPerCombo(f32),

    #[error("max multiplier must be at least 1.0, got {0}")]
    InvalidMaxMultiplier(f32),

    #[error("combo tier at {min_combo} has multiplier {multiplier}, expected a finite value >= 1.0")]
    InvalidTierMultiplier { min_combo: u32, multiplier: f32 },

    #[error("combo tier threshold {0} appears more than once")]
    DuplicateTier(u32),

    #[error("modifier id `{0}` is configured more than once")]
    DuplicateModifierId(String),

    #[error("modifier `{id}` has factor {factor}, expected a finite non-negative value")]
    InvalidModifierFactor { id: String, factor: f32 },
}

pub type Result<T> = std::result::Result<T, ScoringError>;
