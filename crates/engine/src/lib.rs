//! streak-engine - score, combo and modifier logic.
//!
//! Provides combo multiplier strategies, pluggable score modifiers and the
//! [`ScoreController`] that ties them together.

pub mod combo;
pub mod config;
pub mod controller;
pub mod error;
pub mod listeners;
pub mod modifier;

pub use combo::{ComboStrategy, ComboTier, LinearComboStrategy, SteppedComboStrategy};
pub use config::{ComboConfig, ModifierConfig, ScoringConfig};
pub use controller::ScoreController;
pub use error::{Result, ScoringError};
pub use listeners::ListenerId;
pub use modifier::{FixedModifier, ScoreModifier};

pub use streak_core::{ComboChanged, ScoreChangeType, ScoreChanged, ScoreContext, ScoreSnapshot};
