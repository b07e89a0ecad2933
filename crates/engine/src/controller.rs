//! Score and combo bookkeeping.
//!
//! [`ScoreController`] owns the running score and combo count. Additions are
//! scaled by the combo strategy and then by the registered modifiers:
//!
//! ```text
//! delta = max(0, floor((base * combo_multiplier + Σ bonus) * Π factor))
//! ```
//!
//! All arithmetic happens in `f32` and is truncated once at the end.
//! Subtractions ignore combo and modifiers and clamp at zero.

use crate::combo::{ComboStrategy, LinearComboStrategy};
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::listeners::{ListenerId, Listeners};
use crate::modifier::{ModifierRegistry, ScoreModifier};
use std::rc::Rc;
use streak_core::{ComboChanged, ScoreChangeType, ScoreChanged, ScoreContext, ScoreSnapshot};

pub struct ScoreController {
    score: u32,
    combo: u32,
    strategy: Box<dyn ComboStrategy>,
    modifiers: ModifierRegistry,
    score_listeners: Listeners<ScoreChanged>,
    combo_listeners: Listeners<ComboChanged>,
    next_listener: u64,
}

impl Default for ScoreController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreController {
    pub fn new() -> Self {
        Self::with_strategy(LinearComboStrategy::default())
    }

    pub fn with_strategy(strategy: impl ComboStrategy + 'static) -> Self {
        Self::with_boxed_strategy(Box::new(strategy))
    }

    pub fn with_boxed_strategy(strategy: Box<dyn ComboStrategy>) -> Self {
        Self {
            score: 0,
            combo: 0,
            strategy,
            modifiers: ModifierRegistry::default(),
            score_listeners: Listeners::default(),
            combo_listeners: Listeners::default(),
            next_listener: 0,
        }
    }

    /// Builds the configured strategy and registers one fixed modifier per
    /// configured entry, in configuration order.
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        config.validate()?;
        let mut controller = Self::with_boxed_strategy(config.combo.build()?);
        for entry in &config.modifiers {
            controller.register_modifier(Rc::new(entry.build()?));
        }
        Ok(controller)
    }

    pub fn current_score(&self) -> u32 {
        self.score
    }

    pub fn combo_count(&self) -> u32 {
        self.combo
    }

    pub fn combo_multiplier(&self) -> f32 {
        self.strategy.calculate_multiplier(self.combo)
    }

    pub fn max_multiplier(&self) -> f32 {
        self.strategy.max_multiplier()
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot::new(self.score, self.combo, self.combo_multiplier())
    }

    /// Adds `base_points` scaled by combo and modifiers and returns the
    /// amount actually added. Non-positive input is ignored.
    pub fn add_score(&mut self, base_points: i32) -> u32 {
        if base_points <= 0 {
            return 0;
        }

        let previous = self.score;
        let delta = self.calculate_final_score(base_points as u32);
        self.score = self.score.saturating_add(delta);
        let added = self.score - previous;

        tracing::debug!(
            base_points,
            added,
            combo = self.combo,
            score = self.score,
            "score added"
        );
        self.score_listeners
            .emit(&ScoreChanged::new(previous, self.score, ScoreChangeType::Add));

        added
    }

    /// Removes up to `points`, never going below zero, and returns the
    /// amount actually removed. Non-positive input is ignored.
    pub fn subtract_score(&mut self, points: i32) -> u32 {
        if points <= 0 {
            return 0;
        }

        let previous = self.score;
        let removed = (points as u32).min(self.score);
        self.score -= removed;

        tracing::debug!(points, removed, score = self.score, "score subtracted");
        self.score_listeners.emit(&ScoreChanged::new(
            previous,
            self.score,
            ScoreChangeType::Subtract,
        ));

        removed
    }

    pub fn increment_combo(&mut self) {
        let previous = self.combo;
        self.combo = self.combo.saturating_add(1);
        self.emit_combo(previous, false);
    }

    /// Breaks the combo. Notifies even when the combo was already zero.
    pub fn reset_combo(&mut self) {
        let previous = self.combo;
        self.combo = 0;
        self.emit_combo(previous, true);
    }

    /// Zeroes score and combo. Unlike [`reset_combo`](Self::reset_combo),
    /// each notification is only sent if its value was non-zero.
    pub fn reset(&mut self) {
        let previous_score = self.score;
        let previous_combo = self.combo;

        self.score = 0;
        self.combo = 0;

        tracing::debug!(previous_score, previous_combo, "scoring reset");

        if previous_score != 0 {
            self.score_listeners.emit(&ScoreChanged::new(
                previous_score,
                0,
                ScoreChangeType::Subtract,
            ));
        }

        if previous_combo != 0 {
            self.emit_combo(previous_combo, true);
        }
    }

    /// Returns `false` if this exact modifier is already registered.
    pub fn register_modifier(&mut self, modifier: Rc<dyn ScoreModifier>) -> bool {
        let added = self.modifiers.register(Rc::clone(&modifier));
        tracing::debug!(id = modifier.id(), added, "modifier registered");
        added
    }

    /// Returns `false` if the modifier was not registered.
    pub fn unregister_modifier(&mut self, modifier: &Rc<dyn ScoreModifier>) -> bool {
        let removed = self.modifiers.unregister(modifier);
        tracing::debug!(id = modifier.id(), removed, "modifier unregistered");
        removed
    }

    pub fn has_modifier(&self, modifier: &Rc<dyn ScoreModifier>) -> bool {
        self.modifiers.contains(modifier)
    }

    /// First registered modifier with the given id.
    pub fn find_modifier(&self, id: &str) -> Option<Rc<dyn ScoreModifier>> {
        self.modifiers.find(id).cloned()
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    pub fn on_score_changed(
        &mut self,
        handler: impl FnMut(&ScoreChanged) + 'static,
    ) -> ListenerId {
        let id = self.next_listener_id();
        self.score_listeners.subscribe(id, Box::new(handler));
        id
    }

    pub fn on_combo_changed(
        &mut self,
        handler: impl FnMut(&ComboChanged) + 'static,
    ) -> ListenerId {
        let id = self.next_listener_id();
        self.combo_listeners.subscribe(id, Box::new(handler));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.score_listeners.unsubscribe(id) || self.combo_listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.score_listeners.len() + self.combo_listeners.len()
    }

    fn next_listener_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        id
    }

    fn calculate_final_score(&self, base_points: u32) -> u32 {
        let combo_multiplier = self.combo_multiplier();
        let context = ScoreContext::new(
            base_points,
            self.score,
            self.combo,
            combo_multiplier,
            ScoreChangeType::Add,
        );

        let mut bonus: i32 = 0;
        let mut factor: f32 = 1.0;
        for modifier in self.modifiers.ordered_active() {
            let modifier_bonus = modifier.modify_score(&context);
            let modifier_factor = modifier.modify_multiplier(&context);
            tracing::trace!(
                id = modifier.id(),
                priority = modifier.priority(),
                modifier_bonus,
                modifier_factor,
                "modifier applied"
            );
            bonus = bonus.saturating_add(modifier_bonus);
            factor *= modifier_factor;
        }

        let total = (context.combo_points() + bonus as f32) * factor;
        // `as` truncates toward zero and saturates; negatives and NaN become 0.
        total.max(0.0) as u32
    }

    fn emit_combo(&mut self, previous: u32, was_reset: bool) {
        let event = ComboChanged::new(previous, self.combo, self.combo_multiplier(), was_reset);
        tracing::trace!(
            previous,
            current = self.combo,
            multiplier = event.multiplier,
            was_reset,
            "combo changed"
        );
        self.combo_listeners.emit(&event);
    }
}
