//! Pluggable score bonuses and penalties.

use std::cell::Cell;
use std::rc::Rc;
use streak_core::ScoreContext;

/// A policy layered on top of the combo-scaled points of every score addition.
///
/// Bonuses of all active modifiers are summed and their factors multiplied,
/// in ascending `priority` order. Ties keep registration order.
pub trait ScoreModifier {
    fn id(&self) -> &str;

    /// Lower values apply first.
    fn priority(&self) -> i32;

    fn is_active(&self) -> bool {
        true
    }

    /// Flat points added after the combo multiplier.
    fn modify_score(&self, _context: &ScoreContext) -> i32 {
        0
    }

    /// Factor applied to the total; 1.0 leaves it unchanged.
    fn modify_multiplier(&self, _context: &ScoreContext) -> f32 {
        1.0
    }
}

/// Constant bonus and factor with a switchable active flag.
#[derive(Debug)]
pub struct FixedModifier {
    id: String,
    priority: i32,
    bonus: i32,
    factor: f32,
    active: Cell<bool>,
}

impl FixedModifier {
    pub fn new(id: impl Into<String>, priority: i32, bonus: i32, factor: f32) -> Self {
        Self {
            id: id.into(),
            priority,
            bonus,
            factor,
            active: Cell::new(true),
        }
    }

    pub fn bonus(id: impl Into<String>, priority: i32, points: i32) -> Self {
        Self::new(id, priority, points, 1.0)
    }

    pub fn factor(id: impl Into<String>, priority: i32, factor: f32) -> Self {
        Self::new(id, priority, 0, factor)
    }

    pub fn with_active(self, active: bool) -> Self {
        self.active.set(active);
        self
    }

    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

impl ScoreModifier for FixedModifier {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn modify_score(&self, _context: &ScoreContext) -> i32 {
        self.bonus
    }

    fn modify_multiplier(&self, _context: &ScoreContext) -> f32 {
        self.factor
    }
}

/// Modifiers keyed by reference identity, kept in registration order.
#[derive(Default)]
pub(crate) struct ModifierRegistry {
    entries: Vec<Rc<dyn ScoreModifier>>,
}

impl ModifierRegistry {
    pub fn register(&mut self, modifier: Rc<dyn ScoreModifier>) -> bool {
        if self.contains(&modifier) {
            return false;
        }
        self.entries.push(modifier);
        true
    }

    pub fn unregister(&mut self, modifier: &Rc<dyn ScoreModifier>) -> bool {
        let Some(index) = self.entries.iter().position(|m| Rc::ptr_eq(m, modifier)) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    pub fn contains(&self, modifier: &Rc<dyn ScoreModifier>) -> bool {
        self.entries.iter().any(|m| Rc::ptr_eq(m, modifier))
    }

    pub fn find(&self, id: &str) -> Option<&Rc<dyn ScoreModifier>> {
        self.entries.iter().find(|m| m.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Active modifiers, stable-sorted by priority.
    pub fn ordered_active(&self) -> Vec<&Rc<dyn ScoreModifier>> {
        let mut active: Vec<_> = self.entries.iter().filter(|m| m.is_active()).collect();
        active.sort_by_key(|m| m.priority());
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streak_core::ScoreChangeType;

    fn ctx() -> ScoreContext {
        ScoreContext::new(100, 0, 0, 1.0, ScoreChangeType::Add)
    }

    fn ids(modifiers: &[&Rc<dyn ScoreModifier>]) -> Vec<String> {
        modifiers.iter().map(|m| m.id().to_string()).collect()
    }

    #[test]
    fn test_fixed_modifier_values() {
        let modifier = FixedModifier::new("vip", 3, 25, 1.5);
        assert_eq!(modifier.id(), "vip");
        assert_eq!(modifier.priority(), 3);
        assert!(modifier.is_active());
        assert_eq!(modifier.modify_score(&ctx()), 25);
        assert!((modifier.modify_multiplier(&ctx()) - 1.5).abs() < 0.0001);
    }

    #[test]
    fn test_fixed_modifier_builders() {
        let bonus = FixedModifier::bonus("flat", 0, 50);
        assert_eq!(bonus.modify_score(&ctx()), 50);
        assert_eq!(bonus.modify_multiplier(&ctx()), 1.0);

        let factor = FixedModifier::factor("double", 0, 2.0);
        assert_eq!(factor.modify_score(&ctx()), 0);
        assert_eq!(factor.modify_multiplier(&ctx()), 2.0);
    }

    #[test]
    fn test_fixed_modifier_toggle() {
        let modifier = FixedModifier::bonus("event", 0, 10).with_active(false);
        assert!(!modifier.is_active());
        modifier.set_active(true);
        assert!(modifier.is_active());
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ModifierRegistry::default();
        let modifier: Rc<dyn ScoreModifier> = Rc::new(FixedModifier::bonus("a", 0, 1));
        assert!(registry.register(Rc::clone(&modifier)));
        assert!(!registry.register(Rc::clone(&modifier)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_identity_not_id_decides_membership() {
        let mut registry = ModifierRegistry::default();
        let first: Rc<dyn ScoreModifier> = Rc::new(FixedModifier::bonus("same", 0, 1));
        let second: Rc<dyn ScoreModifier> = Rc::new(FixedModifier::bonus("same", 0, 1));
        assert!(registry.register(first));
        assert!(registry.register(Rc::clone(&second)));
        assert_eq!(registry.len(), 2);
        assert!(registry.unregister(&second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_unknown_is_noop() {
        let mut registry = ModifierRegistry::default();
        let modifier: Rc<dyn ScoreModifier> = Rc::new(FixedModifier::bonus("a", 0, 1));
        assert!(!registry.unregister(&modifier));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_ordered_active_sorts_and_filters() {
        let mut registry = ModifierRegistry::default();
        registry.register(Rc::new(FixedModifier::bonus("late", 5, 1)));
        registry.register(Rc::new(FixedModifier::bonus("off", 0, 1).with_active(false)));
        registry.register(Rc::new(FixedModifier::bonus("early", -1, 1)));
        registry.register(Rc::new(FixedModifier::bonus("tie-a", 2, 1)));
        registry.register(Rc::new(FixedModifier::bonus("tie-b", 2, 1)));

        let ordered = registry.ordered_active();
        assert_eq!(ids(&ordered), vec!["early", "tie-a", "tie-b", "late"]);
    }

    #[test]
    fn test_find_by_id() {
        let mut registry = ModifierRegistry::default();
        registry.register(Rc::new(FixedModifier::bonus("vip", 0, 1)));
        assert!(registry.find("vip").is_some());
        assert!(registry.find("missing").is_none());
    }
}
