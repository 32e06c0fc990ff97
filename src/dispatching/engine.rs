//! Rule engine for multi-criteria ready-list ordering.
//!
//! Applies rules in sequence; a later rule is consulted only when every
//! earlier rule ties. Full ties keep the candidates' given order, which is
//! ready-list insertion order in every engine.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for ready-list ordering.
///
/// # Example
/// ```
/// use u_cpusim::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_rule(rules::ShortestRemaining);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SRT"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Earlier rules dominate later ones.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the best candidate index (into `processes`).
    pub fn select_best(&self, processes: &[Process], candidates: &[usize]) -> Option<usize> {
        // min_by returns the first of equal minima, which keeps insertion order.
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.compare(&processes[a], &processes[b]))
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a).cmp(&rule.evaluate(b)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make_process(id: u32, remaining: i64, priority: i32) -> Process {
        let mut p = Process::new(id, 0, 30, priority);
        p.remaining_burst_time = remaining;
        p
    }

    #[test]
    fn test_srt_selection() {
        let processes = vec![
            make_process(1, 9, 1),
            make_process(2, 2, 1),
            make_process(3, 5, 1),
        ];
        let engine = RuleEngine::new().with_rule(rules::ShortestRemaining);

        assert_eq!(engine.select_best(&processes, &[0, 1, 2]), Some(1));
        assert_eq!(engine.select_best(&processes, &[0, 2]), Some(2));
    }

    #[test]
    fn test_priority_then_srt() {
        let processes = vec![
            make_process(1, 2, 3),
            make_process(2, 9, 1),
            make_process(3, 4, 1),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::Priority)
            .with_rule(rules::ShortestRemaining);

        // Priority 1 first (shorter of the two); priority 3 only when alone
        assert_eq!(engine.select_best(&processes, &[0, 1, 2]), Some(2));
        assert_eq!(engine.select_best(&processes, &[0, 1]), Some(1));
        assert_eq!(engine.select_best(&processes, &[0]), Some(0));
    }

    #[test]
    fn test_insertion_order_ties() {
        let processes = vec![make_process(1, 5, 1), make_process(2, 5, 1)];
        let engine = RuleEngine::new().with_rule(rules::ShortestRemaining);

        // Candidate order, not index or id order, decides full ties
        assert_eq!(engine.select_best(&processes, &[1, 0]), Some(1));
        assert_eq!(engine.select_best(&processes, &[0, 1]), Some(0));
    }

    #[test]
    fn test_empty_candidates() {
        let engine = RuleEngine::new().with_rule(rules::ShortestRemaining);
        assert!(engine.select_best(&[], &[]).is_none());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::ShortestRemaining);
        assert_eq!(format!("{engine:?}"), r#"RuleEngine { rules: ["SRT"] }"#);
    }
}
