//! Dispatching rules and rule engine for ready-list ordering.
//!
//! Engines that keep a single ready list (preemptive SJF and the aging
//! priority-SJF hybrid) delegate their ordering policy to a [`RuleEngine`]
//! composed of [`DispatchingRule`]s.
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::RuleEngine;
//! use u_cpusim::dispatching::rules;
//! use u_cpusim::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_rule(rules::ShortestRemaining);
//!
//! let processes = vec![Process::new(1, 0, 8, 2), Process::new(2, 0, 3, 2)];
//! assert_eq!(engine.select_best(&processes, &[0, 1]), Some(1));
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A dispatching rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
