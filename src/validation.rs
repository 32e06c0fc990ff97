//! Input validation for workloads.
//!
//! Checks the contract every engine relies on before a simulation runs.
//! Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Zero or negative burst times
//! - Priorities outside `1..=max_priority`

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or a negative amount).
    EmptyBurst,
    /// Priority is below 1 or above the configured number of levels.
    PriorityOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. `arrival_time >= 0`
/// 3. `burst_time >= 1`
/// 4. `1 <= priority <= max_priority`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process], max_priority: i32) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyBurst,
                format!("Process {} has burst time {}", p.id, p.burst_time),
            ));
        }

        if p.priority < 1 || p.priority > max_priority {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Process {} has priority {} (expected 1..={max_priority})",
                    p.id, p.priority
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
