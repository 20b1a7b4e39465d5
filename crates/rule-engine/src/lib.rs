//! Clinical Rule Engine
//!
//! Evaluates a symptom record against an ordered table of clinical rules and
//! returns the outcome of the first rule that applies, or an
//! insufficient-symptoms default when none does.

mod engine;
mod rules;
mod urgency;

pub use engine::{Assessment, AssessmentResult, RuleEngine};
pub use rules::{Outcome, Rule, RuleId, DEFAULT_RULE, RULES};
pub use urgency::Urgency;

use knowledge_base::SymptomError;
use thiserror::Error;

/// Errors surfaced by the rule engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Input did not form a complete symptom record
    #[error(transparent)]
    InvalidSymptoms(#[from] SymptomError),
    /// Urgency label outside the closed set
    #[error("Unknown urgency tier: {0}")]
    UnknownUrgency(String),
}
