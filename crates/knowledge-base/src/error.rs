//! Symptom Record Error Types

use crate::symptom::SymptomKey;
use thiserror::Error;

/// Contract violations when building a symptom record from loose input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymptomError {
    /// A recognized symptom was not answered
    #[error("Missing required symptom key: {0}")]
    MissingSymptomKey(SymptomKey),

    /// Input named a symptom outside the registry
    #[error("Unknown symptom key: {0}")]
    UnknownSymptomKey(String),
}
