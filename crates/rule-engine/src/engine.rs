//! Rule Engine Implementation

use crate::rules::{Rule, RuleId, DEFAULT_RULE, RULES};
use crate::urgency::Urgency;
use crate::EngineError;
use knowledge_base::SymptomState;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Rule that produced the outcome
    pub rule: RuleId,
    pub diagnosis: String,
    pub recommendation: String,
    pub urgency: Urgency,
    pub explanation: String,
}

impl From<&Rule> for AssessmentResult {
    fn from(rule: &Rule) -> Self {
        Self {
            rule: rule.id,
            diagnosis: rule.outcome.diagnosis.to_string(),
            recommendation: rule.outcome.recommendation.to_string(),
            urgency: rule.outcome.urgency,
            explanation: rule.outcome.explanation.to_string(),
        }
    }
}

/// A validated record with its outcome and rule trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub symptoms: SymptomState,
    pub result: AssessmentResult,
    /// Every rule that applied, in priority order
    pub matched_rules: Vec<RuleId>,
}

/// First-match evaluator over the static rule table.
///
/// Holds only references to read-only tables, so a single value can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine {
    rules: &'static [Rule],
    fallback: &'static Rule,
}

impl RuleEngine {
    /// Create an engine over the clinical rule table
    pub fn new() -> Self {
        Self {
            rules: &RULES,
            fallback: &DEFAULT_RULE,
        }
    }

    /// Select the outcome of the highest-priority rule that applies
    pub fn evaluate(&self, state: &SymptomState) -> AssessmentResult {
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.matches(state))
            .unwrap_or(self.fallback);

        debug!(
            "Rule {} ({}) selected: {} [{}]",
            rule.priority(),
            rule.id,
            rule.outcome.diagnosis,
            rule.outcome.urgency
        );

        AssessmentResult::from(rule)
    }

    /// Validate loosely-shaped `(key, answer)` input, then evaluate it
    pub fn evaluate_entries<I, K>(&self, entries: I) -> Result<AssessmentResult, EngineError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        self.assess(entries).map(|assessment| assessment.result)
    }

    /// Like [`evaluate_entries`](Self::evaluate_entries), keeping the
    /// validated record and the rule trace
    pub fn assess<I, K>(&self, entries: I) -> Result<Assessment, EngineError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let symptoms = SymptomState::from_entries(entries).map_err(|e| {
            warn!("Assessment rejected: {}", e);
            e
        })?;

        Ok(Assessment {
            result: self.evaluate(&symptoms),
            matched_rules: self.matching_rules(&symptoms),
            symptoms,
        })
    }

    /// Every rule whose predicate holds, in priority order.
    ///
    /// Never includes the default. The first entry, if any, is the rule
    /// [`evaluate`](Self::evaluate) selects.
    pub fn matching_rules(&self, state: &SymptomState) -> Vec<RuleId> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(state))
            .map(|rule| rule.id)
            .collect()
    }

    /// The ordered rule table, without the default
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Rule table followed by the default
    pub fn catalogue(&self) -> impl Iterator<Item = &'static Rule> {
        self.rules.iter().chain(std::iter::once(self.fallback))
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
