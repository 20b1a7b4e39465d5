//! Fixed-Shape Symptom Record
//!
//! One boolean per recognized symptom key. A `SymptomState` is total by
//! construction; loosely-shaped input goes through [`SymptomState::from_entries`],
//! which rejects missing and unrecognized keys.

use crate::error::SymptomError;
use crate::symptom::SymptomKey;
use serde::{Deserialize, Serialize};

/// Observed symptoms for one assessment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymptomState {
    pub fever: bool,
    pub high_fever: bool,
    pub cough: bool,
    pub severe_cough: bool,
    pub sore_throat: bool,
    pub runny_nose: bool,
    pub sneezing: bool,
    pub body_aches: bool,
    pub fatigue: bool,
    pub difficulty_breathing: bool,
    pub chest_pain: bool,
    pub itchy_eyes: bool,
    pub headache: bool,
    pub nausea: bool,
    pub duration_long: bool,
}

impl SymptomState {
    /// Create a record with every symptom absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from flags in canonical key order
    pub fn from_flags(flags: [bool; SymptomKey::COUNT]) -> Self {
        let mut state = Self::new();
        for (key, present) in SymptomKey::ALL.into_iter().zip(flags) {
            state.set(key, present);
        }
        state
    }

    /// Flags in canonical key order
    pub fn flags(&self) -> [bool; SymptomKey::COUNT] {
        SymptomKey::ALL.map(|key| self.get(key))
    }

    /// Build from `(key, answer)` pairs, requiring every key exactly once.
    ///
    /// Unknown keys are reported first, in iteration order; otherwise the first
    /// missing key in canonical order is reported. A repeated key keeps its
    /// last answer.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, SymptomError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut answers: [Option<bool>; SymptomKey::COUNT] = [None; SymptomKey::COUNT];

        for (name, present) in entries {
            let key: SymptomKey = name.as_ref().parse()?;
            answers[key.index()] = Some(present);
        }

        let mut state = Self::new();
        for key in SymptomKey::ALL {
            match answers[key.index()] {
                Some(present) => state.set(key, present),
                None => return Err(SymptomError::MissingSymptomKey(key)),
            }
        }

        Ok(state)
    }

    /// Read one symptom
    pub fn get(&self, key: SymptomKey) -> bool {
        match key {
            SymptomKey::Fever => self.fever,
            SymptomKey::HighFever => self.high_fever,
            SymptomKey::Cough => self.cough,
            SymptomKey::SevereCough => self.severe_cough,
            SymptomKey::SoreThroat => self.sore_throat,
            SymptomKey::RunnyNose => self.runny_nose,
            SymptomKey::Sneezing => self.sneezing,
            SymptomKey::BodyAches => self.body_aches,
            SymptomKey::Fatigue => self.fatigue,
            SymptomKey::DifficultyBreathing => self.difficulty_breathing,
            SymptomKey::ChestPain => self.chest_pain,
            SymptomKey::ItchyEyes => self.itchy_eyes,
            SymptomKey::Headache => self.headache,
            SymptomKey::Nausea => self.nausea,
            SymptomKey::DurationLong => self.duration_long,
        }
    }

    /// Record one symptom
    pub fn set(&mut self, key: SymptomKey, present: bool) {
        let slot = match key {
            SymptomKey::Fever => &mut self.fever,
            SymptomKey::HighFever => &mut self.high_fever,
            SymptomKey::Cough => &mut self.cough,
            SymptomKey::SevereCough => &mut self.severe_cough,
            SymptomKey::SoreThroat => &mut self.sore_throat,
            SymptomKey::RunnyNose => &mut self.runny_nose,
            SymptomKey::Sneezing => &mut self.sneezing,
            SymptomKey::BodyAches => &mut self.body_aches,
            SymptomKey::Fatigue => &mut self.fatigue,
            SymptomKey::DifficultyBreathing => &mut self.difficulty_breathing,
            SymptomKey::ChestPain => &mut self.chest_pain,
            SymptomKey::ItchyEyes => &mut self.itchy_eyes,
            SymptomKey::Headache => &mut self.headache,
            SymptomKey::Nausea => &mut self.nausea,
            SymptomKey::DurationLong => &mut self.duration_long,
        };
        *slot = present;
    }

    /// Builder-style: mark a symptom present
    pub fn with(mut self, key: SymptomKey) -> Self {
        self.set(key, true);
        self
    }

    /// Symptoms marked present, in canonical order
    pub fn present(&self) -> impl Iterator<Item = SymptomKey> + '_ {
        SymptomKey::ALL.into_iter().filter(move |key| self.get(*key))
    }

    /// Whether no symptom was selected
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

impl FromIterator<SymptomKey> for SymptomState {
    fn from_iter<T: IntoIterator<Item = SymptomKey>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn complete_map(value: bool) -> BTreeMap<String, bool> {
        SymptomKey::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), value))
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let state = SymptomState::new();
        assert!(state.is_empty());
        assert_eq!(state.flags(), [false; SymptomKey::COUNT]);
    }

    #[test]
    fn test_get_set_address_the_same_field() {
        for key in SymptomKey::ALL {
            let mut state = SymptomState::new();
            state.set(key, true);
            assert!(state.get(key));
            assert_eq!(state.present().collect::<Vec<_>>(), vec![key]);
        }
    }

    #[test]
    fn test_from_entries_complete() {
        let mut map = complete_map(false);
        map.insert("chest_pain".to_string(), true);

        let state = SymptomState::from_entries(map).unwrap();
        assert!(state.chest_pain);
        assert_eq!(state.present().count(), 1);
    }

    #[test]
    fn test_from_entries_missing_key() {
        let mut map = complete_map(false);
        map.remove("nausea");
        map.remove("fever");

        let err = SymptomState::from_entries(map).unwrap_err();
        // First missing key in canonical order
        assert_eq!(err, SymptomError::MissingSymptomKey(SymptomKey::Fever));
    }

    #[test]
    fn test_from_entries_unknown_key() {
        let mut map = complete_map(true);
        map.insert("rash".to_string(), true);

        let err = SymptomState::from_entries(map).unwrap_err();
        assert_eq!(err, SymptomError::UnknownSymptomKey("rash".to_string()));
    }

    #[test]
    fn test_from_entries_empty_input() {
        let err = SymptomState::from_entries(Vec::<(&str, bool)>::new()).unwrap_err();
        assert_eq!(err, SymptomError::MissingSymptomKey(SymptomKey::Fever));
    }

    #[test]
    fn test_serde_rejects_partial_records() {
        let partial = r#"{"fever": true}"#;
        assert!(serde_json::from_str::<SymptomState>(partial).is_err());

        let full = serde_json::to_string(&SymptomState::new().with(SymptomKey::Cough)).unwrap();
        let parsed: SymptomState = serde_json::from_str(&full).unwrap();
        assert!(parsed.cough);
    }

    #[test]
    fn test_collect_from_keys() {
        let state: SymptomState = [SymptomKey::Sneezing, SymptomKey::RunnyNose]
            .into_iter()
            .collect();
        assert!(state.sneezing && state.runny_nose);
        assert!(!state.fever);
    }

    proptest! {
        #[test]
        fn prop_flags_round_trip(flags in any::<[bool; 15]>()) {
            let state = SymptomState::from_flags(flags);
            prop_assert_eq!(state.flags(), flags);
        }

        #[test]
        fn prop_entries_match_flags(flags in any::<[bool; 15]>()) {
            let entries: Vec<(&str, bool)> = SymptomKey::ALL
                .iter()
                .zip(flags)
                .map(|(k, v)| (k.as_str(), v))
                .collect();
            let state = SymptomState::from_entries(entries).unwrap();
            prop_assert_eq!(state, SymptomState::from_flags(flags));
        }
    }
}
