//! Symptom Knowledge Base
//!
//! The closed symptom vocabulary shared by intake front ends and the rule
//! engine, plus the fixed-shape record the engine evaluates.

mod error;
mod intake;
mod state;
mod symptom;

pub use error::SymptomError;
pub use intake::{parse_answer, PatientInfo, AGE_GROUP_OPTIONS, GENDER_OPTIONS};
pub use state::SymptomState;
pub use symptom::{list_symptoms, symptoms_in, SymptomCategory, SymptomKey};
