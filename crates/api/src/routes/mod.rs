//! HTTP Routes

pub mod assessments;
pub mod registry;
