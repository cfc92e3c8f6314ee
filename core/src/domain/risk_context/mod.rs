//! Merges the profiles in context into a single risk context and renders the
//! instruction block spliced into the provider request.

pub mod entities;
pub mod services;
pub mod synonyms;
pub mod template;

pub use entities::{AgeGroup, AgeGroupFlags, RiskContext};
pub use services::{ContextBuilder, ProfileContext, build_risk_context, parse_age};
