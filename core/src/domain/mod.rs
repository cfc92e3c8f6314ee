pub mod analysis;
pub mod common;
pub mod family;
pub mod profile;
pub mod risk_context;
pub mod selection;
