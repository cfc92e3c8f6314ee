pub mod analysis;
pub mod family;
pub mod llm;
pub mod profile;
pub mod selection;
pub mod store;
