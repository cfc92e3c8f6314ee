pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{ActiveSelection, ContextPreview};
pub use ports::{SelectionRepository, SelectionService};
