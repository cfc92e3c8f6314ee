pub mod analysis;
pub mod family;
pub mod health;
pub mod profile;
pub mod selection;
pub mod server;
