pub mod analysis_report;
pub mod favorite;
pub mod history_entry;

pub use analysis_report::*;
pub use favorite::*;
pub use history_entry::*;
