pub mod clear_selection;
pub mod get_context;
pub mod get_selection;
pub mod set_selection;
