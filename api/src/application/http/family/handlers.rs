pub mod create_family;
pub mod delete_family;
pub mod get_families;
pub mod get_family;
pub mod rename_family;
pub mod toggle_member;
