pub mod analyze_image;
pub mod analyze_url;
pub mod get_favorites;
pub mod get_history;
pub mod get_history_entry;
pub mod toggle_favorite;
