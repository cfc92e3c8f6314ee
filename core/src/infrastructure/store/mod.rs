pub mod json_store;

pub use json_store::{
    ACTIVE_SELECTION_KEY, FAMILIES_KEY, FAVORITES_KEY, HISTORY_KEY, JsonStore, PROFILES_KEY,
    StoreEvent, StoreEventKind,
};
