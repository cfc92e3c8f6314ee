pub mod selection_repository;

pub use selection_repository::StoreSelectionRepository;
