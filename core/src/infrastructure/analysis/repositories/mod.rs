pub mod favorite_repository;
pub mod history_repository;

pub use favorite_repository::StoreFavoriteRepository;
pub use history_repository::StoreHistoryRepository;
