pub mod family_repository;

pub use family_repository::StoreFamilyRepository;
