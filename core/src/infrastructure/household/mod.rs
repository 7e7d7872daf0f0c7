pub mod mappers;
pub mod repositories;

pub use repositories::household_repository::PostgresHouseholdRepository;
