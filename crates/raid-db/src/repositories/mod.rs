//! PostgreSQL repository implementations

mod error;
mod group;
mod trainer_card;

pub use error::{map_db_error, map_unique_violation};
pub use group::PgGroupRepository;
pub use trainer_card::PgTrainerCardRepository;
