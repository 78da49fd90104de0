//! Domain entities

mod group;
mod trainer_card;

pub use group::{normalize_location, Group, NewGroup};
pub use trainer_card::TrainerCard;
