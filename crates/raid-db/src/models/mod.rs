//! Database models (row mappings)

mod group;
mod job;
mod trainer_card;

pub use group::GroupModel;
pub use job::ScheduledJobModel;
pub use trainer_card::TrainerCardModel;
