//! Value objects - identifiers shared across the domain

mod snowflake;

pub use snowflake::Snowflake;
