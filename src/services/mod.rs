// Service exports
pub mod seed;

pub use seed::{SeedData, SeedError};
