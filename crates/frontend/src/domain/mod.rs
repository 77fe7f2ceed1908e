pub mod favorites;
pub mod queries;
pub mod tables;
