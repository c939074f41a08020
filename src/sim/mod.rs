pub mod cache;
pub mod config;
pub mod field;
pub mod fixture;
pub mod grid;
pub mod result;
