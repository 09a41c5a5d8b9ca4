pub mod column;
pub mod config;
