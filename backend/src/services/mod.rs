pub mod assets;
pub mod client_config;
pub mod stub;
