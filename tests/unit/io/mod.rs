pub mod configuration;
pub mod resolver;
