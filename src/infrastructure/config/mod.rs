//! Configuration Repository Implementations

mod json_config;

pub use json_config::JsonConfigRepository;
