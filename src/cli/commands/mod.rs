pub mod config;
pub mod states;
