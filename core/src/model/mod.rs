pub mod benefit;
pub mod config;
pub mod settings;
