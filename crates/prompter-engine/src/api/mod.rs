pub mod config;
pub mod prompter;
pub mod types;
