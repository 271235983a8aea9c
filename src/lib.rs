#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod prune;
pub mod telemetry;
pub mod terminal;
pub mod version;
