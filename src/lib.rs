// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod fetch;
pub mod gui;
pub mod log;
pub mod progress;
pub mod query;
pub mod session;
pub mod specs;
pub mod table;
