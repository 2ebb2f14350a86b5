// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod loader;
pub mod pages;
pub mod progress;
pub mod router;
pub mod selection;

pub use app::run;
