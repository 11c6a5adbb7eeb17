// src/ui/mod.rs
pub mod controllers;
pub mod window;

pub use window::build_ui;
