pub mod config;
pub mod error;
pub mod generate;
pub mod interactions;
pub mod io;
pub mod model;
pub mod rendering;
pub mod state;
pub mod utils;

#[cfg(feature = "gui")]
pub mod ui;
