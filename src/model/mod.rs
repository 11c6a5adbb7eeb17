//src/model/mod.rs
pub mod catalogue;
pub mod elements;
pub mod structure;

// Re-exports for cleaner imports
pub use elements::{ElementProperties, ElementTable, Orbital};
pub use structure::{total_atoms, Atom, CoordinateMode, Structure};
