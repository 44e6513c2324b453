// src/physics/wave/mod.rs
pub mod config;
pub mod field;
pub mod grid;

pub use config::FieldConfig;
pub use field::Field;
pub use grid::ScalarGrid;
