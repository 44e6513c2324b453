// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendeter externer Typen
pub use nalgebra::Vector2;

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Vector2<f64>;
