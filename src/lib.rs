// ./src/lib.rs
//! Diskreter Löser der 2D-Wellengleichung ∂²f/∂t² = v²(∂²f/∂x² + ∂²f/∂y²)
//! auf einem festen Rechteckgitter, mit bilinearer Punktabtastung für die
//! Darstellung durch einen externen Render-Treiber.

pub mod debug;
pub mod math;
pub mod physics;

pub use math::error::{FieldError, FieldResult};
pub use math::types::{Bounds2D, Point2D};
pub use physics::wave::{Field, FieldConfig, ScalarGrid};

// Öffentliche API
pub mod prelude {
    pub use super::math::{
        error::{FieldError, FieldResult},
        types::{Bounds2D, Point2D},
    };
    pub use super::physics::wave::{Field, FieldConfig, ScalarGrid};
}
