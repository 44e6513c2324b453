// src/physics/wave/config.rs

use serde::{Deserialize, Serialize};

use crate::math::error::FieldResult;
use crate::math::types::Point2D;

use super::field;

/// Konstruktionsparameter für ein [`Field`](super::Field).
///
/// Die Defaults entsprechen dem ursprünglichen Demo-Aufbau: 50x50 Knoten
/// über [-2.5, 2.5]².
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Untere linke Ecke der Domäne.
    pub min: Point2D,
    /// Obere rechte Ecke der Domäne (wird beim Aufbau auf das Gitter gerundet).
    pub max: Point2D,
    /// Gitterweite, muss positiv sein.
    pub step: f64,
    /// Skalierung des Laplace-Terms in der Wellengleichung.
    pub speed: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min: Point2D::new(-2.5, -2.5),
            max: Point2D::new(2.5, 2.5),
            step: 0.1,
            speed: 0.2,
        }
    }
}

impl FieldConfig {
    /// Prüft die Parameter, ohne ein Feld anzulegen.
    pub fn validate(&self) -> FieldResult<()> {
        field::cell_counts(self.min, self.max, self.step).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::error::FieldError;

    #[test]
    fn test_default_config_is_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_step_is_rejected() {
        let config = FieldConfig {
            step: 0.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_too_small_domain_is_rejected() {
        let config = FieldConfig {
            max: Point2D::new(-2.3, 2.5),
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidDomain { .. })
        ));
    }
}
