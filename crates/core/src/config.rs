//! Construction-time star field parameters.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};
use crate::types::{
    DEFAULT_FIELD_SIZE, DEFAULT_FOV, DEFAULT_HEIGHT, DEFAULT_NUM_STARS, DEFAULT_WIDTH,
};

/// Parameters for building a [`Simulation`](crate::Simulation).
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    pub num_stars: usize,
    /// Perspective strength; smaller values exaggerate depth.
    pub fov: f64,
    /// Half-extent of the cube stars are sampled from.
    pub field_size: f64,
    /// Seed for the star generator. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_stars: DEFAULT_NUM_STARS,
            fov: DEFAULT_FOV,
            field_size: DEFAULT_FIELD_SIZE,
            seed: None,
        }
    }
}

impl StarFieldConfig {
    pub fn validate(&self) -> FieldResult<()> {
        validate_view(self.width, self.height, self.fov)?;
        if !(self.field_size.is_finite() && self.field_size > 0.0) {
            return Err(FieldError::invalid_configuration(format!(
                "field_size must be a finite value > 0, got {}",
                self.field_size
            )));
        }
        Ok(())
    }
}

/// Check the parameters shared by every projection.
pub(crate) fn validate_view(width: u16, height: u16, fov: f64) -> FieldResult<()> {
    if width == 0 || height == 0 {
        return Err(FieldError::invalid_configuration(format!(
            "grid must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    if !(fov.is_finite() && fov > 0.0) {
        return Err(FieldError::invalid_configuration(format!(
            "fov must be a finite value > 0, got {}",
            fov
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StarFieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 128);
        assert_eq!(config.height, 64);
        assert_eq!(config.num_stars, 150);
    }

    #[test]
    fn test_rejects_non_positive_fov() {
        for fov in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = StarFieldConfig {
                fov,
                ..StarFieldConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(FieldError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = StarFieldConfig {
            width: 0,
            ..StarFieldConfig::default()
        };
        assert!(config.validate().is_err());

        let config = StarFieldConfig {
            height: 0,
            ..StarFieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_field_size() {
        let config = StarFieldConfig {
            field_size: 0.0,
            ..StarFieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_stars_is_allowed() {
        let config = StarFieldConfig {
            num_stars: 0,
            ..StarFieldConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StarFieldConfig =
            serde_json::from_str(r#"{ "num_stars": 12, "seed": 7 }"#).unwrap();
        assert_eq!(config.num_stars, 12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.width, 128);
        assert_eq!(config.fov, 120.0);
    }
}
