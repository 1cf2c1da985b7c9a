//! Cutting settings (§6 settings schema) with validated setters (C11).

use serde::{Deserialize, Serialize};

use crate::constants::SettingsDefaults;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuttingSettings {
    pub front_cutting_loss: f64,
    pub cutting_loss: f64,
    pub angle_tolerance: f64,
    pub max_chain_length: u32,
}

impl Default for CuttingSettings {
    fn default() -> Self {
        Self {
            front_cutting_loss: SettingsDefaults::FRONT_CUTTING_LOSS,
            cutting_loss: SettingsDefaults::CUTTING_LOSS,
            angle_tolerance: SettingsDefaults::ANGLE_TOLERANCE,
            max_chain_length: SettingsDefaults::MAX_CHAIN_LENGTH,
        }
    }
}

impl CuttingSettings {
    pub fn builder() -> CuttingSettingsBuilder {
        CuttingSettingsBuilder::default()
    }
}

/// Fluent, validating builder for [`CuttingSettings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CuttingSettingsBuilder {
    settings: CuttingSettingsOverride,
}

#[derive(Debug, Clone, Copy, Default)]
struct CuttingSettingsOverride {
    front_cutting_loss: Option<f64>,
    cutting_loss: Option<f64>,
    angle_tolerance: Option<f64>,
    max_chain_length: Option<u32>,
}

impl CuttingSettingsBuilder {
    pub fn front_cutting_loss(mut self, value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidFrontCuttingLoss { value });
        }
        self.settings.front_cutting_loss = Some(value);
        Ok(self)
    }

    pub fn cutting_loss(mut self, value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidCuttingLoss { value });
        }
        self.settings.cutting_loss = Some(value);
        Ok(self)
    }

    pub fn angle_tolerance(mut self, value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidTolerance { value });
        }
        self.settings.angle_tolerance = Some(value);
        Ok(self)
    }

    pub fn max_chain_length(mut self, value: u32) -> Result<Self, ConfigError> {
        if value < 2 {
            return Err(ConfigError::InvalidMaxChainLength { value });
        }
        self.settings.max_chain_length = Some(value);
        Ok(self)
    }

    pub fn build(self) -> CuttingSettings {
        let defaults = CuttingSettings::default();
        CuttingSettings {
            front_cutting_loss: self.settings.front_cutting_loss.unwrap_or(defaults.front_cutting_loss),
            cutting_loss: self.settings.cutting_loss.unwrap_or(defaults.cutting_loss),
            angle_tolerance: self.settings.angle_tolerance.unwrap_or(defaults.angle_tolerance),
            max_chain_length: self.settings.max_chain_length.unwrap_or(defaults.max_chain_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_schema() {
        let s = CuttingSettings::default();
        assert_eq!(s.front_cutting_loss, 10.0);
        assert_eq!(s.cutting_loss, 3.0);
        assert_eq!(s.angle_tolerance, 10.0);
        assert_eq!(s.max_chain_length, 50);
    }

    #[test]
    fn rejects_short_max_chain_length() {
        let err = CuttingSettings::builder().max_chain_length(1).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxChainLength { value: 1 });
    }

    #[test]
    fn rejects_negative_tolerance() {
        let err = CuttingSettings::builder().angle_tolerance(-1.0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTolerance { value: -1.0 });
    }

    #[test]
    fn builder_overrides_defaults() {
        let settings = CuttingSettings::builder()
            .max_chain_length(5)
            .unwrap()
            .cutting_loss(1.5)
            .unwrap()
            .build();
        assert_eq!(settings.max_chain_length, 5);
        assert_eq!(settings.cutting_loss, 1.5);
        assert_eq!(settings.front_cutting_loss, 10.0);
    }
}
