//! TOML-based planner configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level planner configuration parsed from TOML.
///
/// All fields have defaults matching the standard planning problem. Load
/// from TOML with [`PlannerConfig::from_toml_file`] or use
/// [`PlannerConfig::standard`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Scheduling window and cost parameters.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Synthetic demo-data parameters.
    #[serde(default)]
    pub synthetic: SyntheticConfig,
}

/// Scheduling window and cost parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Number of consecutive days to schedule (1 to 7).
    pub window_days: usize,
    /// Cost added when consecutive days visit different facilities.
    pub switch_penalty: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            switch_penalty: 5.0,
        }
    }
}

/// Synthetic demo-data parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyntheticConfig {
    /// Number of facilities to generate (must be > 0).
    pub facilities: usize,
    /// Calendar year of the generated records.
    pub year: i32,
    /// Calendar month of the generated records (1 to 12).
    pub month: u32,
    /// Baseline daily consumption (kWh).
    pub base_kwh: f64,
    /// Sinusoidal monthly swing (kWh).
    pub amp_kwh: f64,
    /// Gaussian noise standard deviation (kWh).
    pub noise_std: f64,
    /// Master random seed.
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            facilities: 4,
            year: 2024,
            month: 6,
            base_kwh: 120.0,
            amp_kwh: 30.0,
            noise_std: 8.0,
            seed: 42,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"schedule.window_days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl PlannerConfig {
    /// Returns the standard planning problem: 7 days, penalty 5.
    pub fn standard() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            synthetic: SyntheticConfig::default(),
        }
    }

    /// Returns the short-trial preset: a 3-day window for quick runs over
    /// many facilities.
    pub fn short_trial() -> Self {
        Self {
            schedule: ScheduleConfig {
                window_days: 3,
                ..ScheduleConfig::default()
            },
            synthetic: SyntheticConfig {
                facilities: 8,
                ..SyntheticConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["standard", "short_trial"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "standard" => Ok(Self::standard()),
            "short_trial" => Ok(Self::short_trial()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.schedule;

        if s.window_days == 0 {
            errors.push(ConfigError {
                field: "schedule.window_days".into(),
                message: "must be > 0".into(),
            });
        }
        // Longer windows are out of scope for the weekly planner
        if s.window_days > 7 {
            errors.push(ConfigError {
                field: "schedule.window_days".into(),
                message: "must be <= 7".into(),
            });
        }
        if !s.switch_penalty.is_finite() || s.switch_penalty < 0.0 {
            errors.push(ConfigError {
                field: "schedule.switch_penalty".into(),
                message: "must be finite and >= 0".into(),
            });
        }

        let syn = &self.synthetic;
        if syn.facilities == 0 {
            errors.push(ConfigError {
                field: "synthetic.facilities".into(),
                message: "must be > 0".into(),
            });
        }
        if !(1..=12).contains(&syn.month) {
            errors.push(ConfigError {
                field: "synthetic.month".into(),
                message: "must be in [1, 12]".into(),
            });
        }
        if syn.base_kwh < 0.0 {
            errors.push(ConfigError {
                field: "synthetic.base_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if syn.amp_kwh < 0.0 {
            errors.push(ConfigError {
                field: "synthetic.amp_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if syn.noise_std < 0.0 {
            errors.push(ConfigError {
                field: "synthetic.noise_std".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_preset_valid() {
        let cfg = PlannerConfig::standard();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "standard should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_standard() {
        let cfg = PlannerConfig::from_preset("standard");
        assert!(cfg.is_ok());
    }

    #[test]
    fn from_preset_unknown() {
        let err = PlannerConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[schedule]
window_days = 5
switch_penalty = 2.5

[synthetic]
facilities = 3
year = 2023
month = 11
base_kwh = 90.0
amp_kwh = 20.0
noise_std = 4.0
seed = 7
"#;
        let cfg = PlannerConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.schedule.window_days), Some(5));
        assert_eq!(cfg.as_ref().map(|c| c.schedule.switch_penalty), Some(2.5));
        assert_eq!(cfg.as_ref().map(|c| c.synthetic.month), Some(11));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[schedule]
window_days = 7
bogus_field = true
"#;
        let result = PlannerConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[schedule]
switch_penalty = 1.0
"#;
        let cfg = PlannerConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        // switch_penalty overridden
        assert_eq!(cfg.as_ref().map(|c| c.schedule.switch_penalty), Some(1.0));
        // window_days kept default
        assert_eq!(cfg.as_ref().map(|c| c.schedule.window_days), Some(7));
        // synthetic kept default
        assert_eq!(cfg.as_ref().map(|c| c.synthetic.facilities), Some(4));
    }

    #[test]
    fn validation_catches_zero_window() {
        let mut cfg = PlannerConfig::standard();
        cfg.schedule.window_days = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "schedule.window_days"));
    }

    #[test]
    fn validation_catches_oversized_window() {
        let mut cfg = PlannerConfig::standard();
        cfg.schedule.window_days = 8;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "schedule.window_days"));
    }

    #[test]
    fn validation_catches_negative_penalty() {
        let mut cfg = PlannerConfig::standard();
        cfg.schedule.switch_penalty = -1.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "schedule.switch_penalty"));
    }

    #[test]
    fn validation_catches_negative_amplitude() {
        let mut cfg = PlannerConfig::standard();
        cfg.synthetic.amp_kwh = -10.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "synthetic.amp_kwh"));
    }

    #[test]
    fn validation_catches_bad_synthetic_month() {
        let mut cfg = PlannerConfig::standard();
        cfg.synthetic.month = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "synthetic.month"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in PlannerConfig::PRESETS {
            let cfg = PlannerConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn short_trial_has_a_smaller_window() {
        let standard = PlannerConfig::standard();
        let trial = PlannerConfig::short_trial();
        assert!(trial.schedule.window_days < standard.schedule.window_days);
        assert!(trial.synthetic.facilities > standard.synthetic.facilities);
    }
}
