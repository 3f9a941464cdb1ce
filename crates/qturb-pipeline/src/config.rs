//! Run configuration.
//!
//! Every key is optional in the YAML file; missing keys take the defaults
//! below.
//!
//! ```yaml
//! num_qubits: 7
//! grid_size: 10
//! time_steps: { start: 0.1, stop: 2.0, count: 10 }   # or a list: [0.1, 0.5, 1.0]
//! pressure_points:
//!   - { x: 5, y: 5, z: 5, intensity: 10.0 }
//! theta: 0.7853981633974483
//! shots: 1024
//! seed: 42
//! ```

use std::f64::consts::FRAC_PI_4;
use std::path::Path;

use serde::{Deserialize, Serialize};

use qturb_field::PressurePoint;

use crate::error::{ConfigError, ConfigResult};

/// `count` evenly spaced values from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// The time values to run, either listed or evenly spaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSteps {
    /// Explicit values.
    List(Vec<f64>),
    /// Evenly spaced values, endpoints included.
    Linspace {
        /// First value.
        start: f64,
        /// Last value.
        stop: f64,
        /// Number of values.
        count: usize,
    },
}

impl TimeSteps {
    /// Resolve to the concrete values.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::List(values) => values.clone(),
            Self::Linspace { start, stop, count } => linspace(*start, *stop, *count),
        }
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        match self {
            Self::List(values) => values.len(),
            Self::Linspace { count, .. } => *count,
        }
    }

    /// Whether there are no time steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TimeSteps {
    fn default() -> Self {
        Self::Linspace {
            start: 0.1,
            stop: 2.0,
            count: 10,
        }
    }
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Qubits per circuit; also the classical bit count.
    #[serde(default = "default_num_qubits")]
    pub num_qubits: u32,
    /// Side length of the cubic field grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// Time values, one circuit and one field each.
    #[serde(default)]
    pub time_steps: TimeSteps,
    /// Field perturbation sources.
    #[serde(default = "default_pressure_points")]
    pub pressure_points: Vec<PressurePoint>,
    /// Value bound to the circuit's `θ` parameter.
    #[serde(default = "default_theta")]
    pub theta: f64,
    /// Shots per circuit.
    #[serde(default = "default_shots")]
    pub shots: u32,
    /// Seed for field noise. Unset draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_num_qubits() -> u32 {
    7
}

fn default_grid_size() -> usize {
    10
}

fn default_pressure_points() -> Vec<PressurePoint> {
    vec![
        PressurePoint::new(5, 5, 5, 10.0),
        PressurePoint::new(3, 7, 2, 15.0),
        PressurePoint::new(8, 2, 6, 5.0),
    ]
}

fn default_theta() -> f64 {
    FRAC_PI_4
}

fn default_shots() -> u32 {
    1024
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_qubits: default_num_qubits(),
            grid_size: default_grid_size(),
            time_steps: TimeSteps::default(),
            pressure_points: default_pressure_points(),
            theta: default_theta(),
            shots: default_shots(),
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Load and validate a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_qubits == 0 {
            return Err(ConfigError::Validation(
                "num_qubits must be at least 1".into(),
            ));
        }
        if self.grid_size == 0 {
            return Err(ConfigError::Validation(
                "grid_size must be at least 1".into(),
            ));
        }
        if self.shots == 0 {
            return Err(ConfigError::Validation("shots must be at least 1".into()));
        }
        if !self.theta.is_finite() {
            return Err(ConfigError::Validation(format!(
                "theta must be finite, got {}",
                self.theta
            )));
        }

        let steps = self.time_steps.values();
        if steps.is_empty() {
            return Err(ConfigError::Validation(
                "at least one time step is required".into(),
            ));
        }
        if let Some(t) = steps.iter().find(|t| !t.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "time steps must be finite, got {t}"
            )));
        }

        if let Some(p) = self.pressure_points.iter().find(|p| !p.intensity.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "pressure point ({}, {}, {}) has non-finite intensity",
                p.x, p.y, p.z
            )));
        }
        Ok(())
    }
}
