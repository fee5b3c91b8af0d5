use crate::domains::collision::Aabb;
use crate::domains::kinematics::{ArmModel, Position2D};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `KINEMATIC__ARM__FIRST_LINK_LENGTH=0.4`.
pub const ENV_PREFIX: &str = "KINEMATIC";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arm: ArmConfig,
    pub playback: PlaybackConfig,
    pub logging: LoggingConfig,
    pub obstacles: Vec<ObstacleConfig>,
    pub scenario: ScenarioConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    pub first_link_length: f64,
    pub second_link_length: f64,
    /// Visual link thickness, only meaningful to renderers.
    pub thickness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub step_duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub target: Option<[f64; 2]>,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            first_link_length: 0.3,
            second_link_length: 0.3,
            thickness: 0.01,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { step_duration_ms: 10 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl ObstacleConfig {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(Position2D::from(self.min), Position2D::from(self.max))
    }
}

impl Config {
    /// Config used when no file is present: default arm plus one obstacle in the
    /// lower-left quadrant.
    pub fn with_default_obstacle() -> Self {
        Self {
            obstacles: vec![ObstacleConfig {
                min: [-1.0, -1.0],
                max: [-0.5, -0.5],
            }],
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Layer an optional TOML file under `KINEMATIC__*` environment overrides.
    /// A missing file falls back to [`Config::with_default_obstacle`] values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut builder = ::config::Config::builder();
        if path.exists() {
            builder = builder.add_source(::config::File::from(path));
        } else {
            builder = builder.add_source(::config::Config::try_from(&Self::with_default_obstacle())?);
        }
        let config: Config = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.arm_model()?;
        if self.playback.step_duration_ms == 0 {
            bail!("playback.step_duration_ms must be positive");
        }
        if self.arm.thickness < 0.0 {
            bail!("arm.thickness must not be negative");
        }
        Ok(())
    }

    pub fn arm_model(&self) -> Result<ArmModel> {
        Ok(ArmModel::new(self.arm.first_link_length, self.arm.second_link_length)?)
    }

    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.playback.step_duration_ms)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.logging.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
