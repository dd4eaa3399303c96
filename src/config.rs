use crate::common::{ApplicationError, ApplicationResult};
use crate::domains::logger::LogLevel;
use crate::domains::movement::{Speed, SpeedConfig};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_WALK_SPEED: i64 = 0;
pub const DEFAULT_RUN_SPEED: i64 = 0;
pub const DEFAULT_SECOND_MILLIS: u64 = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub walk_speed: Option<SpeedValue>,
    #[serde(default)]
    pub run_speed: Option<SpeedValue>,
    /// Wall-clock milliseconds per simulated second.
    #[serde(default)]
    pub second_millis: Option<u64>,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

/// Speeds may be written as numbers or as numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeedValue {
    Number(i64),
    Text(String),
}

impl SpeedValue {
    fn resolve(&self, field: &str) -> ApplicationResult<Speed> {
        match self {
            SpeedValue::Number(n) => Ok(Speed::new(*n)),
            SpeedValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Speed::new)
                .map_err(|e| anyhow!("{} {:?} is not an integer: {}", field, s, e).into()),
        }
    }
}

/// One declarative action from the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
}

impl ActionSpec {
    pub fn travel(name: &str, duration: i64, direction: &str) -> Self {
        Self {
            name: name.to_string(),
            duration,
            direction: direction.to_string(),
            ..Self::default()
        }
    }
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ApplicationResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("cfg") | Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(ApplicationError::UnsupportedConfigFormat {
                path: path.display().to_string(),
            }),
        }
    }

    pub fn from_yaml_str(content: &str) -> ApplicationResult<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Built-in demo used when no configuration file is given.
    pub fn dry_run() -> Self {
        Self {
            log_level: Some("INFO".to_string()),
            walk_speed: Some(SpeedValue::Text("5".to_string())),
            run_speed: Some(SpeedValue::Text("6".to_string())),
            second_millis: None,
            actions: vec![
                ActionSpec::travel("walk", 5, "N"),
                ActionSpec::travel("run", 50, "E"),
            ],
        }
    }

    /// Resolved level, falling back to INFO when missing or unknown.
    pub fn resolve_log_level(&self) -> LogLevel {
        match self.log_level.as_deref() {
            None | Some("") => LogLevel::Info,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; using {}", e, LogLevel::Info);
                LogLevel::Info
            }),
        }
    }

    pub fn resolve_speeds(&self) -> ApplicationResult<SpeedConfig> {
        let walk = match &self.walk_speed {
            Some(value) => value.resolve("walkSpeed")?,
            None => {
                tracing::debug!("walkSpeed not configured, defaulting to {}", DEFAULT_WALK_SPEED);
                Speed::new(DEFAULT_WALK_SPEED)
            }
        };
        let run = match &self.run_speed {
            Some(value) => value.resolve("runSpeed")?,
            None => {
                tracing::debug!("runSpeed not configured, defaulting to {}", DEFAULT_RUN_SPEED);
                Speed::new(DEFAULT_RUN_SPEED)
            }
        };
        Ok(SpeedConfig { walk, run })
    }

    pub fn time_scale(&self) -> Duration {
        Duration::from_millis(self.second_millis.unwrap_or(DEFAULT_SECOND_MILLIS))
    }
}
