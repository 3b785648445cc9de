use std::path::Path;

use anyhow::Context;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use shared::domain::{clamp_speed_ms, DEFAULT_SPEED_MS};
use step_driver::ArraySpec;

pub const DEFAULT_CONFIG_FILE: &str = "thinkpixel.toml";
const ENV_PREFIX: &str = "THINKPIXEL";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub array_len: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub speed_ms: u64,
    pub seed: Option<u64>,
    pub initial_route: String,
}

impl Default for Settings {
    fn default() -> Self {
        let spec = ArraySpec::default();
        Self {
            array_len: spec.len,
            min_value: spec.min_value,
            max_value: spec.max_value,
            speed_ms: DEFAULT_SPEED_MS,
            seed: None,
            initial_route: "/".into(),
        }
    }
}

impl Settings {
    pub fn array_spec(&self) -> ArraySpec {
        ArraySpec {
            len: self.array_len,
            min_value: self.min_value,
            max_value: self.max_value,
        }
    }

    /// Checks the array parameters and clamps the speed into the slider range.
    pub fn validated(mut self) -> anyhow::Result<Self> {
        self.array_spec()
            .validate()
            .context("invalid array settings")?;
        self.speed_ms = clamp_speed_ms(self.speed_ms);
        Ok(self)
    }
}

/// Loads defaults, then `path` (or `thinkpixel.toml` if present), then
/// `THINKPIXEL__*` environment variables.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    settings_from(builder)
}

fn settings_from(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Settings> {
    let settings = builder
        .build()
        .context("failed to read settings")?
        .try_deserialize::<Settings>()
        .context("failed to parse settings")?;
    settings.validated()
}
