use crate::case::{CaseConverter, CaseStyle};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".dryutils.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_case_style")]
    pub case_style: CaseStyle,

    /// Keep `.` in place as a structural separator (dotted field paths).
    #[serde(default = "default_preserve_dots")]
    pub preserve_dots: bool,
}

fn default_case_style() -> CaseStyle {
    CaseStyle::Snake
}

fn default_preserve_dots() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_style: default_case_style(),
            preserve_dots: default_preserve_dots(),
        }
    }
}

impl Config {
    /// Load configuration with priority: explicit override > local config > global config > defaults
    pub fn load(case_style: Option<CaseStyle>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("loading global config from {}", global_path.display());
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            debug!("loading local config from {}", local_path.display());
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        if let Some(style) = case_style {
            config.case_style = style;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Values in `other` that differ from the defaults win.
    pub fn merge(mut self, other: Self) -> Self {
        if other.case_style != default_case_style() {
            self.case_style = other.case_style;
        }
        if other.preserve_dots != default_preserve_dots() {
            self.preserve_dots = other.preserve_dots;
        }
        debug!(
            "merged config: case_style={}, preserve_dots={}",
            self.case_style, self.preserve_dots
        );
        self
    }

    pub fn converter(&self) -> CaseConverter {
        CaseConverter::new(self.case_style).preserve_dots(self.preserve_dots)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dryutils").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
