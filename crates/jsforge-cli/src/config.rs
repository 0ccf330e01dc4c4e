//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`ScaffoldOptions`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`JSFORGE_TEMPLATES_DIR`, `JSFORGE_OUTPUT_DIR`,
//!    `JSFORGE_BOILERPLATE_DIR`), including those loaded from `.env`
//! 2. Config file: `--config <FILE>`, else the platform config path if it exists
//! 3. Built-in defaults
//!
//! ```toml
//! [paths]
//! templates_dir = "templates"
//! output_dir = "generated"
//! boilerplate_dir = "boilerplate"
//!
//! [generation]
//! rollback_on_failure = false
//!
//! [output]
//! no_color = false
//! ```

use std::{fs, path::PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use jsforge_core::application::{RollbackPolicy, ScaffoldOptions};

pub const ENV_TEMPLATES_DIR: &str = "JSFORGE_TEMPLATES_DIR";
pub const ENV_OUTPUT_DIR: &str = "JSFORGE_OUTPUT_DIR";
pub const ENV_BOILERPLATE_DIR: &str = "JSFORGE_BOILERPLATE_DIR";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where templates, the bundle and generated projects live.
    pub paths: PathsConfig,
    /// Generation behaviour.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    pub boilerplate_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("generated"),
            boilerplate_dir: PathBuf::from("boilerplate"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Remove the half-written project when a step fails.
    pub rollback_on_failure: bool,
}

impl GenerationConfig {
    pub fn rollback_policy(&self) -> RollbackPolicy {
        if self.rollback_on_failure {
            RollbackPolicy::RemoveProject
        } else {
            RollbackPolicy::KeepPartial
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `config_file` is the path passed via `--config`.  When it is `None` the
    /// platform config file is used if present; a missing default file is not
    /// an error, but an explicitly named one is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Overlay path settings from the environment.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        if let Some(dir) = non_empty(ENV_TEMPLATES_DIR) {
            self.paths.templates_dir = dir;
        }
        if let Some(dir) = non_empty(ENV_OUTPUT_DIR) {
            self.paths.output_dir = dir;
        }
        if let Some(dir) = non_empty(ENV_BOILERPLATE_DIR) {
            self.paths.boilerplate_dir = dir;
        }
    }

    /// Options for one scaffold run.
    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions::new(&self.paths.output_dir, &self.paths.boilerplate_dir)
            .with_rollback(self.generation.rollback_policy())
    }

    /// Path to the platform configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "astudios", "jsforge")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jsforge.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_match_project_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.templates_dir, PathBuf::from("templates"));
        assert_eq!(cfg.paths.output_dir, PathBuf::from("generated"));
        assert_eq!(cfg.paths.boilerplate_dir, PathBuf::from("boilerplate"));
        assert!(!cfg.generation.rollback_on_failure);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("[paths]\noutput_dir = \"out\"\n");
        let cfg = AppConfig::from_file(&path).unwrap();

        assert_eq!(cfg.paths.output_dir, PathBuf::from("out"));
        assert_eq!(cfg.paths.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn rollback_flag_selects_policy() {
        let (_dir, path) = write_config("[generation]\nrollback_on_failure = true\n");
        let cfg = AppConfig::from_file(&path).unwrap();

        assert_eq!(cfg.scaffold_options().rollback, RollbackPolicy::RemoveProject);
        assert_eq!(
            AppConfig::default().scaffold_options().rollback,
            RollbackPolicy::KeepPartial
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_dir, path) = write_config("[paths\noutput_dir = ");
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config file"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let (_dir, path) = write_config("[paths]\nout = \"x\"\n");
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/jsforge.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn env_overrides_paths() {
        let env: HashMap<&str, &str> = [(ENV_OUTPUT_DIR, "elsewhere"), (ENV_TEMPLATES_DIR, "")]
            .into_iter()
            .collect();
        let mut cfg = AppConfig::default();
        cfg.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(cfg.paths.output_dir, PathBuf::from("elsewhere"));
        // empty values are ignored
        assert_eq!(cfg.paths.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn scaffold_options_use_configured_paths() {
        let options = AppConfig::default().scaffold_options();
        assert_eq!(options.output_root, PathBuf::from("generated"));
        assert_eq!(options.boilerplate_root, PathBuf::from("boilerplate"));
    }
}
