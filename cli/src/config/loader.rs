//! Simple CLI configuration loader for greet
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./greet.json or ./.greet/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/greet/config.json or ~/.config/greet/config.json
//! 4. Built-in defaults (no file)

use anyhow::{anyhow, Context, Result};
use greet_core::config::{DEFAULT_MAX_INPUT_LEN, DEFAULT_TITLE};
use greet_core::ShellConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format, every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Program title shown in the banner
    pub title: Option<String>,
    /// Whether banners clear the screen
    pub clear_screen: Option<bool>,
    /// Input line cap in bytes
    pub max_input_len: Option<usize>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Directory searched for project-local config (defaults to cwd)
    working_dir: Option<PathBuf>,
    /// User config directory (defaults to the platform config dir)
    user_config_dir: Option<PathBuf>,
    /// Flag overrides
    title_override: Option<String>,
    no_clear: bool,
    max_input_len_override: Option<usize>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            working_dir: None,
            user_config_dir: dirs::config_dir(),
            title_override: None,
            no_clear: false,
            max_input_len_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Search this directory instead of the current one
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Use this directory as the user config root
    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    /// Set title override
    pub fn with_title_override(mut self, title: String) -> Self {
        self.title_override = Some(title);
        self
    }

    /// Disable screen clearing regardless of file settings
    pub fn with_no_clear(mut self, no_clear: bool) -> Self {
        self.no_clear = no_clear;
        self
    }

    /// Set input length override
    pub fn with_max_input_len_override(mut self, max_input_len: usize) -> Self {
        self.max_input_len_override = Some(max_input_len);
        self
    }

    /// Load and resolve configuration
    pub fn load(&self) -> Result<ShellConfig> {
        // Step 1: Find and load base configuration
        let mut config = match self.locate()? {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                self.load_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                RawConfig::default()
            }
        };

        // Step 2: Apply flag overrides
        if let Some(title) = &self.title_override {
            config.title = Some(title.clone());
        }
        if self.no_clear {
            config.clear_screen = Some(false);
        }
        if let Some(max_input_len) = self.max_input_len_override {
            config.max_input_len = Some(max_input_len);
        }

        // Step 3: Resolve to final shell config
        self.resolve_config(config)
    }

    /// Find the configuration file to use, if any
    pub fn locate(&self) -> Result<Option<PathBuf>> {
        if let Some(override_path) = &self.config_override {
            return self.resolve_override(override_path).map(Some);
        }

        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let candidates = [
            Some(cwd.join("greet.json")),
            Some(cwd.join(".greet").join("config.json")),
            self.user_config_dir
                .as_ref()
                .map(|dir| dir.join("greet").join("config.json")),
        ];

        Ok(candidates.into_iter().flatten().find(|path| path.is_file()))
    }

    /// Resolve an explicit --config path (file or directory)
    fn resolve_override(&self, path: &Path) -> Result<PathBuf> {
        if path.is_file() {
            Ok(path.to_path_buf())
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.is_file() {
                Ok(config_file)
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve raw config to ShellConfig
    fn resolve_config(&self, config: RawConfig) -> Result<ShellConfig> {
        let resolved = ShellConfig::new(config.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()))
            .with_clear_screen(config.clear_screen.unwrap_or(true))
            .with_max_input_len(config.max_input_len.unwrap_or(DEFAULT_MAX_INPUT_LEN));

        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
