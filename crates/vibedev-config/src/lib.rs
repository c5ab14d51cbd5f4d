//! Configuration management for VibeDev tooling.
//!
//! Parses `vibedev.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [renderer]
//! max_depth = 256
//! extract_title = true
//!
//! [renderer.link]
//! target = "_blank"
//! rel = "noopener noreferrer"
//! class = "text-primary hover:underline"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use vibedev_renderer::{DEFAULT_MAX_DEPTH, LinkAttrs};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override maximum document nesting depth.
    pub max_depth: Option<usize>,
    /// Override title extraction flag.
    pub extract_title: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vibedev.toml";

/// Upper bound for `renderer.max_depth`.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document renderer configuration.
    pub renderer: RendererConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Document renderer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Maximum nesting depth before subtrees are truncated.
    pub max_depth: usize,
    /// Whether to extract the first H1 as the document title.
    pub extract_title: bool,
    /// Attributes added to rendered links.
    pub link: LinkConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            extract_title: false,
            link: LinkConfig::default(),
        }
    }
}

/// Link attribute configuration.
///
/// Empty strings disable the corresponding attribute.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Browsing context for links.
    pub target: String,
    /// Link relationship.
    pub rel: String,
    /// Styling hook class.
    pub class: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        let LinkAttrs { target, rel, class } = LinkAttrs::default();
        Self { target, rel, class }
    }
}

impl From<&LinkConfig> for LinkAttrs {
    fn from(config: &LinkConfig) -> Self {
        Self {
            target: config.target.clone(),
            rel: config.rel.clone(),
            class: config.class.clone(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `vibedev.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(max_depth) = settings.max_depth {
            self.renderer.max_depth = max_depth;
        }
        if let Some(extract_title) = settings.extract_title {
            self.renderer.extract_title = extract_title;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_renderer()
    }

    fn validate_renderer(&self) -> Result<(), ConfigError> {
        let renderer = &self.renderer;
        if renderer.max_depth == 0 {
            return Err(ConfigError::Validation(
                "renderer.max_depth must be greater than 0".to_owned(),
            ));
        }
        if renderer.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "renderer.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }

        // A new browsing context without noopener hands the page to the opener.
        let link = &renderer.link;
        let isolated = link
            .rel
            .split_whitespace()
            .any(|token| {
                token.eq_ignore_ascii_case("noopener") || token.eq_ignore_ascii_case("noreferrer")
            });
        if link.target == "_blank" && !isolated {
            return Err(ConfigError::Validation(
                "renderer.link.rel must include noopener or noreferrer when target is _blank"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}
