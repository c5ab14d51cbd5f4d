//! CLI error types.

use vibedev_config::ConfigError;
use vibedev_renderer::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Failed to serialize render result: {0}")]
    Serialize(#[from] serde_json::Error),
}
