//! `vibedev render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use vibedev_config::{CliSettings, Config, RendererConfig};
use vibedev_renderer::{DocumentRenderer, HtmlBackend, LinkAttrs};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Document JSON file (reads stdin when omitted or `-`).
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover vibedev.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum nesting depth before content is truncated (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Extract the first H1 heading as the document title.
    #[arg(long)]
    title: bool,

    /// Emit the full render result (html, title, warnings) as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            max_depth: self.max_depth,
            extract_title: self.title.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let source = read_input(self.input.as_deref())?;
        let result = build_renderer(&config.renderer).render_json(&source)?;

        for warning in &result.warnings {
            output.diagnostic(warning);
        }
        if let Some(title) = &result.title {
            output.title(title);
        }

        let body = if self.json {
            serde_json::to_string_pretty(&result)?
        } else {
            result.html
        };
        write_output(self.output.as_deref(), &body)?;

        if let Some(path) = &self.output {
            output.rendered(path);
        }
        Ok(())
    }
}

/// Build an HTML renderer from the `[renderer]` config section.
pub(crate) fn build_renderer(config: &RendererConfig) -> DocumentRenderer<HtmlBackend> {
    let renderer = DocumentRenderer::<HtmlBackend>::new()
        .with_max_depth(config.max_depth)
        .with_link_attrs(LinkAttrs::from(&config.link));
    if config.extract_title {
        renderer.with_title_extraction()
    } else {
        renderer
    }
}

/// Read the document from `path`, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

/// Write `body` to `path`, or stdout for `None`.
fn write_output(path: Option<&Path>, body: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, body)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
