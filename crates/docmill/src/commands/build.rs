//! `docmill build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docmill_config::{CliSettings, Config};
use docmill_transform::pipeline_from_config;

use crate::error::CliError;
use crate::input::read_page_tree;
use crate::locations::Locations;
use crate::manifest::Manifest;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// JSON file with the top-level pages of the documentation tree.
    #[arg(long)]
    pages: PathBuf,

    /// Path to configuration file (default: auto-discover docmill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the manifest to this file instead of stdout (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Additional custom asset installed under `images/` (repeatable).
    #[arg(long = "custom-asset", value_name = "PATH")]
    custom_assets: Vec<PathBuf>,

    /// Additional custom stylesheet installed under `styles/` (repeatable).
    #[arg(long = "custom-style", value_name = "PATH")]
    custom_styles: Vec<PathBuf>,

    /// Enable verbose output (log every pipeline step).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the page tree cannot be loaded,
    /// a transformer fails, or a resource cannot be rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            custom_assets: self.custom_assets,
            custom_styles: self.custom_styles,
            manifest: self.output,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Using config: {}", path.display()));
        }

        let root = read_page_tree(&self.pages)?;
        let result = pipeline_from_config(&config).run(root)?;

        let locations = Locations::from_root(&result);
        let manifest = Manifest::render(&result, &locations)?;
        let json = serde_json::to_string_pretty(&manifest).map_err(CliError::Manifest)?;

        match &config.output_resolved.manifest {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))?;
                output.success(&format!(
                    "Rendered {} pages and {} resources to {}",
                    manifest.pages,
                    manifest.resources.len(),
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")?;
            }
        }

        Ok(())
    }
}
