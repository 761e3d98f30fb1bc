//! Default transformer order.

use docmill_config::{Config, ResourcesConfig};
use docmill_pages::PagePipeline;

use crate::custom::CustomResourceInstaller;
use crate::dependencies::{SourceSetDependencyAppender, SourceSetGraph};
use crate::installers::{AssetsInstaller, ScriptsInstaller, StylesInstaller};
use crate::navigation::NavigationInstaller;

/// Build the standard pipeline.
///
/// Navigation runs first so it only sees content pages. Custom resources run
/// after the bundled installers so they can replace bundled files.
#[must_use]
pub fn default_pipeline(resources: &ResourcesConfig, graph: SourceSetGraph) -> PagePipeline {
    PagePipeline::new()
        .with_transformer(NavigationInstaller)
        .with_transformer(ScriptsInstaller)
        .with_transformer(StylesInstaller)
        .with_transformer(AssetsInstaller)
        .with_transformer(CustomResourceInstaller::from_config(resources))
        .with_transformer(SourceSetDependencyAppender::new(graph))
}

/// Build the standard pipeline from loaded configuration.
#[must_use]
pub fn pipeline_from_config(config: &Config) -> PagePipeline {
    default_pipeline(
        &config.resources_resolved,
        SourceSetGraph::from_config(config),
    )
}
