//! Page transformers for docmill.
//!
//! Each transformer takes the whole page tree and returns a new one:
//! - [`NavigationInstaller`]: derives the navigation tree and its JSON pane
//! - [`ScriptsInstaller`], [`StylesInstaller`], [`AssetsInstaller`]: install
//!   the bundled resources listed in [`catalog`]
//! - [`CustomResourceInstaller`]: installs user-provided images and
//!   stylesheets, replacing bundled files of the same name
//! - [`SourceSetDependencyAppender`]: emits the source-set dependency script
//!
//! [`default_pipeline`] chains them in the order the renderer expects.
//!
//! # Example
//!
//! ```
//! use docmill_config::ResourcesConfig;
//! use docmill_pages::{ContentPage, Dri, RootPage};
//! use docmill_transform::{SourceSetGraph, default_pipeline};
//!
//! let module = ContentPage::new("sample", Dri::new("sample"));
//! let root = RootPage::new(vec![module.into()]);
//!
//! let pipeline = default_pipeline(&ResourcesConfig::default(), SourceSetGraph::new());
//! let result = pipeline.run(root).unwrap();
//! assert!(result.resources().any(|r| r.name == "scripts/navigation-pane.json"));
//! ```

pub mod catalog;
mod custom;
mod dependencies;
mod installers;
mod navigation;
mod pipeline;
#[cfg(test)]
mod testing;

pub use custom::CustomResourceInstaller;
pub use dependencies::{SOURCESET_DEPENDENCIES, SourceSetDependencyAppender, SourceSetGraph};
pub use installers::{AssetsInstaller, ScriptsInstaller, StylesInstaller};
pub use navigation::{NAVIGATION_PANE, NavigationInstaller, build_navigation};
pub use pipeline::{default_pipeline, pipeline_from_config};
