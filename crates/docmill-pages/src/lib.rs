//! Page tree model for the docmill documentation generator.
//!
//! This crate provides:
//! - [`RootPage`] and [`PageNode`]: the immutable document tree handed from
//!   page generation to the renderer
//! - [`RenderingStrategy`]: deferred instructions for producing resource files
//! - [`NavigationNode`]: the navigation model derived from content pages
//! - [`PageTransformer`] and [`PagePipeline`]: ordered tree-to-tree steps
//!
//! # Quick Start
//!
//! ```
//! use docmill_pages::{ContentPage, Dri, PagePipeline, RootPage};
//!
//! let module = ContentPage::new("my-module", Dri::new("my.module"));
//! let root = RootPage::new(vec![module.into()]);
//!
//! let result = PagePipeline::new().run(root).unwrap();
//! assert_eq!(result.content_pages().len(), 1);
//! ```

mod dri;
mod navigation;
mod page;
mod strategy;
mod transformer;

pub use dri::{Dri, ParseDriError, SourceSetId};
pub use navigation::{Descendants, NavigationNode, NavigationPage};
pub use page::{ClasslikeKind, ContentPage, PageNode, ResourcePage, RootPage};
pub use strategy::{
    LocationError, LocationResolver, RenderedResource, RenderingStrategy, ResolvableWriteFn,
    WriteError,
};
pub use transformer::{PagePipeline, PageTransformer, TransformError};
