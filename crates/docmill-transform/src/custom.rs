//! User-provided images and stylesheets.
//!
//! Custom resources are declared on every content page and appended after the
//! bundled resources. A bundled resource with the same output name as a
//! custom one is dropped, so a custom `main.css` replaces the bundled
//! `styles/main.css`.

use std::collections::HashSet;

use docmill_config::{CustomResource, ResourcesConfig};
use docmill_pages::{
    PageNode, PageTransformer, RenderingStrategy, ResourcePage, RootPage, TransformError,
};

/// Installs custom assets under `images/` and custom stylesheets under
/// `styles/`, replacing bundled resources of the same name.
#[derive(Clone, Debug, Default)]
pub struct CustomResourceInstaller {
    custom_assets: Vec<PageNode>,
    custom_styles: Vec<PageNode>,
}

/// One copy-strategy page per distinct output name; the first file wins.
fn resource_pages(prefix: &str, resources: &[CustomResource]) -> Vec<PageNode> {
    let mut seen = HashSet::new();
    resources
        .iter()
        .filter(|r| {
            let first = seen.insert(r.name.as_str());
            if !first {
                tracing::debug!(
                    name = %r.name,
                    path = %r.path.display(),
                    "Ignoring duplicate custom resource"
                );
            }
            first
        })
        .map(|r| {
            ResourcePage::new(
                format!("{prefix}/{}", r.name),
                RenderingStrategy::copy(&r.path),
            )
            .into()
        })
        .collect()
}

impl CustomResourceInstaller {
    /// Create an installer for the given custom assets and stylesheets.
    #[must_use]
    pub fn new(custom_assets: &[CustomResource], custom_styles: &[CustomResource]) -> Self {
        Self {
            custom_assets: resource_pages("images", custom_assets),
            custom_styles: resource_pages("styles", custom_styles),
        }
    }

    /// Create an installer from resolved configuration.
    #[must_use]
    pub fn from_config(config: &ResourcesConfig) -> Self {
        Self::new(&config.custom_assets, &config.custom_styles)
    }

    /// Output names of all custom resources, assets first.
    fn output_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.custom_assets
            .iter()
            .chain(&self.custom_styles)
            .map(PageNode::name)
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

impl PageTransformer for CustomResourceInstaller {
    fn name(&self) -> &'static str {
        "custom-resources"
    }

    fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
        let names = self.output_names();
        let marked = input.transform_content_pages_tree(|page| page.with_embedded_resources(&names));

        let (resources, others): (Vec<PageNode>, Vec<PageNode>) =
            marked.children.into_iter().partition(PageNode::is_resource);

        let surviving = resources.into_iter().filter(|node| {
            let overridden = names.contains(&node.name());
            if overridden {
                tracing::debug!(name = node.name(), "Custom resource overrides bundled resource");
            }
            !overridden
        });

        let children = others
            .into_iter()
            .chain(surviving)
            .chain(self.custom_assets.iter().cloned())
            .chain(self.custom_styles.iter().cloned())
            .collect();
        Ok(RootPage::new(children))
    }
}
