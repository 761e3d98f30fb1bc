//! Bundled resources embedded in every generated site.

use docmill_pages::{PageNode, RenderingStrategy, ResourcePage};

/// Location bundled resources are copied from, keyed by resource name.
pub const BUNDLED_RESOURCE_ROOT: &str = "/docmill";

/// Scripts every page loads, in load order.
pub const SCRIPTS: &[&str] = &[
    "scripts/clipboard.js",
    "scripts/navigation-loader.js",
    "scripts/platform-content-handler.js",
    "scripts/main.js",
];

/// Stylesheets every page links, in cascade order.
pub const STYLES: &[&str] = &[
    "styles/style.css",
    "styles/logo-styles.css",
    "styles/jetbrains-mono.css",
    "styles/main.css",
];

/// Images referenced by the stylesheets and templates.
pub const IMAGES: &[&str] = &[
    "images/arrow_down.svg",
    "images/docs_logo.svg",
    "images/logo-icon.svg",
];

/// One copy-strategy resource page per name, in catalog order.
pub(crate) fn bundled_resource_pages(names: &[&str]) -> Vec<PageNode> {
    names
        .iter()
        .map(|name| {
            ResourcePage::new(
                *name,
                RenderingStrategy::copy(format!("{BUNDLED_RESOURCE_ROOT}/{name}")),
            )
            .into()
        })
        .collect()
}
