//! Installers for the bundled scripts, stylesheets and images.
//!
//! Each installer appends one resource page per catalog entry to the root.
//! Scripts and stylesheets are additionally declared on every content page so
//! templates link them; images are referenced from stylesheets only.
//!
//! Installers are not idempotent: running one twice appends its resources
//! twice.

use docmill_pages::{PageTransformer, RootPage, TransformError};

use crate::catalog::{IMAGES, SCRIPTS, STYLES, bundled_resource_pages};

fn install_bundled(input: &RootPage, names: &[&str], mark_pages: bool) -> RootPage {
    let installed = input.with_appended(bundled_resource_pages(names));
    if mark_pages {
        installed.transform_content_pages_tree(|page| page.with_embedded_resources(names))
    } else {
        installed
    }
}

/// Installs [`SCRIPTS`] and declares them on every content page.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptsInstaller;

impl PageTransformer for ScriptsInstaller {
    fn name(&self) -> &'static str {
        "scripts"
    }

    fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
        Ok(install_bundled(input, SCRIPTS, true))
    }
}

/// Installs [`STYLES`] and declares them on every content page.
#[derive(Clone, Copy, Debug, Default)]
pub struct StylesInstaller;

impl PageTransformer for StylesInstaller {
    fn name(&self) -> &'static str {
        "styles"
    }

    fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
        Ok(install_bundled(input, STYLES, true))
    }
}

/// Installs [`IMAGES`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AssetsInstaller;

impl PageTransformer for AssetsInstaller {
    fn name(&self) -> &'static str {
        "assets"
    }

    fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
        Ok(install_bundled(input, IMAGES, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{child_names, sample_root};
    use docmill_pages::PageNode;
    use pretty_assertions::assert_eq;

    fn install_all(root: &RootPage) -> RootPage {
        let root = ScriptsInstaller.transform(root).unwrap();
        let root = StylesInstaller.transform(&root).unwrap();
        AssetsInstaller.transform(&root).unwrap()
    }

    #[test]
    fn test_installers_append_catalogs_in_order() {
        let result = install_all(&sample_root());

        let mut expected = vec!["sample"];
        expected.extend(SCRIPTS);
        expected.extend(STYLES);
        expected.extend(IMAGES);
        assert_eq!(child_names(&result), expected);
    }

    #[test]
    fn test_installers_mark_every_page_with_scripts_and_styles() {
        let result = install_all(&sample_root());

        let mut expected: Vec<&str> = SCRIPTS.to_vec();
        expected.extend(STYLES);
        let pages = result.content_pages();
        assert_eq!(pages.len(), sample_root().content_pages().len());
        for page in pages {
            assert_eq!(page.embedded_resources, expected, "page {}", page.name);
        }
    }

    #[test]
    fn test_marking_keeps_existing_resources() {
        let root = sample_root()
            .transform_content_pages_tree(|page| page.with_embedded_resources(["scripts/own.js"]));

        let result = ScriptsInstaller.transform(&root).unwrap();

        for page in result.content_pages() {
            assert_eq!(page.embedded_resources[0], "scripts/own.js");
            assert_eq!(page.embedded_resources.len(), SCRIPTS.len() + 1);
        }
    }

    #[test]
    fn test_assets_do_not_mark_pages() {
        let result = AssetsInstaller.transform(&sample_root()).unwrap();

        assert!(
            result
                .content_pages()
                .iter()
                .all(|page| page.embedded_resources.is_empty())
        );
    }

    #[test]
    fn test_installer_twice_duplicates_resources() {
        let once = StylesInstaller.transform(&sample_root()).unwrap();
        let twice = StylesInstaller.transform(&once).unwrap();

        let main_css = twice
            .children
            .iter()
            .filter(|node| node.name() == "styles/main.css")
            .count();
        assert_eq!(main_css, 2);
        assert!(twice.children.iter().skip(1).all(PageNode::is_resource));
    }

    #[test]
    fn test_twice_does_not_duplicate_page_markers() {
        let once = ScriptsInstaller.transform(&sample_root()).unwrap();
        let twice = ScriptsInstaller.transform(&once).unwrap();

        for page in twice.content_pages() {
            assert_eq!(page.embedded_resources.len(), SCRIPTS.len());
        }
    }
}
