//! Build manifest.
//!
//! The manifest lists every root resource with its evaluated output, in the
//! order the pipeline left them:
//!
//! ```json
//! {
//!   "pages": 12,
//!   "resources": [
//!     { "kind": "copy", "name": "styles/main.css", "source": "/docmill/styles/main.css" },
//!     { "kind": "write", "name": "scripts/sourceset_dependencies.js", "content": "..." }
//!   ]
//! }
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use docmill_pages::{Dri, RenderedResource, RootPage, SourceSetId, WriteError};
use serde::Serialize;

use crate::locations::Locations;

/// One evaluated resource.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ManifestEntry {
    Copy { name: String, source: PathBuf },
    Write { name: String, content: String },
}

/// Evaluated pipeline output.
#[derive(Debug, Serialize)]
pub(crate) struct Manifest {
    pub pages: usize,
    pub resources: Vec<ManifestEntry>,
}

impl Manifest {
    /// Evaluate every resource of `root` against `locations`.
    ///
    /// Fails on the first resource whose content cannot be computed.
    pub(crate) fn render(root: &RootPage, locations: &Locations) -> Result<Self, WriteError> {
        let resolver = |dri: &Dri, source_sets: &BTreeSet<SourceSetId>| {
            locations.resolve(dri, source_sets)
        };
        let resources = root
            .resources()
            .map(|resource| {
                let entry = match resource.strategy.render(&resolver)? {
                    RenderedResource::Copy(source) => ManifestEntry::Copy {
                        name: resource.name.clone(),
                        source,
                    },
                    RenderedResource::Text(content) => ManifestEntry::Write {
                        name: resource.name.clone(),
                        content,
                    },
                };
                Ok(entry)
            })
            .collect::<Result<Vec<_>, WriteError>>()?;

        Ok(Self {
            pages: root.content_pages().len(),
            resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmill_pages::{ContentPage, LocationError, RenderingStrategy, ResourcePage};
    use pretty_assertions::assert_eq;

    fn root_with(resources: Vec<ResourcePage>) -> RootPage {
        let module = ContentPage::new("m", Dri::new("m"))
            .with_child(ContentPage::new("f", Dri::new("m").with_callable("f()")));
        let mut children = vec![module.into()];
        children.extend(resources.into_iter().map(Into::into));
        RootPage::new(children)
    }

    #[test]
    fn test_render_all_strategies() {
        let root = root_with(vec![
            ResourcePage::new("styles/main.css", RenderingStrategy::copy("/docmill/styles/main.css")),
            ResourcePage::new("scripts/a.js", RenderingStrategy::write("let a;")),
            ResourcePage::new(
                "scripts/where.js",
                RenderingStrategy::location_resolvable_write(|resolve| {
                    Ok(resolve(&Dri::new("m").with_callable("f()"), &Default::default())?)
                }),
            ),
        ]);
        let locations = Locations::from_root(&root);

        let manifest = Manifest::render(&root, &locations).unwrap();

        assert_eq!(manifest.pages, 2);
        assert_eq!(
            manifest.resources,
            vec![
                ManifestEntry::Copy {
                    name: "styles/main.css".to_owned(),
                    source: PathBuf::from("/docmill/styles/main.css"),
                },
                ManifestEntry::Write {
                    name: "scripts/a.js".to_owned(),
                    content: "let a;".to_owned(),
                },
                ManifestEntry::Write {
                    name: "scripts/where.js".to_owned(),
                    content: "m/f.html".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_render_propagates_unresolved_location() {
        let root = root_with(vec![ResourcePage::new(
            "scripts/broken.js",
            RenderingStrategy::location_resolvable_write(|resolve| {
                Ok(resolve(&Dri::new("gone"), &Default::default())?)
            }),
        )]);

        let err = Manifest::render(&root, &Locations::from_root(&root)).unwrap_err();

        assert!(matches!(
            err,
            WriteError::Location(LocationError::Unresolved { .. })
        ));
    }

    #[test]
    fn test_manifest_json_shape() {
        let manifest = Manifest {
            pages: 1,
            resources: vec![ManifestEntry::Write {
                name: "a.js".to_owned(),
                content: "x".to_owned(),
            }],
        };

        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "pages": 1,
                "resources": [{ "kind": "write", "name": "a.js", "content": "x" }]
            })
        );
    }
}
