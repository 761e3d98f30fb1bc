//! Output locations of content pages.
//!
//! Pages with content children become directories with an `index.html`;
//! leaf pages become `<slug>.html` files next to their siblings.

use std::collections::{BTreeSet, HashMap};

use docmill_pages::{ContentPage, Dri, LocationError, RootPage, SourceSetId};

/// Location table built from a page tree.
#[derive(Debug, Default)]
pub(crate) struct Locations {
    by_dri: HashMap<Dri, String>,
}

/// File-system friendly form of a page name.
fn slug(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    if slug.is_empty() { "-".to_owned() } else { slug }
}

impl Locations {
    /// Assign a location to every content page of `root`.
    ///
    /// When two pages share a DRI the first one in pre-order wins.
    pub(crate) fn from_root(root: &RootPage) -> Self {
        let mut locations = Self::default();
        for page in root.top_level_content() {
            locations.visit(page, "");
        }
        tracing::debug!(count = locations.by_dri.len(), "Resolved page locations");
        locations
    }

    fn visit(&mut self, page: &ContentPage, parent: &str) {
        let dir = if parent.is_empty() {
            slug(&page.name)
        } else {
            format!("{parent}/{}", slug(&page.name))
        };
        let has_children = page.content_children().next().is_some();
        let location = if has_children {
            format!("{dir}/index.html")
        } else {
            format!("{dir}.html")
        };

        for dri in page.dri() {
            self.by_dri
                .entry(dri.clone())
                .or_insert_with(|| location.clone());
        }
        for child in page.content_children() {
            self.visit(child, &dir);
        }
    }

    /// Location of the page documenting `dri`.
    ///
    /// Source-sets do not affect the location; every page is emitted once.
    pub(crate) fn resolve(
        &self,
        dri: &Dri,
        _source_sets: &BTreeSet<SourceSetId>,
    ) -> Result<String, LocationError> {
        self.by_dri
            .get(dri)
            .cloned()
            .ok_or_else(|| LocationError::unresolved(dri))
    }
}
