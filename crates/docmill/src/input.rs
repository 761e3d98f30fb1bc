//! JSON page-tree input.
//!
//! The input file holds the top-level pages of the documentation root:
//!
//! ```json
//! [
//!   {
//!     "name": "sample",
//!     "dri": ["sample///"],
//!     "source_sets": ["jvm"],
//!     "children": [
//!       { "name": "Color", "dri": ["com.example/Color//"], "kind": "enum" }
//!     ]
//!   }
//! ]
//! ```

use std::path::Path;

use docmill_pages::{ClasslikeKind, ContentPage, Dri, PageNode, RootPage, SourceSetId};
use serde::Deserialize;

use crate::error::CliError;

/// One content page as read from the input file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageInput {
    name: String,
    dri: Vec<Dri>,
    #[serde(default)]
    source_sets: Vec<SourceSetId>,
    #[serde(default)]
    kind: Option<ClasslikeKind>,
    #[serde(default)]
    embedded_resources: Vec<String>,
    #[serde(default)]
    children: Vec<PageInput>,
}

impl PageInput {
    fn into_page(self) -> Result<ContentPage, CliError> {
        let mut dris = self.dri.into_iter();
        let Some(primary) = dris.next() else {
            return Err(CliError::Validation(format!(
                "page '{}' has no DRI",
                self.name
            )));
        };

        let mut page = ContentPage::new(self.name, primary);
        for dri in dris {
            page = page.with_dri(dri);
        }
        for id in self.source_sets {
            page = page.with_source_set(id);
        }
        if let Some(kind) = self.kind {
            page = page.with_kind(kind);
        }

        let children = self
            .children
            .into_iter()
            .map(|child| child.into_page().map(PageNode::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(page
            .with_children(children)
            .with_embedded_resources(self.embedded_resources))
    }
}

/// Parse a page tree from JSON text.
pub(crate) fn parse_page_tree(json: &str) -> Result<RootPage, CliError> {
    let pages: Vec<PageInput> = serde_json::from_str(json)?;
    let children = pages
        .into_iter()
        .map(|page| page.into_page().map(PageNode::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RootPage::new(children))
}

/// Read a page tree from a JSON file.
pub(crate) fn read_page_tree(path: &Path) -> Result<RootPage, CliError> {
    let json = std::fs::read_to_string(path)?;
    let root = parse_page_tree(&json)?;
    tracing::debug!(path = %path.display(), pages = root.content_pages().len(), "Loaded page tree");
    Ok(root)
}
