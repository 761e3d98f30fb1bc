//! Navigation model.
//!
//! The navigation tree is derived from the content tree once and never
//! mutated afterwards. It is kept in the page tree as a [`NavigationPage`]
//! for template use.

use std::collections::BTreeSet;

use crate::dri::{Dri, SourceSetId};

/// Navigation item with children for the UI tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationNode {
    /// Page name.
    pub name: String,
    /// Display text.
    pub label: String,
    /// Key used by client-side search.
    pub search_key: String,
    /// Primary DRI of the page this node points at.
    pub dri: Dri,
    /// Source-sets the page is relevant to.
    pub source_sets: BTreeSet<SourceSetId>,
    /// Child navigation items.
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// Create a navigation node whose label and search key equal its name.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        dri: Dri,
        source_sets: BTreeSet<SourceSetId>,
        children: Vec<NavigationNode>,
    ) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            search_key: name.clone(),
            name,
            dri,
            source_sets,
            children,
        }
    }

    /// Iterate this node and all its descendants in pre-order.
    #[must_use]
    pub fn with_descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator over a navigation subtree.
///
/// Created by [`NavigationNode::with_descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a NavigationNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a NavigationNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Page node carrying the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationPage {
    /// Root of the navigation tree.
    pub root: NavigationNode,
}

impl NavigationPage {
    /// Wrap a navigation tree.
    #[must_use]
    pub fn new(root: NavigationNode) -> Self {
        Self { root }
    }

    /// Page name used by templates.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.root.name
    }
}
