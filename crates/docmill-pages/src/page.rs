//! Document tree nodes.
//!
//! The tree is immutable. Every modification returns a new node that shares
//! unchanged subtrees with its input through [`Arc`], so a transformer that
//! only touches content pages re-allocates only those pages while resource
//! and navigation nodes are shared.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dri::{Dri, SourceSetId};
use crate::navigation::NavigationPage;
use crate::strategy::RenderingStrategy;

/// Kind of symbol documented by a classlike page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClasslikeKind {
    /// Ordinary class.
    Class,
    /// Interface.
    Interface,
    /// Singleton object.
    Object,
    /// Enum type.
    Enum,
    /// Constant of an enum type.
    EnumEntry,
    /// Annotation type.
    Annotation,
}

/// One documentation page.
#[derive(Clone, Debug)]
pub struct ContentPage {
    /// Display name.
    pub name: String,
    dri: Vec<Dri>,
    /// Source-sets the page is relevant to.
    pub source_sets: BTreeSet<SourceSetId>,
    /// Child pages in display order.
    pub children: Vec<PageNode>,
    /// Resources (scripts, styles) the page requires at render time, in
    /// insertion order without duplicates.
    pub embedded_resources: Vec<String>,
    /// Classlike kind, `None` for grouping and member pages.
    pub kind: Option<ClasslikeKind>,
}

impl ContentPage {
    /// Create a page documenting the symbol behind `dri`.
    #[must_use]
    pub fn new(name: impl Into<String>, dri: Dri) -> Self {
        Self {
            name: name.into(),
            dri: vec![dri],
            source_sets: BTreeSet::new(),
            children: Vec::new(),
            embedded_resources: Vec::new(),
            kind: None,
        }
    }

    /// Add another documented symbol to the page.
    #[must_use]
    pub fn with_dri(mut self, dri: Dri) -> Self {
        self.dri.push(dri);
        self
    }

    /// Mark the page as relevant to a source-set.
    #[must_use]
    pub fn with_source_set(mut self, id: impl Into<SourceSetId>) -> Self {
        self.source_sets.insert(id.into());
        self
    }

    /// Mark the page as classlike.
    #[must_use]
    pub fn with_kind(mut self, kind: ClasslikeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<PageNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Replace all children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<PageNode>) -> Self {
        self.children = children;
        self
    }

    /// All DRIs of the page. Never empty.
    #[must_use]
    pub fn dri(&self) -> &[Dri] {
        &self.dri
    }

    /// The first DRI, used as the page's cross-reference key.
    #[must_use]
    pub fn primary_dri(&self) -> &Dri {
        &self.dri[0]
    }

    /// Whether the page documents a classlike symbol.
    #[must_use]
    pub fn is_classlike(&self) -> bool {
        self.kind.is_some()
    }

    /// Direct children that are content pages.
    pub fn content_children(&self) -> impl Iterator<Item = &ContentPage> {
        self.children.iter().filter_map(PageNode::as_content)
    }

    /// Copy of this page with `names` added to its embedded resources.
    ///
    /// Names already present are kept in their original position.
    #[must_use]
    pub fn with_embedded_resources<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut page = self.clone();
        for name in names {
            let name = name.as_ref();
            if !page.embedded_resources.iter().any(|r| r == name) {
                page.embedded_resources.push(name.to_owned());
            }
        }
        page
    }

    /// Apply `operation` to this page and every content page below it.
    #[must_use]
    pub fn transform_content_pages_tree<F>(&self, operation: &F) -> Self
    where
        F: Fn(&ContentPage) -> ContentPage,
    {
        let children = self
            .children
            .iter()
            .map(|child| child.transform_content_pages_tree(operation))
            .collect();
        let mut page = operation(self);
        page.children = children;
        page
    }
}

/// Non-content artifact emitted alongside pages.
#[derive(Clone, Debug)]
pub struct ResourcePage {
    /// Relative output path (`scripts/*`, `styles/*`, `images/*`).
    pub name: String,
    /// How the output is produced.
    pub strategy: RenderingStrategy,
}

impl ResourcePage {
    /// Create a resource page.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: RenderingStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

/// Any node of the document tree below the root.
#[derive(Clone, Debug)]
pub enum PageNode {
    /// Documentation page.
    Content(Arc<ContentPage>),
    /// Script, stylesheet, image or generated data file.
    Resource(Arc<ResourcePage>),
    /// Navigation tree kept for templates.
    Navigation(Arc<NavigationPage>),
}

impl PageNode {
    /// Node name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Content(page) => &page.name,
            Self::Resource(page) => &page.name,
            Self::Navigation(page) => page.name(),
        }
    }

    /// Content page behind this node, if any.
    #[must_use]
    pub fn as_content(&self) -> Option<&ContentPage> {
        match self {
            Self::Content(page) => Some(page),
            _ => None,
        }
    }

    /// Resource page behind this node, if any.
    #[must_use]
    pub fn as_resource(&self) -> Option<&ResourcePage> {
        match self {
            Self::Resource(page) => Some(page),
            _ => None,
        }
    }

    /// Navigation page behind this node, if any.
    #[must_use]
    pub fn as_navigation(&self) -> Option<&NavigationPage> {
        match self {
            Self::Navigation(page) => Some(page),
            _ => None,
        }
    }

    /// Whether this node is a resource page.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        matches!(self, Self::Resource(_))
    }

    /// Apply `operation` to every content page in this subtree.
    ///
    /// Resource and navigation nodes are shared, not copied.
    #[must_use]
    pub fn transform_content_pages_tree<F>(&self, operation: &F) -> Self
    where
        F: Fn(&ContentPage) -> ContentPage,
    {
        match self {
            Self::Content(page) => {
                Self::Content(Arc::new(page.transform_content_pages_tree(operation)))
            }
            other => other.clone(),
        }
    }
}

impl From<ContentPage> for PageNode {
    fn from(page: ContentPage) -> Self {
        Self::Content(Arc::new(page))
    }
}

impl From<ResourcePage> for PageNode {
    fn from(page: ResourcePage) -> Self {
        Self::Resource(Arc::new(page))
    }
}

impl From<NavigationPage> for PageNode {
    fn from(page: NavigationPage) -> Self {
        Self::Navigation(Arc::new(page))
    }
}

/// Root of the document tree.
#[derive(Clone, Debug, Default)]
pub struct RootPage {
    /// Top-level nodes in output order.
    pub children: Vec<PageNode>,
}

impl RootPage {
    /// Create a root holding `children`.
    #[must_use]
    pub fn new(children: Vec<PageNode>) -> Self {
        Self { children }
    }

    /// Copy of this root with `nodes` appended after the existing children.
    #[must_use]
    pub fn with_appended<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = PageNode>,
    {
        let mut children = self.children.clone();
        children.extend(nodes);
        Self::new(children)
    }

    /// Apply `operation` to every content page in the tree.
    #[must_use]
    pub fn transform_content_pages_tree<F>(&self, operation: F) -> Self
    where
        F: Fn(&ContentPage) -> ContentPage,
    {
        Self::new(
            self.children
                .iter()
                .map(|child| child.transform_content_pages_tree(&operation))
                .collect(),
        )
    }

    /// Top-level content pages.
    pub fn top_level_content(&self) -> impl Iterator<Item = &ContentPage> {
        self.children.iter().filter_map(PageNode::as_content)
    }

    /// Top-level resource pages.
    pub fn resources(&self) -> impl Iterator<Item = &ResourcePage> {
        self.children.iter().filter_map(PageNode::as_resource)
    }

    /// Every content page in the tree, pre-order.
    #[must_use]
    pub fn content_pages(&self) -> Vec<&ContentPage> {
        fn collect<'a>(nodes: &'a [PageNode], out: &mut Vec<&'a ContentPage>) {
            for page in nodes.iter().filter_map(PageNode::as_content) {
                out.push(page);
                collect(&page.children, out);
            }
        }

        let mut pages = Vec::new();
        collect(&self.children, &mut pages);
        pages
    }
}
