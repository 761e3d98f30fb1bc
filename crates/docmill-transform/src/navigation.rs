//! Navigation tree builder.
//!
//! Derives a [`NavigationNode`] tree from the content pages under the root and
//! appends it to the tree twice: as a `scripts/navigation-pane.json` resource
//! for the client-side navigation script, and as a [`NavigationPage`] for
//! templates.
//!
//! Which pages appear in navigation depends on the page kind:
//! - grouping and member pages list all their content children
//! - enum pages list only their entries
//! - all other classlike pages list nothing
//!
//! Children are sorted by name, case-insensitive.

use std::sync::Arc;

use docmill_pages::{
    ClasslikeKind, ContentPage, LocationError, NavigationNode, NavigationPage, PageTransformer,
    RenderingStrategy, ResourcePage, RootPage, TransformError,
};
use serde::Serialize;

/// Output name of the serialized navigation tree.
pub const NAVIGATION_PANE: &str = "scripts/navigation-pane.json";

/// Entry of the serialized navigation tree.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NavigationNodeView<'a> {
    name: &'a str,
    label: &'a str,
    search_key: &'a str,
    dri: String,
    location: String,
}

/// Build the navigation tree from the single top-level content page.
///
/// # Errors
///
/// Returns [`TransformError::RootContentCount`] if the root does not hold
/// exactly one top-level content page.
pub fn build_navigation(root: &RootPage) -> Result<NavigationNode, TransformError> {
    let mut pages = root.top_level_content();
    let (Some(module), None) = (pages.next(), pages.next()) else {
        return Err(TransformError::RootContentCount {
            found: root.top_level_content().count(),
        });
    };
    Ok(visit(module))
}

fn visit(page: &ContentPage) -> NavigationNode {
    NavigationNode::new(
        page.name.clone(),
        page.primary_dri().clone(),
        page.source_sets.clone(),
        navigable_children(page),
    )
}

fn navigable_children(page: &ContentPage) -> Vec<NavigationNode> {
    let mut children: Vec<NavigationNode> = match page.kind {
        None => page.content_children().map(visit).collect(),
        Some(ClasslikeKind::Enum) => page
            .content_children()
            .filter(|child| child.kind == Some(ClasslikeKind::EnumEntry))
            .map(visit)
            .collect(),
        Some(_) => Vec::new(),
    };
    children.sort_by_cached_key(|node| node.name.to_lowercase());
    children
}

/// Strategy serializing `root` and its descendants with resolved locations.
///
/// The resolver runs once per node, in pre-order, and every location is
/// resolved before anything is serialized.
fn navigation_pane(root: Arc<NavigationNode>) -> RenderingStrategy {
    RenderingStrategy::location_resolvable_write(move |resolve| {
        let locations = root
            .with_descendants()
            .map(|node| resolve(&node.dri, &node.source_sets))
            .collect::<Result<Vec<_>, LocationError>>()?;
        let views: Vec<_> = root
            .with_descendants()
            .zip(locations)
            .map(|(node, location)| NavigationNodeView {
                name: &node.name,
                label: &node.label,
                search_key: &node.search_key,
                dri: node.dri.to_string(),
                location,
            })
            .collect();
        Ok(serde_json::to_string(&views)?)
    })
}

/// Appends the navigation pane resource and the navigation page.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigationInstaller;

impl PageTransformer for NavigationInstaller {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
        let root = build_navigation(input)?;
        tracing::debug!(
            nodes = root.with_descendants().count(),
            "Built navigation tree"
        );

        let pane = ResourcePage::new(NAVIGATION_PANE, navigation_pane(Arc::new(root.clone())));
        Ok(input.with_appended([pane.into(), NavigationPage::new(root).into()]))
    }
}
