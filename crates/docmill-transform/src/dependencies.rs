//! Source-set dependency script.
//!
//! The platform content handler script filters page content by source-set and
//! needs to know which source-sets each one depends on. The mapping is emitted
//! as `scripts/sourceset_dependencies.js`:
//!
//! ```text
//! sourceset_dependencies = '{"common": [], "jvm": ["common"]}'
//! ```

use docmill_config::Config;
use docmill_pages::{
    PageTransformer, RenderingStrategy, ResourcePage, RootPage, SourceSetId, TransformError,
};

/// Output name of the dependency script.
pub const SOURCESET_DEPENDENCIES: &str = "scripts/sourceset_dependencies.js";

/// Source-set dependency mapping in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceSetGraph {
    entries: Vec<(SourceSetId, Vec<SourceSetId>)>,
}

impl SourceSetGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source-set with its dependencies.
    ///
    /// Declaring the same source-set again replaces its dependencies in place.
    #[must_use]
    pub fn with_source_set<I, D>(mut self, id: impl Into<SourceSetId>, depends_on: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<SourceSetId>,
    {
        let id = id.into();
        let depends_on: Vec<SourceSetId> = depends_on.into_iter().map(Into::into).collect();
        if let Some(index) = self.entries.iter().position(|(existing, _)| *existing == id) {
            self.entries[index].1 = depends_on;
        } else {
            self.entries.push((id, depends_on));
        }
        self
    }

    /// Build the graph from the `[[source_sets]]` configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config
            .source_set_dependencies()
            .into_iter()
            .fold(Self::new(), |graph, (id, deps)| {
                graph.with_source_set(id, deps.iter().map(String::as_str))
            })
    }

    /// Iterate source-sets with their dependencies.
    pub fn iter(&self) -> impl Iterator<Item = (&SourceSetId, &[SourceSetId])> {
        self.entries.iter().map(|(id, deps)| (id, deps.as_slice()))
    }

    /// Render the dependency script.
    ///
    /// The payload is a quoted, comma-joined object literal; identifiers are
    /// not escaped.
    #[must_use]
    pub fn to_script(&self) -> String {
        let entries = self
            .iter()
            .map(|(id, deps)| {
                let deps = deps
                    .iter()
                    .map(|dep| format!("\"{dep}\""))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("\"{id}\": [{deps}]")
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("sourceset_dependencies = '{{{entries}}}'")
    }
}

/// Appends the source-set dependency script and declares it on every page.
#[derive(Clone, Debug, Default)]
pub struct SourceSetDependencyAppender {
    graph: SourceSetGraph,
}

impl SourceSetDependencyAppender {
    /// Create an appender for `graph`.
    #[must_use]
    pub fn new(graph: SourceSetGraph) -> Self {
        Self { graph }
    }
}

impl PageTransformer for SourceSetDependencyAppender {
    fn name(&self) -> &'static str {
        "sourceset-dependencies"
    }

    fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
        let script = ResourcePage::new(
            SOURCESET_DEPENDENCIES,
            RenderingStrategy::write(self.graph.to_script()),
        );
        Ok(input
            .with_appended([script.into()])
            .transform_content_pages_tree(|page| {
                page.with_embedded_resources([SOURCESET_DEPENDENCIES])
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{child_names, sample_root};
    use pretty_assertions::assert_eq;

    fn jvm_js_graph() -> SourceSetGraph {
        SourceSetGraph::new()
            .with_source_set("common", Vec::<&str>::new())
            .with_source_set("jvm", ["common"])
            .with_source_set("js", ["common", "web"])
    }

    fn script_of(root: &RootPage) -> String {
        let page = root
            .resources()
            .find(|r| r.name == SOURCESET_DEPENDENCIES)
            .expect("dependency script");
        match &page.strategy {
            RenderingStrategy::Write(text) => text.clone(),
            other => panic!("unexpected strategy {other:?}"),
        }
    }

    #[test]
    fn test_script_format() {
        assert_eq!(
            jvm_js_graph().to_script(),
            r#"sourceset_dependencies = '{"common": [], "jvm": ["common"], "js": ["common","web"]}'"#
        );
    }

    #[test]
    fn test_empty_graph_script() {
        assert_eq!(
            SourceSetGraph::new().to_script(),
            "sourceset_dependencies = '{}'"
        );
    }

    #[test]
    fn test_redeclaring_source_set_replaces_in_place() {
        let graph = jvm_js_graph().with_source_set("jvm", Vec::<&str>::new());

        let ids: Vec<_> = graph.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["common", "jvm", "js"]);
        assert!(graph.iter().nth(1).unwrap().1.is_empty());
    }

    #[test]
    fn test_from_config_keeps_declaration_order() {
        let config: Config = toml::from_str(
            r#"
[[source_sets]]
id = "common"

[[source_sets]]
id = "jvm"
depends_on = ["common"]
"#,
        )
        .unwrap();

        let graph = SourceSetGraph::from_config(&config);

        assert_eq!(
            graph,
            SourceSetGraph::new()
                .with_source_set("common", Vec::<&str>::new())
                .with_source_set("jvm", ["common"])
        );
    }

    #[test]
    fn test_appender_adds_script_and_marks_pages() {
        let appender = SourceSetDependencyAppender::new(jvm_js_graph());

        let result = appender.transform(&sample_root()).unwrap();

        assert_eq!(child_names(&result), vec!["sample", SOURCESET_DEPENDENCIES]);
        assert_eq!(script_of(&result), jvm_js_graph().to_script());
        for page in result.content_pages() {
            assert_eq!(page.embedded_resources, vec![SOURCESET_DEPENDENCIES]);
        }
    }

    #[test]
    fn test_appender_twice_duplicates_script() {
        let appender = SourceSetDependencyAppender::default();

        let once = appender.transform(&sample_root()).unwrap();
        let twice = appender.transform(&once).unwrap();

        assert_eq!(
            child_names(&twice),
            vec!["sample", SOURCESET_DEPENDENCIES, SOURCESET_DEPENDENCIES]
        );
    }
}
