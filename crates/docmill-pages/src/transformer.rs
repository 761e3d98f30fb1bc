//! Page transformers and the pipeline that applies them.

use crate::page::RootPage;

/// Error raised while transforming the page tree.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The root does not hold exactly one top-level content page.
    ///
    /// This is a contract violation by the stage that assembled the tree.
    #[error("expected exactly one top-level content page under the root, found {found}")]
    RootContentCount {
        /// Number of top-level content pages found.
        found: usize,
    },
    /// A transformer in a pipeline failed.
    #[error("page transformer '{name}' failed: {source}")]
    Transformer {
        /// Name of the failing transformer.
        name: String,
        /// Underlying error.
        #[source]
        source: Box<TransformError>,
    },
}

/// Tree-to-tree transformation step.
///
/// Implementations are deterministic and free of side effects: they hold only
/// read-only configuration fixed at construction and derive a new tree from
/// the input without mutating it. They are `Send + Sync`, so one instance may
/// transform different trees from several threads.
///
/// # Example
///
/// ```
/// use docmill_pages::{PageTransformer, RootPage, TransformError};
///
/// struct Reverse;
///
/// impl PageTransformer for Reverse {
///     fn name(&self) -> &str { "reverse" }
///
///     fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
///         Ok(RootPage::new(input.children.iter().rev().cloned().collect()))
///     }
/// }
/// ```
pub trait PageTransformer: Send + Sync {
    /// Transformer name, used in logs and errors.
    fn name(&self) -> &str;

    /// Derive a new tree from `input`.
    fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError>;
}

/// Ordered sequence of page transformers.
///
/// Each transformer receives the output of the previous one; no transformer
/// observes a partially built tree.
#[derive(Default)]
pub struct PagePipeline {
    transformers: Vec<Box<dyn PageTransformer>>,
}

impl PagePipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformer.
    #[must_use]
    pub fn with_transformer(mut self, transformer: impl PageTransformer + 'static) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    /// Names of the transformers in application order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }

    /// Apply every transformer in order.
    ///
    /// The first failure stops the pipeline and is returned wrapped with the
    /// failing transformer's name.
    pub fn run(&self, root: RootPage) -> Result<RootPage, TransformError> {
        let mut current = root;
        for transformer in &self.transformers {
            current = transformer
                .transform(&current)
                .map_err(|e| TransformError::Transformer {
                    name: transformer.name().to_owned(),
                    source: Box::new(e),
                })?;
            tracing::debug!(
                transformer = transformer.name(),
                children = current.children.len(),
                "Applied page transformer"
            );
        }
        tracing::info!(
            transformers = self.transformers.len(),
            children = current.children.len(),
            "Page pipeline completed"
        );
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::PagePipeline: Send, Sync);

    use super::*;
    use crate::{ContentPage, Dri, PageNode, RenderingStrategy, ResourcePage};

    struct Append(&'static str);

    impl PageTransformer for Append {
        fn name(&self) -> &str {
            self.0
        }

        fn transform(&self, input: &RootPage) -> Result<RootPage, TransformError> {
            Ok(input.with_appended([
                ResourcePage::new(self.0, RenderingStrategy::write("")).into()
            ]))
        }
    }

    struct Fail;

    impl PageTransformer for Fail {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn transform(&self, _input: &RootPage) -> Result<RootPage, TransformError> {
            Err(TransformError::RootContentCount { found: 0 })
        }
    }

    fn root() -> RootPage {
        RootPage::new(vec![ContentPage::new("module", Dri::new("m")).into()])
    }

    #[test]
    fn test_run_applies_transformers_in_order() {
        let pipeline = PagePipeline::new()
            .with_transformer(Append("first"))
            .with_transformer(Append("second"));

        let result = pipeline.run(root()).unwrap();

        let names: Vec<_> = result.children.iter().map(PageNode::name).collect();
        assert_eq!(names, vec!["module", "first", "second"]);
    }

    #[test]
    fn test_empty_pipeline_returns_input() {
        let result = PagePipeline::new().run(root()).unwrap();

        assert_eq!(result.children.len(), 1);
    }

    #[test]
    fn test_run_wraps_failure_with_transformer_name() {
        let pipeline = PagePipeline::new()
            .with_transformer(Append("first"))
            .with_transformer(Fail)
            .with_transformer(Append("never"));

        let err = pipeline.run(root()).unwrap_err();

        match err {
            TransformError::Transformer { name, source } => {
                assert_eq!(name, "fail");
                assert!(matches!(*source, TransformError::RootContentCount { found: 0 }));
            }
            TransformError::RootContentCount { .. } => panic!("expected wrapped error"),
        }
    }

    #[test]
    fn test_names_lists_transformers() {
        let pipeline = PagePipeline::new()
            .with_transformer(Append("a"))
            .with_transformer(Fail);

        assert_eq!(pipeline.names(), vec!["a", "fail"]);
    }
}
