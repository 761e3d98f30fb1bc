//! Rendering strategies for resource pages.
//!
//! A [`RenderingStrategy`] is a deferred instruction describing how the bytes
//! of a resource page are produced. The pipeline only constructs strategies;
//! the renderer evaluates them once the final tree is known, supplying a
//! [`LocationResolver`] for strategies that need to link to other pages.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::dri::{Dri, SourceSetId};

/// Callback resolving the output location of a documented symbol.
///
/// Supplied by the renderer. Failures propagate to whoever evaluates the
/// strategy; no default location is substituted.
pub type LocationResolver<'a> =
    dyn Fn(&Dri, &BTreeSet<SourceSetId>) -> Result<String, LocationError> + 'a;

/// Stored computation behind [`RenderingStrategy::LocationResolvableWrite`].
pub type ResolvableWriteFn =
    dyn Fn(&LocationResolver<'_>) -> Result<String, WriteError> + Send + Sync;

/// Error raised by a [`LocationResolver`].
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// The resolver has no location for this DRI.
    #[error("no location for {dri}")]
    Unresolved {
        /// Canonical form of the DRI.
        dri: String,
    },
    /// The resolver failed for another reason.
    #[error("failed to resolve location for {dri}: {message}")]
    Other {
        /// Canonical form of the DRI.
        dri: String,
        /// Resolver-specific description.
        message: String,
    },
}

impl LocationError {
    /// Create an unresolved-DRI error.
    #[must_use]
    pub fn unresolved(dri: &Dri) -> Self {
        Self::Unresolved {
            dri: dri.to_string(),
        }
    }
}

/// Error evaluating a [`RenderingStrategy::LocationResolvableWrite`].
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The location resolver failed.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// The computed payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// How a resource page's output is produced.
#[derive(Clone)]
pub enum RenderingStrategy {
    /// Copy a file from a source path.
    Copy(PathBuf),
    /// Write a literal string.
    Write(String),
    /// Write a string computed from a location resolver at render time.
    LocationResolvableWrite(Arc<ResolvableWriteFn>),
}

/// Evaluated output of a [`RenderingStrategy`].
#[derive(Debug, PartialEq, Eq)]
pub enum RenderedResource {
    /// Copy the file at this path.
    Copy(PathBuf),
    /// Write this text.
    Text(String),
}

impl RenderingStrategy {
    /// Create a copy strategy.
    #[must_use]
    pub fn copy(path: impl Into<PathBuf>) -> Self {
        Self::Copy(path.into())
    }

    /// Create a literal write strategy.
    #[must_use]
    pub fn write(text: impl Into<String>) -> Self {
        Self::Write(text.into())
    }

    /// Create a resolver-driven write strategy.
    #[must_use]
    pub fn location_resolvable_write<F>(compute: F) -> Self
    where
        F: Fn(&LocationResolver<'_>) -> Result<String, WriteError> + Send + Sync + 'static,
    {
        Self::LocationResolvableWrite(Arc::new(compute))
    }

    /// Source path of a copy strategy.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        match self {
            Self::Copy(path) => Some(path),
            _ => None,
        }
    }

    /// Evaluate the strategy.
    ///
    /// The resolver is only consulted by [`Self::LocationResolvableWrite`].
    pub fn render(&self, resolver: &LocationResolver<'_>) -> Result<RenderedResource, WriteError> {
        match self {
            Self::Copy(path) => Ok(RenderedResource::Copy(path.clone())),
            Self::Write(text) => Ok(RenderedResource::Text(text.clone())),
            Self::LocationResolvableWrite(compute) => compute(resolver).map(RenderedResource::Text),
        }
    }
}

impl fmt::Debug for RenderingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy(path) => f.debug_tuple("Copy").field(path).finish(),
            Self::Write(text) => f.debug_tuple("Write").field(text).finish(),
            Self::LocationResolvableWrite(_) => f.write_str("LocationResolvableWrite(..)"),
        }
    }
}
