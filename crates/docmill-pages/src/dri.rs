//! Documentable reference identifiers and source-set identifiers.
//!
//! A [`Dri`] names a documented symbol and is used as the cross-reference key
//! between pages, navigation entries and the location resolver. Its canonical
//! string form is `package/classNames/callable/extra`, with absent components
//! rendered as empty strings. A `/` or `%` inside a component is written as
//! `%2F` or `%25` so the string parses back to the same identifier:
//!
//! ```
//! use docmill_pages::Dri;
//!
//! let dri = Dri::new("com.example").with_class_names("Color.RED");
//! assert_eq!(dri.to_string(), "com.example/Color.RED//");
//! assert_eq!(dri.to_string().parse::<Dri>().unwrap(), dri);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Documentable reference identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dri {
    /// Package (or module path) the symbol lives in.
    pub package_name: Option<String>,
    /// Dot-separated chain of enclosing classlike names.
    pub class_names: Option<String>,
    /// Callable signature for functions and properties.
    pub callable: Option<String>,
    /// Free-form discriminator (e.g. enum entry marker).
    pub extra: Option<String>,
}

impl Dri {
    /// Create a DRI pointing at a package.
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: Some(package_name.into()),
            ..Self::default()
        }
    }

    /// Set the enclosing classlike names.
    #[must_use]
    pub fn with_class_names(mut self, class_names: impl Into<String>) -> Self {
        self.class_names = Some(class_names.into());
        self
    }

    /// Set the callable signature.
    #[must_use]
    pub fn with_callable(mut self, callable: impl Into<String>) -> Self {
        self.callable = Some(callable.into());
        self
    }

    /// Set the extra discriminator.
    #[must_use]
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}

impl fmt::Display for Dri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |p: &Option<String>| escape(p.as_deref().unwrap_or(""));
        write!(
            f,
            "{}/{}/{}/{}",
            part(&self.package_name),
            part(&self.class_names),
            part(&self.callable),
            part(&self.extra)
        )
    }
}

fn escape(part: &str) -> String {
    part.replace('%', "%25").replace('/', "%2F")
}

fn unescape(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut rest = part;
    while let Some(index) = rest.find('%') {
        out.push_str(&rest[..index]);
        let tail = &rest[index..];
        if let Some(after) = tail.strip_prefix("%2F") {
            out.push('/');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%25") {
            out.push('%');
            rest = after;
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Error returned when parsing a DRI from its canonical string form.
#[derive(Debug, thiserror::Error)]
#[error("invalid DRI '{0}': expected 'package/classNames/callable/extra'")]
pub struct ParseDriError(String);

impl FromStr for Dri {
    type Err = ParseDriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(4, '/').collect();
        if parts.len() != 4 {
            return Err(ParseDriError(s.to_owned()));
        }
        let part = |p: &str| (!p.is_empty()).then(|| unescape(p));
        Ok(Self {
            package_name: part(parts[0]),
            class_names: part(parts[1]),
            callable: part(parts[2]),
            extra: part(parts[3]),
        })
    }
}

impl Serialize for Dri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifier of a source-set (build/target variant).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSetId(String);

impl SourceSetId {
    /// Create a source-set identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceSetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_absent_parts_empty() {
        let dri = Dri::new("pkg");

        assert_eq!(dri.to_string(), "pkg///");
    }

    #[test]
    fn test_display_renders_all_parts() {
        let dri = Dri::new("pkg")
            .with_class_names("Outer.Inner")
            .with_callable("run()")
            .with_extra("entry");

        assert_eq!(dri.to_string(), "pkg/Outer.Inner/run()/entry");
    }

    #[test]
    fn test_parse_canonical_form() {
        let dri: Dri = "pkg/Color//".parse().unwrap();

        assert_eq!(dri, Dri::new("pkg").with_class_names("Color"));
    }

    #[test]
    fn test_parse_rejects_missing_separators() {
        let result = "pkg/Color".parse::<Dri>();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("pkg/Color"));
    }

    #[test]
    fn test_separator_inside_component_round_trips() {
        let dri = Dri::new("a/b")
            .with_callable("div(a/b)")
            .with_extra("100%");

        let text = dri.to_string();

        assert_eq!(text, "a%2Fb//div(a%2Fb)/100%25");
        assert_eq!(text.parse::<Dri>().unwrap(), dri);
    }

    #[test]
    fn test_parse_keeps_stray_percent() {
        let dri: Dri = "pkg%/%2/%2F%25/".parse().unwrap();

        assert_eq!(dri.package_name.as_deref(), Some("pkg%"));
        assert_eq!(dri.class_names.as_deref(), Some("%2"));
        assert_eq!(dri.callable.as_deref(), Some("/%"));
        assert!(dri.extra.is_none());
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let dri = Dri::new("pkg").with_class_names("Color");

        let json = serde_json::to_string(&dri).unwrap();
        let back: Dri = serde_json::from_str(&json).unwrap();

        assert_eq!(json, r#""pkg/Color//""#);
        assert_eq!(back, dri);
    }

    #[test]
    fn test_source_set_id_is_transparent_string() {
        let id = SourceSetId::from("jvm");

        assert_eq!(serde_json::to_string(&id).unwrap(), r#""jvm""#);
        assert_eq!(id.as_str(), "jvm");
    }
}
