//! NodePath parsing and formatting.
//!
//! Grammar (host-agnostic, modeled on DCC scene hierarchies):
//!   [|]segment|...|leaf[.field[.subfield]]
//! - '|' separates hierarchy segments; a leading '|' marks a rooted (full) path
//! - Each segment may carry namespace prefixes: "rig:arm" or "shot:rig:arm"
//! - The last segment may carry '.'-separated attribute fields
//!   Examples:
//!   "|root|geo|body.translateX" -> rooted, segments=["root","geo","body"], fields=["translateX"]
//!   "rig:spine|rig:chest"       -> relative, namespaced segments, no fields
//!   "body.visibility"           -> relative single segment with one field
//!
//! NodePath is intentionally string-based; host backends resolve it into
//! whatever handle their scene graph uses.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a node path string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("empty hierarchy segment")]
    EmptySegment,
    #[error("empty attribute field")]
    EmptyField,
    #[error("empty namespace component in `{0}`")]
    EmptyNamespace(String),
    #[error("whitespace in path component `{0}`")]
    Whitespace(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    /// Whether the path is anchored at the scene root (leading '|').
    rooted: bool,
    /// Hierarchy segments, root first; each may keep its namespace prefix.
    segments: Vec<String>,
    /// Ordered attribute field selectors on the leaf (may be empty).
    fields: Vec<String>,
}

fn check_component(raw: &str) -> Result<(), PathError> {
    if raw.chars().any(char::is_whitespace) {
        return Err(PathError::Whitespace(raw.to_string()));
    }
    Ok(())
}

impl NodePath {
    /// Construct a NodePath from components.
    pub fn new(rooted: bool, segments: Vec<String>, fields: Vec<String>) -> Self {
        Self {
            rooted,
            segments,
            fields,
        }
    }

    /// Parse a path string according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let (rooted, rest) = match s.strip_prefix('|') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if rest.is_empty() {
            return Err(PathError::EmptySegment);
        }

        let mut segments: Vec<&str> = rest.split('|').collect();

        // The last segment may carry '.'-separated attribute fields.
        let last = segments.pop().unwrap_or_default();
        let mut last_parts = last.split('.');
        let leaf = last_parts.next().unwrap_or_default();
        let fields: Vec<String> = last_parts.map(str::to_string).collect();
        segments.push(leaf);

        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(PathError::EmptySegment);
        }
        if fields.iter().any(|f| f.is_empty()) {
            return Err(PathError::EmptyField);
        }
        for seg in &segments {
            check_component(seg)?;
            if seg.split(':').any(|part| part.is_empty()) {
                return Err(PathError::EmptyNamespace(seg.to_string()));
            }
        }
        for field in &fields {
            check_component(field)?;
        }

        Ok(NodePath {
            rooted,
            segments: segments.into_iter().map(str::to_string).collect(),
            fields,
        })
    }

    /// Whether the path is anchored at the scene root.
    pub fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Number of hierarchy segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over hierarchy segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_str())
    }

    /// Leaf node name, namespace prefix included.
    pub fn name(&self) -> &str {
        self.segments.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Leaf node name with any namespace prefix stripped.
    pub fn short_name(&self) -> &str {
        let name = self.name();
        name.rsplit(':').next().unwrap_or(name)
    }

    /// Namespace of the leaf node ("rig" or nested "shot:rig"), if any.
    pub fn namespace(&self) -> Option<&str> {
        let name = self.name();
        name.rfind(':').map(|idx| &name[..idx])
    }

    /// Ordered attribute field selectors on the leaf.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|s| s.as_str())
    }

    /// First attribute field, if the path addresses an attribute.
    pub fn attribute(&self) -> Option<&str> {
        self.fields.first().map(|s| s.as_str())
    }

    pub fn has_attribute(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Path to the parent node, dropping the leaf and any attribute fields.
    /// `None` when the path has a single segment.
    pub fn parent(&self) -> Option<NodePath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(NodePath {
            rooted: self.rooted,
            segments: self.segments[..self.segments.len() - 1].to_vec(),
            fields: Vec::new(),
        })
    }

    /// Same node path without attribute fields.
    pub fn node(&self) -> NodePath {
        NodePath {
            rooted: self.rooted,
            segments: self.segments.clone(),
            fields: Vec::new(),
        }
    }

    /// Same path addressing `field` on the leaf node.
    pub fn with_attribute(&self, field: impl Into<String>) -> NodePath {
        NodePath {
            rooted: self.rooted,
            segments: self.segments.clone(),
            fields: vec![field.into()],
        }
    }

    /// Same path with namespace prefixes removed from every segment.
    pub fn strip_namespaces(&self) -> NodePath {
        NodePath {
            rooted: self.rooted,
            segments: self
                .segments
                .iter()
                .map(|seg| seg.rsplit(':').next().unwrap_or(seg.as_str()).to_string())
                .collect(),
            fields: self.fields.clone(),
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rooted {
            f.write_str("|")?;
        }
        f.write_str(&self.segments.join("|"))?;
        for field in &self.fields {
            write!(f, ".{field}")?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = PathError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodePath::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for NodePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NodePath {
    fn deserialize<D>(deserializer: D) -> Result<NodePath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NodePath::parse(&s).map_err(de::Error::custom)
    }
}
