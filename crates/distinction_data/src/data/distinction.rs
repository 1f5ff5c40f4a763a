use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a distinction.
///
/// The two primordial identifiers are the fixed strings `"0"` and `"1"`;
/// every derived identifier is lowercase SHA-256 hex. Equality, ordering and
/// hashing all follow the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistinctionId(String);

impl DistinctionId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading fragment used in log lines and tables.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(8)]
    }
}

impl fmt::Display for DistinctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DistinctionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DistinctionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An atomic node of the universe graph.
///
/// A distinction is defined solely by its identifier. It carries no other
/// intrinsic state: any derived property (age, coherence, position) is
/// computed by external consumers from graph structure, never stored here.
/// Distinctions are created once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Distinction {
    pub id: DistinctionId,
}

impl Distinction {
    pub fn new(id: DistinctionId) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality_follows_string() {
        assert_eq!(DistinctionId::new("0"), DistinctionId::from("0"));
        assert_ne!(DistinctionId::new("0"), DistinctionId::new("1"));
    }

    #[test]
    fn test_short_clamps_to_id_length() {
        assert_eq!(DistinctionId::new("0").short(), "0");
        assert_eq!(
            DistinctionId::new("ef134f2a180ba05d").short(),
            "ef134f2a"
        );
    }

    #[test]
    fn test_distinction_equality_follows_id() {
        let a = Distinction::new(DistinctionId::new("abc"));
        let b = Distinction::new(DistinctionId::new("abc"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = DistinctionId::new("0");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0\"");
    }
}
