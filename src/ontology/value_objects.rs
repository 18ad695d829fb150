use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use oxrdf::{NamedNode, NamedNodeRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value object ensuring that supplied text represents a valid IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validates and constructs a new [`Iri`] value object.
    ///
    /// The constructor rejects malformed identifiers so every resource handed
    /// out by an ontology is a valid RDF named node.
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        NamedNode::new(value.as_str()).map_err(|_| IriError::Invalid {
            value: value.clone(),
        })?;
        Ok(Self { value })
    }

    /// Appends a local name to this IRI, treating it as a namespace.
    pub fn join(&self, local: &str) -> Result<Self, IriError> {
        Self::new(format!("{}{local}", self.value))
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NamedNode> for Iri {
    fn from(node: NamedNode) -> Self {
        Self {
            value: node.into_string(),
        }
    }
}

/// Errors produced when validating an [`Iri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The provided text could not be parsed as an IRI.
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}

/// Opaque handle to a node of the ontology graph.
///
/// Handles are owned by the ontology that minted them; callers only compare,
/// clone and hand them back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resource {
    iri: Iri,
}

impl Resource {
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self { iri }
    }

    /// Returns the IRI naming this resource.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }

    /// Borrows the resource as an RDF named node.
    #[must_use]
    pub fn as_named_node(&self) -> NamedNodeRef<'_> {
        // Iri construction already validated the text.
        NamedNodeRef::new_unchecked(self.iri.as_str())
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.iri, f)
    }
}

impl From<Iri> for Resource {
    fn from(iri: Iri) -> Self {
        Self::new(iri)
    }
}

impl From<NamedNodeRef<'_>> for Resource {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self::new(Iri::from(node.into_owned()))
    }
}

impl From<&Resource> for NamedNode {
    fn from(resource: &Resource) -> Self {
        resource.as_named_node().into_owned()
    }
}

/// The two argument types of a relation, in annotation order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentTypes {
    /// Type of the first argument.
    pub first: Resource,
    /// Type of the second argument.
    pub second: Resource,
}

impl ArgumentTypes {
    #[must_use]
    pub fn new(first: Resource, second: Resource) -> Self {
        Self { first, second }
    }
}

/// Kind of literal value an annotation may attach to an object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// A name property.
    Name,
    /// A free text value.
    Text,
    /// A numeric value.
    Numeric,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Text => "text value",
            Self::Numeric => "numeric value",
        })
    }
}

/// Which kinds of literal values objects of a type may carry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValuePermissions {
    pub name: bool,
    pub text: bool,
    pub numeric: bool,
}

impl ValuePermissions {
    /// Permissions allowing every kind listed in `kinds`.
    #[must_use]
    pub fn from_kinds(kinds: &[ValueKind]) -> Self {
        kinds
            .iter()
            .fold(Self::default(), |permissions, kind| permissions.allow(*kind))
    }

    #[must_use]
    pub fn allow(mut self, kind: ValueKind) -> Self {
        match kind {
            ValueKind::Name => self.name = true,
            ValueKind::Text => self.text = true,
            ValueKind::Numeric => self.numeric = true,
        }
        self
    }

    #[must_use]
    pub fn allows(&self, kind: ValueKind) -> bool {
        match kind {
            ValueKind::Name => self.name,
            ValueKind::Text => self.text,
            ValueKind::Numeric => self.numeric,
        }
    }

    /// Combines two permission sets, allowing whatever either allows.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            name: self.name || other.name,
            text: self.text || other.text,
            numeric: self.numeric || other.numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Iri, Resource, ValueKind, ValuePermissions};

    #[test]
    fn accepts_valid_iri() {
        let iri = Iri::new("https://example.org/resource").expect("valid IRI");
        assert_eq!(iri.as_str(), "https://example.org/resource");
    }

    #[test]
    fn rejects_invalid_iri() {
        let err = Iri::new("not an iri").expect_err("invalid IRI");
        assert!(matches!(err, super::IriError::Invalid { value } if value == "not an iri"));
    }

    #[test]
    fn joins_local_names_onto_namespaces() {
        let namespace = Iri::new("http://nist.gov/ontologies/ColdstartOntology#").expect("ns");
        let joined = namespace.join("CONFLICT.ATTACK").expect("joined");
        assert_eq!(
            joined.as_str(),
            "http://nist.gov/ontologies/ColdstartOntology#CONFLICT.ATTACK"
        );
        assert!(namespace.join("has space").is_err());
    }

    #[test]
    fn resources_expose_named_nodes() {
        let resource = Resource::new(Iri::new("https://example.org/Person").expect("iri"));
        assert_eq!(resource.as_named_node().as_str(), "https://example.org/Person");
        assert_eq!(resource.to_string(), "https://example.org/Person");
    }

    #[test]
    fn permissions_union_and_query() {
        let named = ValuePermissions::from_kinds(&[ValueKind::Name]);
        let texty = ValuePermissions::default().allow(ValueKind::Text);
        let both = named.union(texty);
        assert!(both.allows(ValueKind::Name));
        assert!(both.allows(ValueKind::Text));
        assert!(!both.allows(ValueKind::Numeric));
    }
}
