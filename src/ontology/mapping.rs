//! The query surface a domain ontology offers to annotation code.

use std::collections::BTreeSet;

use thiserror::Error;

use super::value_objects::{ArgumentTypes, Resource};

/// A domain ontology.
///
/// Translates annotation-schema labels into ontology resources and answers
/// which literal values objects of a given type may carry. Every operation is a
/// read-only query, so implementations are shared freely between threads.
pub trait OntologyMapping: Send + Sync {
    /// Short names of every entity type the ontology declares.
    fn entity_short_names(&self) -> BTreeSet<String>;

    /// Resolves an entity type short name such as `PER`.
    fn entity_type(&self, short_name: &str) -> Result<Resource, LookupError>;

    /// Resolves a relation type by name.
    fn relation_type(&self, name: &str) -> Result<Resource, LookupError>;

    /// Resolves an event type by name.
    fn event_type(&self, name: &str) -> Result<Resource, LookupError>;

    /// Resolves an event argument role by name.
    fn event_argument_type(&self, name: &str) -> Result<Resource, LookupError>;

    /// Given a relation, get its two argument types in the same order as in
    /// the source annotation.
    fn relation_argument_types(&self, relation: &Resource) -> Result<ArgumentTypes, LookupError>;

    /// Is an object of this type allowed to have a name property?
    fn type_allowed_to_have_a_name(&self, ty: &Resource) -> bool;

    fn type_allowed_to_have_text_value(&self, ty: &Resource) -> bool;

    fn type_allowed_to_have_numeric_value(&self, ty: &Resource) -> bool;
}

/// Raised when a queried identifier or resource is unknown to the ontology.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown entity type `{name}`")]
    UnknownEntityType { name: String },
    #[error("unknown relation type `{name}`")]
    UnknownRelationType { name: String },
    #[error("unknown event type `{name}`")]
    UnknownEventType { name: String },
    #[error("unknown event argument type `{name}`")]
    UnknownEventArgumentType { name: String },
    /// The relation has no two-argument schema entry.
    #[error("relation `{relation}` declares no argument types")]
    MissingArgumentTypes { relation: Resource },
}

impl LookupError {
    pub(crate) fn entity(name: &str) -> Self {
        Self::UnknownEntityType {
            name: name.to_owned(),
        }
    }

    pub(crate) fn relation(name: &str) -> Self {
        Self::UnknownRelationType {
            name: name.to_owned(),
        }
    }

    pub(crate) fn event(name: &str) -> Self {
        Self::UnknownEventType {
            name: name.to_owned(),
        }
    }

    pub(crate) fn event_argument(name: &str) -> Self {
        Self::UnknownEventArgumentType {
            name: name.to_owned(),
        }
    }
}
