//! Domain ontology contracts and the schema-backed implementation.
//!
//! The module keeps the query contract ([`OntologyMapping`]) apart from the
//! ways a schema is obtained: the built-in ColdStart ontology, definition
//! files, or RDF graphs.

pub mod coldstart;
pub mod constraints;
pub mod definition;
pub mod entities;
pub mod graph;
pub mod mapping;
pub mod service;
pub mod value_objects;
pub mod vocab;

pub use constraints::{ensure_value_allowed, ConstraintViolation};
pub use definition::{DefinitionError, OntologyDefinition};
pub use entities::{OntologySchema, RelationDeclaration, SchemaError, TypeDeclaration, TypeKind};
pub use graph::GraphError;
pub use mapping::{LookupError, OntologyMapping};
pub use service::{MappingHandle, OntologyService, OntologyServiceError};
pub use value_objects::{
    ArgumentTypes, Iri, IriError, Resource, ValueKind, ValuePermissions,
};
