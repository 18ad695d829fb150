//! Named nodes used when an ontology schema is written to an RDF graph.
//!
//! Only `Entity` and `Event` come from the AIDA interchange ontology. The
//! schema classes and properties belong to this crate's own namespace.

use oxrdf::NamedNodeRef;

/// Namespace of the AIDA interchange ontology.
pub const AIDA_NAMESPACE: &str = "http://www.isi.edu/aida/interchangeOntology#";

/// Namespace of the schema vocabulary written by [`super::graph::to_graph`].
pub const SCHEMA_NAMESPACE: &str = "urn:aif-ontology:schema#";

pub const OWL_ONTOLOGY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");

// interchange classes every entity and event type specializes
pub const AIDA_ENTITY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.isi.edu/aida/interchangeOntology#Entity");
pub const AIDA_EVENT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.isi.edu/aida/interchangeOntology#Event");

// schema classes
pub const ENTITY_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#EntityType");
pub const RELATION_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#RelationType");
pub const EVENT_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#EventType");
pub const EVENT_ARGUMENT_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#EventArgumentType");

// short names are kept per kind so a resource shared between kinds keeps
// each name under the kind that declared it
pub const ENTITY_SHORT_NAME: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#entityShortName");
pub const RELATION_SHORT_NAME: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#relationShortName");
pub const EVENT_SHORT_NAME: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#eventShortName");
pub const EVENT_ARGUMENT_SHORT_NAME: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#eventArgumentShortName");

// schema properties
pub const FIRST_ARGUMENT_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#firstArgumentType");
pub const SECOND_ARGUMENT_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#secondArgumentType");
pub const MAY_HAVE_NAME: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#mayHaveName");
pub const MAY_HAVE_TEXT_VALUE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#mayHaveTextValue");
pub const MAY_HAVE_NUMERIC_VALUE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("urn:aif-ontology:schema#mayHaveNumericValue");
