//! The ColdStart program ontology.
//!
//! Annotation tooling historically hard-coded this ontology; it remains the
//! default when no definition file is configured.

use super::entities::{OntologySchema, RelationDeclaration, SchemaError, TypeDeclaration};
use super::value_objects::{Iri, IriError, Resource, ValueKind, ValuePermissions};

/// Namespace of the ColdStart ontology.
pub const NAMESPACE: &str = "http://nist.gov/ontologies/ColdstartOntology#";

/// Entity short names with their local names and the values they may carry.
const ENTITY_TYPES: &[(&str, &str, &[ValueKind])] = &[
    ("PER", "Person", &[ValueKind::Name]),
    ("ORG", "Organization", &[ValueKind::Name]),
    ("GPE", "GeopoliticalEntity", &[ValueKind::Name]),
    ("LOC", "Location", &[ValueKind::Name]),
    ("FAC", "Facility", &[ValueKind::Name]),
    ("STRING", "String", &[ValueKind::Text]),
];

const ENTITY_ALIASES: &[(&str, &str)] = &[("String", "STRING")];

/// Local names of the realis terms an event or relation mention may be marked with.
pub const REALIS: &[&str] = &["Actual", "Generic", "Other"];

const EVENT_TYPES: &[&str] = &[
    "CONFLICT.ATTACK",
    "CONFLICT.DEMONSTRATE",
    "CONTACT.BROADCAST",
    "CONTACT.CONTACT",
    "CONTACT.CORRESPONDENCE",
    "CONTACT.MEET",
    "JUSTICE.ARREST-JAIL",
    "LIFE.DIE",
    "LIFE.INJURE",
    "MANUFACTURE.ARTIFACT",
    "MOVEMENT.TRANSPORT-ARTIFACT",
    "MOVEMENT.TRANSPORT-PERSON",
    "PERSONNEL.ELECT",
    "PERSONNEL.END-POSITION",
    "PERSONNEL.START-POSITION",
    "TRANSACTION.TRANSACTION",
    "TRANSACTION.TRANSFER-MONEY",
    "TRANSACTION.TRANSFER-OWNERSHIP",
];

/// Slot-filling relations.
const RELATION_TYPES: &[&str] = &[
    "age",
    "alternate_names",
    "births_in_city",
    "births_in_country",
    "births_in_stateorprovince",
    "cause_of_death",
    "charges",
    "children",
    "cities_of_residence",
    "city_of_birth",
    "city_of_death",
    "city_of_headquarters",
    "countries_of_residence",
    "country_of_birth",
    "country_of_death",
    "country_of_headquarters",
    "date_dissolved",
    "date_founded",
    "date_of_birth",
    "date_of_death",
    "deaths_in_city",
    "deaths_in_country",
    "deaths_in_stateorprovince",
    "employee_or_member_of",
    "employees_or_members",
    "founded_by",
    "headquarters_in_city",
    "headquarters_in_country",
    "headquarters_in_stateorprovince",
    "holds_shares_in",
    "member_of",
    "members",
    "number_of_employees_members",
    "organizations_founded",
    "origin",
    "other_family",
    "parents",
    "political_religious_affiliation",
    "religion",
    "residents_of_city",
    "residents_of_country",
    "residents_of_stateorprovince",
    "schools_attended",
    "shareholders",
    "siblings",
    "spouse",
    "stateorprovince_of_birth",
    "stateorprovince_of_death",
    "stateorprovince_of_headquarters",
    "statesorprovinces_of_residence",
    "students",
    "subsidiaries",
    "title",
    "top_member_employee_of",
    "top_members_employees",
    "website",
];

/// Builds the ColdStart ontology schema.
pub fn ontology() -> Result<OntologySchema, SchemaError> {
    let namespace = Iri::new(NAMESPACE)?;
    let mut schema = OntologySchema::new(namespace).with_label("ColdStart");

    for (short_name, local, values) in ENTITY_TYPES {
        let declaration = TypeDeclaration::new(*short_name, schema.resource_for(local)?)
            .with_permissions(ValuePermissions::from_kinds(values));
        schema.add_entity_type(declaration)?;
    }
    for (alias, target) in ENTITY_ALIASES {
        schema.add_entity_alias(*alias, target)?;
    }
    for name in RELATION_TYPES {
        let resource = schema.resource_for(name)?;
        schema.add_relation_type(RelationDeclaration::new(*name, resource))?;
    }
    for name in EVENT_TYPES {
        let resource = schema.resource_for(name)?;
        schema.add_event_type(TypeDeclaration::new(*name, resource))?;
    }

    Ok(schema)
}

/// Resources for the realis terms, in [`REALIS`] order.
pub fn realis() -> Result<Vec<Resource>, IriError> {
    let namespace = Iri::new(NAMESPACE)?;
    REALIS
        .iter()
        .map(|local| namespace.join(local).map(Resource::new))
        .collect()
}
