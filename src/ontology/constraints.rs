use thiserror::Error;
use tracing::debug;

use super::mapping::OntologyMapping;
use super::value_objects::{Resource, ValueKind};

/// Raised when an annotation attaches a value the ontology forbids for a type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("objects of type `{ty}` may not have a {kind}")]
pub struct ConstraintViolation {
    pub ty: Resource,
    pub kind: ValueKind,
}

/// Asks the mapping whether objects of `ty` may carry a value of `kind`.
#[must_use]
pub fn value_allowed(mapping: &dyn OntologyMapping, ty: &Resource, kind: ValueKind) -> bool {
    match kind {
        ValueKind::Name => mapping.type_allowed_to_have_a_name(ty),
        ValueKind::Text => mapping.type_allowed_to_have_text_value(ty),
        ValueKind::Numeric => mapping.type_allowed_to_have_numeric_value(ty),
    }
}

/// Fails with a [`ConstraintViolation`] unless `ty` may carry a value of `kind`.
pub fn ensure_value_allowed(
    mapping: &dyn OntologyMapping,
    ty: &Resource,
    kind: ValueKind,
) -> Result<(), ConstraintViolation> {
    if value_allowed(mapping, ty, kind) {
        return Ok(());
    }
    debug!(ty = %ty, kind = %kind, "ontology_value_rejected");
    Err(ConstraintViolation {
        ty: ty.clone(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ensure_value_allowed, ConstraintViolation};
    use crate::ontology::{coldstart, mapping::OntologyMapping, value_objects::ValueKind};

    #[rstest]
    #[case("PER", ValueKind::Name, true)]
    #[case("ORG", ValueKind::Name, true)]
    #[case("STRING", ValueKind::Text, true)]
    #[case("STRING", ValueKind::Name, false)]
    #[case("PER", ValueKind::Text, false)]
    #[case("FAC", ValueKind::Numeric, false)]
    fn coldstart_value_constraints(
        #[case] short_name: &str,
        #[case] kind: ValueKind,
        #[case] allowed: bool,
    ) {
        let schema = coldstart::ontology().expect("coldstart");
        let ty = schema.entity_type(short_name).expect("entity type");
        let outcome = ensure_value_allowed(&schema, &ty, kind);
        if allowed {
            assert_eq!(outcome, Ok(()));
        } else {
            assert_eq!(outcome, Err(ConstraintViolation { ty, kind }));
        }
    }

    #[test]
    fn violation_message_names_type_and_kind() {
        let schema = coldstart::ontology().expect("coldstart");
        let ty = schema.entity_type("PER").expect("PER");
        let err = ensure_value_allowed(&schema, &ty, ValueKind::Numeric).expect_err("numeric");
        assert_eq!(
            err.to_string(),
            "objects of type `http://nist.gov/ontologies/ColdstartOntology#Person` may not have a numeric value"
        );
    }
}
