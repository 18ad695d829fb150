//! Ontology schemas described in YAML or JSON files.
//!
//! ```yaml
//! namespace: "https://example.org/onto#"
//! label: Example
//! entities:
//!   - name: PER
//!     local: Person
//!     aliases: [Person]
//!     values: [name]
//! relations:
//!   - name: EmployedBy
//!     arguments: [PER, ORG]
//! events:
//!   - name: CONFLICT.ATTACK
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{OntologySchema, RelationDeclaration, SchemaError, TypeDeclaration};
use super::mapping::{LookupError, OntologyMapping};
use super::value_objects::{ArgumentTypes, Iri, IriError, Resource, ValueKind, ValuePermissions};

/// Serializable description of an ontology schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyDefinition {
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub entities: Vec<EntityDefinition>,
    #[serde(default)]
    pub relations: Vec<RelationDefinition>,
    #[serde(default)]
    pub events: Vec<TypeDefinition>,
    #[serde(default)]
    pub event_arguments: Vec<TypeDefinition>,
}

/// A named type minted under the namespace unless `iri` is given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    /// Local name under the namespace, defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    /// Absolute IRI overriding the namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ValueKind>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDefinition {
    #[serde(flatten)]
    pub definition: TypeDefinition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    /// Entity short names of the first and second argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<[String; 2]>,
}

/// Errors raised while reading or validating an [`OntologyDefinition`].
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read ontology definition `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported ontology definition format `{path}`")]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid YAML ontology definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON ontology definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Iri(#[from] IriError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("relation `{relation}` argument: {source}")]
    Argument {
        relation: String,
        source: LookupError,
    },
}

impl OntologyDefinition {
    /// Reads a definition, choosing the parser from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, DefinitionError> {
        let content = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(DefinitionError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validates the definition and builds the schema aggregate.
    ///
    /// Entities are registered first so relations can reference them by short
    /// name.
    pub fn into_schema(self) -> Result<OntologySchema, DefinitionError> {
        let namespace = Iri::new(self.namespace)?;
        let mut schema = OntologySchema::new(namespace);
        if let Some(label) = self.label {
            schema = schema.with_label(label);
        }

        for entity in self.entities {
            let canonical = entity.definition.name.clone();
            schema.add_entity_type(type_declaration(&schema, entity.definition)?)?;
            for alias in entity.aliases {
                schema.add_entity_alias(alias, &canonical)?;
            }
        }

        for relation in self.relations {
            let resource = mint(&schema, &relation.name, relation.local, relation.iri)?;
            let mut declaration = RelationDeclaration::new(relation.name.clone(), resource);
            if let Some([first, second]) = relation.arguments {
                let resolve = |name: &str| {
                    schema
                        .entity_type(name)
                        .map_err(|source| DefinitionError::Argument {
                            relation: relation.name.clone(),
                            source,
                        })
                };
                let arguments = ArgumentTypes::new(resolve(&first)?, resolve(&second)?);
                declaration = declaration.with_arguments(arguments);
            }
            schema.add_relation_type(declaration)?;
        }

        for event in self.events {
            schema.add_event_type(type_declaration(&schema, event)?)?;
        }
        for argument in self.event_arguments {
            schema.add_event_argument_type(type_declaration(&schema, argument)?)?;
        }

        Ok(schema)
    }
}

fn mint(
    schema: &OntologySchema,
    name: &str,
    local: Option<String>,
    iri: Option<String>,
) -> Result<Resource, IriError> {
    match (iri, local) {
        (Some(iri), _) => Iri::new(iri).map(Resource::new),
        (None, Some(local)) => schema.resource_for(&local),
        (None, None) => schema.resource_for(name),
    }
}

fn type_declaration(
    schema: &OntologySchema,
    definition: TypeDefinition,
) -> Result<TypeDeclaration, IriError> {
    let resource = mint(schema, &definition.name, definition.local, definition.iri)?;
    Ok(TypeDeclaration::new(definition.name, resource)
        .with_permissions(ValuePermissions::from_kinds(&definition.values)))
}

#[cfg(test)]
mod tests {
    use super::{DefinitionError, OntologyDefinition};
    use crate::ontology::entities::SchemaError;
    use crate::ontology::mapping::{LookupError, OntologyMapping};

    const DEFINITION: &str = r#"
namespace: "https://example.org/onto#"
label: Example
entities:
  - name: PER
    local: Person
    aliases: [Person]
    values: [name]
  - name: ORG
    local: Organization
    values: [name]
  - name: AGE
    iri: "https://example.org/other#Age"
    values: [numeric, text]
relations:
  - name: EmployedBy
    arguments: [PER, ORG]
  - name: spouse
events:
  - name: CONFLICT.ATTACK
event_arguments:
  - name: CONFLICT.ATTACK_Attacker
"#;

    #[test]
    fn yaml_definition_builds_schema() {
        let schema = OntologyDefinition::from_yaml(DEFINITION)
            .expect("parse")
            .into_schema()
            .expect("schema");

        assert_eq!(schema.label(), Some("Example"));
        let person = schema.entity_type("PER").expect("PER");
        assert_eq!(person.iri().as_str(), "https://example.org/onto#Person");
        assert_eq!(schema.entity_type("Person"), Ok(person.clone()));

        let age = schema.entity_type("AGE").expect("AGE");
        assert_eq!(age.iri().as_str(), "https://example.org/other#Age");
        assert!(schema.type_allowed_to_have_numeric_value(&age));
        assert!(schema.type_allowed_to_have_text_value(&age));
        assert!(!schema.type_allowed_to_have_a_name(&age));

        let employed_by = schema.relation_type("EmployedBy").expect("relation");
        let arguments = schema
            .relation_argument_types(&employed_by)
            .expect("arguments");
        assert_eq!(arguments.first, person);
        assert_eq!(arguments.second, schema.entity_type("ORG").expect("ORG"));

        assert!(schema.event_type("CONFLICT.ATTACK").is_ok());
        assert!(schema.event_argument_type("CONFLICT.ATTACK_Attacker").is_ok());
    }

    #[test]
    fn json_definition_is_accepted() {
        let json = r#"{
            "namespace": "https://example.org/onto#",
            "entities": [{ "name": "PER", "values": ["name"] }]
        }"#;
        let schema = OntologyDefinition::from_json(json)
            .expect("parse")
            .into_schema()
            .expect("schema");
        assert_eq!(
            schema.entity_type("PER").expect("PER").iri().as_str(),
            "https://example.org/onto#PER"
        );
    }

    #[test]
    fn unknown_relation_argument_is_reported() {
        let yaml = r#"
namespace: "https://example.org/onto#"
entities:
  - name: PER
relations:
  - name: EmployedBy
    arguments: [PER, ORG]
"#;
        let err = OntologyDefinition::from_yaml(yaml)
            .expect("parse")
            .into_schema()
            .expect_err("ORG is undeclared");
        assert!(matches!(
            err,
            DefinitionError::Argument { relation, source: LookupError::UnknownEntityType { name } }
                if relation == "EmployedBy" && name == "ORG"
        ));
    }

    #[test]
    fn duplicate_entities_are_reported() {
        let yaml = r#"
namespace: "https://example.org/onto#"
entities:
  - name: PER
  - name: PER
"#;
        let err = OntologyDefinition::from_yaml(yaml)
            .expect("parse")
            .into_schema()
            .expect_err("duplicate");
        assert!(matches!(
            err,
            DefinitionError::Schema(SchemaError::Duplicate { .. })
        ));
    }

    #[test]
    fn invalid_namespace_is_reported() {
        let err = OntologyDefinition::from_yaml("namespace: not an iri")
            .expect("parse")
            .into_schema()
            .expect_err("invalid namespace");
        assert!(matches!(err, DefinitionError::Iri(_)));
    }

    #[test]
    fn unknown_value_kind_fails_to_parse() {
        let yaml = r#"
namespace: "https://example.org/onto#"
entities:
  - name: PER
    values: [colour]
"#;
        assert!(matches!(
            OntologyDefinition::from_yaml(yaml),
            Err(DefinitionError::Yaml(_))
        ));
    }
}
