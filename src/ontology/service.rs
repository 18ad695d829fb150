use std::sync::Arc;

use tracing::info;

use crate::{
    config::{OntologySettings, OntologySource},
    ontology::{
        coldstart,
        definition::{DefinitionError, OntologyDefinition},
        entities::{OntologySchema, SchemaError},
        mapping::OntologyMapping,
    },
};

/// Type alias simplifying mapping trait object usage by callers.
pub type MappingHandle = dyn OntologyMapping + Send + Sync + 'static;

/// Ontology service holding the schema selected by configuration.
#[derive(Clone)]
pub struct OntologyService {
    schema: Arc<OntologySchema>,
}

impl OntologyService {
    /// Creates a new [`OntologyService`] around an already built schema.
    #[must_use]
    pub fn new(schema: OntologySchema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    /// Builds a service instance from configuration settings.
    pub fn from_config(settings: &OntologySettings) -> Result<Self, OntologyServiceError> {
        let schema = match &settings.source {
            OntologySource::ColdStart => coldstart::ontology()?,
            OntologySource::Definition { path } => {
                info!(path = %path.display(), "ontology_definition_loading");
                OntologyDefinition::from_path(path)?.into_schema()?
            }
        };
        info!(
            namespace = %schema.namespace(),
            entity_types = schema.entity_types().len(),
            relation_types = schema.relation_types().len(),
            event_types = schema.event_types().len(),
            event_argument_types = schema.event_argument_types().len(),
            "ontology_loaded"
        );
        Ok(Self::new(schema))
    }

    /// Returns a shared handle to the mapping.
    pub fn mapping(&self) -> Arc<MappingHandle> {
        Arc::clone(&self.schema) as Arc<MappingHandle>
    }

    /// Returns the backing schema.
    pub fn schema(&self) -> &OntologySchema {
        &self.schema
    }
}

/// Errors raised while loading the configured ontology.
#[derive(Debug, thiserror::Error)]
pub enum OntologyServiceError {
    /// The built-in ontology failed validation.
    #[error("domain error: {0}")]
    Domain(#[from] SchemaError),
    /// The configured definition file could not be used.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::{OntologyService, OntologyServiceError};
    use crate::{
        config::{OntologySettings, OntologySource},
        ontology::{definition::DefinitionError, mapping::OntologyMapping},
    };

    #[test]
    fn defaults_to_coldstart() {
        let service = OntologyService::from_config(&OntologySettings::default()).expect("service");
        let mapping = service.mapping();
        assert!(mapping.entity_short_names().contains("PER"));
        assert_eq!(service.schema().label(), Some("ColdStart"));
    }

    #[test]
    fn loads_definition_files() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("aif-ontology-{nanos}.yaml"));
        fs::write(
            &path,
            "namespace: \"https://example.org/onto#\"\nentities:\n  - name: Person\n",
        )
        .expect("definition file");

        let settings = OntologySettings {
            source: OntologySource::Definition { path: path.clone() },
        };
        let service = OntologyService::from_config(&settings).expect("service");
        assert_eq!(
            service
                .mapping()
                .entity_type("Person")
                .expect("Person")
                .iri()
                .as_str(),
            "https://example.org/onto#Person"
        );

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_definition_file_is_reported() {
        let settings = OntologySettings {
            source: OntologySource::Definition {
                path: std::env::temp_dir().join("aif-ontology-does-not-exist.yaml"),
            },
        };
        let err = OntologyService::from_config(&settings)
            .err()
            .expect("missing file");
        assert!(matches!(
            err,
            OntologyServiceError::Definition(DefinitionError::Io { .. })
        ));
    }
}
