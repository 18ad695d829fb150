use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use aif_ontology::{
    config::{Config, OntologySource},
    ontology::{
        ensure_value_allowed, graph, DefinitionError, OntologyDefinition, OntologyMapping,
        OntologyService, OntologyServiceError, ValueKind,
    },
};

const YAML_DEFINITION: &str = r#"
namespace: "https://example.org/employment#"
label: Employment
entities:
  - name: PER
    local: Person
    values: [name]
  - name: ORG
    local: Organization
    values: [name]
  - name: NUM
    local: Number
    values: [numeric]
relations:
  - name: EmployedBy
    arguments: [PER, ORG]
events:
  - name: PERSONNEL.START-POSITION
event_arguments:
  - name: PERSONNEL.START-POSITION_Employee
"#;

fn scratch_file(extension: &str, content: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("aif-ontology-source-{nanos}.{extension}"));
    fs::write(&path, content).expect("scratch file");
    path
}

#[test]
fn config_selects_definition_file() {
    let definition = scratch_file("yaml", YAML_DEFINITION);
    let config = Config::from_yaml(&format!(
        "logger:\n  enable: false\nontology:\n  source:\n    kind: definition\n    path: {}\n",
        definition.display()
    ))
    .expect("config");
    assert!(matches!(
        config.ontology.source,
        OntologySource::Definition { .. }
    ));

    let service = OntologyService::from_config(&config.ontology).expect("service");
    let mapping = service.mapping();
    let person = mapping.entity_type("PER").expect("PER");
    let organization = mapping.entity_type("ORG").expect("ORG");
    let employed_by = mapping.relation_type("EmployedBy").expect("EmployedBy");
    let arguments = mapping
        .relation_argument_types(&employed_by)
        .expect("arguments");
    assert_eq!((arguments.first, arguments.second), (person.clone(), organization));

    let number = mapping.entity_type("NUM").expect("NUM");
    assert!(ensure_value_allowed(mapping.as_ref(), &number, ValueKind::Numeric).is_ok());
    assert!(ensure_value_allowed(mapping.as_ref(), &person, ValueKind::Numeric).is_err());

    let _ = fs::remove_file(definition);
}

#[test]
fn json_definitions_load_by_extension() {
    let path = scratch_file(
        "json",
        r#"{
            "namespace": "https://example.org/employment#",
            "entities": [{ "name": "PER", "local": "Person", "values": ["name"] }],
            "events": [{ "name": "LIFE.DIE" }]
        }"#,
    );
    let schema = OntologyDefinition::from_path(&path)
        .expect("definition")
        .into_schema()
        .expect("schema");
    assert_eq!(
        schema.event_type("LIFE.DIE").expect("event").iri().as_str(),
        "https://example.org/employment#LIFE.DIE"
    );
    let _ = fs::remove_file(path);
}

#[test]
fn unsupported_extension_is_rejected() {
    let path = scratch_file("ttl", "@prefix ex: <https://example.org/> .");
    let err = OntologyDefinition::from_path(&path).expect_err("turtle is not a definition");
    assert!(matches!(err, DefinitionError::UnsupportedFormat { .. }));
    let _ = fs::remove_file(path);
}

#[test]
fn malformed_definition_surfaces_through_the_service() {
    let path = scratch_file("yaml", "namespace: [not, a, string]\n");
    let config = Config {
        ontology: aif_ontology::config::OntologySettings {
            source: OntologySource::Definition { path: path.clone() },
        },
        ..Config::default()
    };
    let err = OntologyService::from_config(&config.ontology)
        .err()
        .expect("malformed definition");
    assert!(matches!(
        err,
        OntologyServiceError::Definition(DefinitionError::Yaml(_))
    ));
    let _ = fs::remove_file(path);
}

#[test]
fn definition_survives_a_graph_round_trip() {
    let schema = OntologyDefinition::from_yaml(YAML_DEFINITION)
        .expect("definition")
        .into_schema()
        .expect("schema");
    let restored = graph::from_graph(&graph::to_graph(&schema)).expect("restored");

    assert_eq!(restored.label(), Some("Employment"));
    assert_eq!(restored.entity_short_names(), schema.entity_short_names());
    let employed_by = schema.relation_type("EmployedBy").expect("relation");
    assert_eq!(restored.relation_type("EmployedBy"), Ok(employed_by.clone()));
    assert_eq!(
        restored.relation_argument_types(&employed_by),
        schema.relation_argument_types(&employed_by)
    );
    assert_eq!(
        restored.event_argument_type("PERSONNEL.START-POSITION_Employee"),
        schema.event_argument_type("PERSONNEL.START-POSITION_Employee")
    );
    let number = schema.entity_type("NUM").expect("NUM");
    assert!(restored.type_allowed_to_have_numeric_value(&number));
    assert!(!restored.type_allowed_to_have_a_name(&number));
}

#[test]
fn shared_iris_keep_their_names_per_kind_after_a_graph_round_trip() {
    let schema = OntologyDefinition::from_yaml(
        r#"
namespace: "https://example.org/onto#"
entities:
  - name: VAL
    local: Value
    values: [text]
event_arguments:
  - name: Attack_Value
    local: Value
    values: [numeric]
"#,
    )
    .expect("definition")
    .into_schema()
    .expect("schema");
    let restored = graph::from_graph(&graph::to_graph(&schema)).expect("restored");

    assert_eq!(
        restored.entity_short_names().into_iter().collect::<Vec<_>>(),
        vec!["VAL".to_owned()]
    );
    assert!(restored.entity_type("Attack_Value").is_err());
    assert!(restored.event_argument_type("VAL").is_err());
    assert_eq!(
        restored.event_argument_type("Attack_Value"),
        schema.event_argument_type("Attack_Value")
    );
}
