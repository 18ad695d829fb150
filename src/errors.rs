use std::path::PathBuf;

use crate::ontology::{
    constraints::ConstraintViolation, graph::GraphError, mapping::LookupError,
    service::OntologyServiceError,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read configuration `{path}`: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(String),
    #[error(transparent)]
    Ontology(#[from] OntologyServiceError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
