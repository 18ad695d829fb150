//! Maps annotation-schema labels onto domain ontology resources.
//!
//! ```
//! use aif_ontology::ontology::{coldstart, OntologyMapping};
//!
//! let ontology = coldstart::ontology().expect("built-in ontology");
//! let person = ontology.entity_type("PER").expect("PER is declared");
//! assert!(ontology.type_allowed_to_have_a_name(&person));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
mod errors;
pub mod logger;
pub mod ontology;

pub use errors::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
