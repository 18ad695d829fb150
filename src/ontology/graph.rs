//! Conversion between [`OntologySchema`] and RDF graphs.
//!
//! Each declared type becomes a named node typed with its schema class and
//! carrying its short names, value permission flags and, for relations, the
//! argument types. Short names use one predicate per kind, so a resource
//! declared under several kinds reads back with the same names per kind. The
//! namespace node is typed `owl:Ontology` and must be the only such node.

use std::collections::BTreeSet;

use oxrdf::{
    vocab::{rdf, rdfs},
    Graph, Literal, NamedNode, NamedNodeRef, Term, TermRef, Triple,
};
use thiserror::Error;

use super::entities::{OntologySchema, RelationDeclaration, SchemaError, TypeDeclaration};
use super::mapping::OntologyMapping;
use super::value_objects::{ArgumentTypes, Iri, Resource, ValuePermissions};
use super::vocab;

/// Errors raised when rebuilding a schema from a graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// No node is typed `owl:Ontology`.
    #[error("graph declares no ontology node")]
    MissingOntology,
    #[error("graph declares more than one ontology node: `{first}` and `{second}`")]
    AmbiguousOntology { first: Resource, second: Resource },
    #[error("type `{resource}` has no short name")]
    MissingShortName { resource: Resource },
    /// Only one of the two argument types was present.
    #[error("relation `{relation}` declares a single argument type")]
    IncompleteArguments { relation: Resource },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Writes the schema into a fresh RDF graph.
#[must_use]
pub fn to_graph(schema: &OntologySchema) -> Graph {
    let mut graph = Graph::new();
    let ontology = NamedNode::from(&Resource::new(schema.namespace().clone()));
    insert(&mut graph, &ontology, rdf::TYPE, vocab::OWL_ONTOLOGY.into_owned());
    if let Some(label) = schema.label() {
        insert(
            &mut graph,
            &ontology,
            rdfs::LABEL,
            Literal::new_simple_literal(label),
        );
    }

    let mut typed: BTreeSet<Resource> = BTreeSet::new();
    for declaration in schema.entity_types().values() {
        let subject = declare(&mut graph, declaration.resource(), vocab::ENTITY_TYPE);
        insert(&mut graph, &subject, rdfs::SUB_CLASS_OF, vocab::AIDA_ENTITY.into_owned());
        short_name(&mut graph, &subject, vocab::ENTITY_SHORT_NAME, declaration.short_name());
        typed.insert(declaration.resource().clone());
    }
    for (alias, canonical) in schema.entity_aliases() {
        if let Some(declaration) = schema.entity_types().get(canonical) {
            short_name(
                &mut graph,
                &NamedNode::from(declaration.resource()),
                vocab::ENTITY_SHORT_NAME,
                alias,
            );
        }
    }

    for declaration in schema.relation_types().values() {
        let subject = declare(&mut graph, declaration.resource(), vocab::RELATION_TYPE);
        short_name(&mut graph, &subject, vocab::RELATION_SHORT_NAME, declaration.short_name());
        if let Some(arguments) = declaration.arguments() {
            insert(
                &mut graph,
                &subject,
                vocab::FIRST_ARGUMENT_TYPE,
                NamedNode::from(&arguments.first),
            );
            insert(
                &mut graph,
                &subject,
                vocab::SECOND_ARGUMENT_TYPE,
                NamedNode::from(&arguments.second),
            );
        }
    }

    for declaration in schema.event_types().values() {
        let subject = declare(&mut graph, declaration.resource(), vocab::EVENT_TYPE);
        insert(&mut graph, &subject, rdfs::SUB_CLASS_OF, vocab::AIDA_EVENT.into_owned());
        short_name(&mut graph, &subject, vocab::EVENT_SHORT_NAME, declaration.short_name());
        typed.insert(declaration.resource().clone());
    }
    for declaration in schema.event_argument_types().values() {
        let subject = declare(&mut graph, declaration.resource(), vocab::EVENT_ARGUMENT_TYPE);
        short_name(
            &mut graph,
            &subject,
            vocab::EVENT_ARGUMENT_SHORT_NAME,
            declaration.short_name(),
        );
        typed.insert(declaration.resource().clone());
    }

    for resource in &typed {
        let permissions = schema.permissions(resource);
        let subject = NamedNode::from(resource);
        for (allowed, predicate) in [
            (permissions.name, vocab::MAY_HAVE_NAME),
            (permissions.text, vocab::MAY_HAVE_TEXT_VALUE),
            (permissions.numeric, vocab::MAY_HAVE_NUMERIC_VALUE),
        ] {
            if allowed {
                insert(&mut graph, &subject, predicate, Literal::from(true));
            }
        }
    }

    graph
}

/// Rebuilds a schema from a graph written by [`to_graph`].
///
/// The namespace is taken from the single node typed `owl:Ontology`. When an
/// entity type carries several short names the lexically smallest becomes the
/// canonical name and the others become aliases.
pub fn from_graph(graph: &Graph) -> Result<OntologySchema, GraphError> {
    let ontology = match named_subjects(graph, vocab::OWL_ONTOLOGY).as_slice() {
        [] => return Err(GraphError::MissingOntology),
        [ontology] => *ontology,
        [first, second, ..] => {
            return Err(GraphError::AmbiguousOntology {
                first: Resource::from(*first),
                second: Resource::from(*second),
            })
        }
    };
    let mut schema = OntologySchema::new(Iri::from(ontology.into_owned()));
    if let Some(TermRef::Literal(label)) = graph.object_for_subject_predicate(ontology, rdfs::LABEL)
    {
        schema = schema.with_label(label.value());
    }

    for subject in named_subjects(graph, vocab::ENTITY_TYPE) {
        let resource = Resource::from(subject);
        let permissions = value_permissions(graph, subject);
        let mut names =
            short_names(graph, subject, vocab::ENTITY_SHORT_NAME, &resource)?.into_iter();
        let Some(canonical) = names.next() else {
            continue;
        };
        schema.add_entity_type(
            TypeDeclaration::new(canonical.clone(), resource).with_permissions(permissions),
        )?;
        for alias in names {
            schema.add_entity_alias(alias, &canonical)?;
        }
    }

    for subject in named_subjects(graph, vocab::RELATION_TYPE) {
        let resource = Resource::from(subject);
        let arguments = match (
            named_object(graph, subject, vocab::FIRST_ARGUMENT_TYPE),
            named_object(graph, subject, vocab::SECOND_ARGUMENT_TYPE),
        ) {
            (Some(first), Some(second)) => Some(ArgumentTypes::new(first, second)),
            (None, None) => None,
            _ => return Err(GraphError::IncompleteArguments { relation: resource }),
        };
        for name in short_names(graph, subject, vocab::RELATION_SHORT_NAME, &resource)? {
            let mut declaration = RelationDeclaration::new(name, resource.clone());
            if let Some(arguments) = &arguments {
                declaration = declaration.with_arguments(arguments.clone());
            }
            schema.add_relation_type(declaration)?;
        }
    }

    for subject in named_subjects(graph, vocab::EVENT_TYPE) {
        let resource = Resource::from(subject);
        let permissions = value_permissions(graph, subject);
        for name in short_names(graph, subject, vocab::EVENT_SHORT_NAME, &resource)? {
            schema.add_event_type(
                TypeDeclaration::new(name, resource.clone()).with_permissions(permissions),
            )?;
        }
    }

    for subject in named_subjects(graph, vocab::EVENT_ARGUMENT_TYPE) {
        let resource = Resource::from(subject);
        let permissions = value_permissions(graph, subject);
        for name in short_names(graph, subject, vocab::EVENT_ARGUMENT_SHORT_NAME, &resource)? {
            schema.add_event_argument_type(
                TypeDeclaration::new(name, resource.clone()).with_permissions(permissions),
            )?;
        }
    }

    Ok(schema)
}

/// Serializes a graph as N-Triples with lines in lexical order.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut lines: Vec<String> = graph.iter().map(|triple| format!("{triple} .")).collect();
    lines.sort();
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Resolves every listed entity short name against a mapping and writes the
/// results as `rdfs:label` triples, useful when annotators need a lookup table.
#[must_use]
pub fn entity_label_graph(mapping: &dyn OntologyMapping) -> Graph {
    let mut graph = Graph::new();
    for name in mapping.entity_short_names() {
        if let Ok(resource) = mapping.entity_type(&name) {
            insert(
                &mut graph,
                &NamedNode::from(&resource),
                rdfs::LABEL,
                Literal::new_simple_literal(name),
            );
        }
    }
    graph
}

fn insert(
    graph: &mut Graph,
    subject: &NamedNode,
    predicate: NamedNodeRef<'_>,
    object: impl Into<Term>,
) {
    graph.insert(&Triple::new(subject.clone(), predicate.into_owned(), object));
}

fn declare(graph: &mut Graph, resource: &Resource, class: NamedNodeRef<'_>) -> NamedNode {
    let subject = NamedNode::from(resource);
    insert(graph, &subject, rdf::TYPE, class.into_owned());
    subject
}

fn short_name(graph: &mut Graph, subject: &NamedNode, predicate: NamedNodeRef<'_>, name: &str) {
    insert(graph, subject, predicate, Literal::new_simple_literal(name));
}

fn named_subjects<'a>(graph: &'a Graph, class: NamedNodeRef<'static>) -> Vec<NamedNodeRef<'a>> {
    let mut subjects: Vec<NamedNodeRef<'a>> = graph
        .subjects_for_predicate_object(rdf::TYPE, class)
        .filter_map(|subject| match TermRef::from(subject) {
            TermRef::NamedNode(node) => Some(node),
            _ => None,
        })
        .collect();
    subjects.sort_by(|left, right| left.as_str().cmp(right.as_str()));
    subjects
}

fn named_object(
    graph: &Graph,
    subject: NamedNodeRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Option<Resource> {
    match graph.object_for_subject_predicate(subject, predicate)? {
        TermRef::NamedNode(node) => Some(Resource::from(node)),
        _ => None,
    }
}

fn short_names(
    graph: &Graph,
    subject: NamedNodeRef<'_>,
    predicate: NamedNodeRef<'_>,
    resource: &Resource,
) -> Result<BTreeSet<String>, GraphError> {
    let names: BTreeSet<String> = graph
        .objects_for_subject_predicate(subject, predicate)
        .filter_map(|object| match object {
            TermRef::Literal(literal) => Some(literal.value().to_owned()),
            _ => None,
        })
        .collect();
    if names.is_empty() {
        return Err(GraphError::MissingShortName {
            resource: resource.clone(),
        });
    }
    Ok(names)
}

fn value_permissions(graph: &Graph, subject: NamedNodeRef<'_>) -> ValuePermissions {
    let flag = |predicate: NamedNodeRef<'_>| {
        matches!(
            graph.object_for_subject_predicate(subject, predicate),
            Some(TermRef::Literal(literal)) if literal.value() == "true"
        )
    };
    ValuePermissions {
        name: flag(vocab::MAY_HAVE_NAME),
        text: flag(vocab::MAY_HAVE_TEXT_VALUE),
        numeric: flag(vocab::MAY_HAVE_NUMERIC_VALUE),
    }
}
