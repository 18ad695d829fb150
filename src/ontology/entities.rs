use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use super::mapping::{LookupError, OntologyMapping};
use super::value_objects::{ArgumentTypes, Iri, IriError, Resource, ValueKind, ValuePermissions};

/// Declaration of an entity, event or event argument type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration {
    short_name: String,
    resource: Resource,
    permissions: ValuePermissions,
}

impl TypeDeclaration {
    /// Creates a declaration that allows no literal values.
    #[must_use]
    pub fn new(short_name: impl Into<String>, resource: Resource) -> Self {
        Self {
            short_name: short_name.into(),
            resource,
            permissions: ValuePermissions::default(),
        }
    }

    /// Replaces the literal value permissions.
    #[must_use]
    pub fn with_permissions(mut self, permissions: ValuePermissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Allows objects of this type to carry the given kind of value.
    #[must_use]
    pub fn allow(mut self, kind: ValueKind) -> Self {
        self.permissions = self.permissions.allow(kind);
        self
    }

    /// Returns the short name used by annotations.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Returns the ontology resource.
    #[must_use]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Returns the literal value permissions.
    #[must_use]
    pub fn permissions(&self) -> ValuePermissions {
        self.permissions
    }
}

/// Declaration of a relation type with an optional two-argument schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationDeclaration {
    short_name: String,
    resource: Resource,
    arguments: Option<ArgumentTypes>,
}

impl RelationDeclaration {
    #[must_use]
    pub fn new(short_name: impl Into<String>, resource: Resource) -> Self {
        Self {
            short_name: short_name.into(),
            resource,
            arguments: None,
        }
    }

    /// Declares the relation's argument types in annotation order.
    #[must_use]
    pub fn with_arguments(mut self, arguments: ArgumentTypes) -> Self {
        self.arguments = Some(arguments);
        self
    }

    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    #[must_use]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    #[must_use]
    pub fn arguments(&self) -> Option<&ArgumentTypes> {
        self.arguments.as_ref()
    }
}

/// The categories of types an ontology declares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Entity,
    Relation,
    Event,
    EventArgument,
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Entity => "entity type",
            Self::Relation => "relation type",
            Self::Event => "event type",
            Self::EventArgument => "event argument type",
        })
    }
}

/// Aggregates the type declarations of a domain ontology.
///
/// The schema is the in-memory backing store for [`OntologyMapping`]: it is
/// built once, validated on every insertion and queried read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OntologySchema {
    namespace: Iri,
    label: Option<String>,
    entity_types: BTreeMap<String, TypeDeclaration>,
    entity_aliases: BTreeMap<String, String>,
    relation_types: BTreeMap<String, RelationDeclaration>,
    event_types: BTreeMap<String, TypeDeclaration>,
    event_argument_types: BTreeMap<String, TypeDeclaration>,
    permissions: BTreeMap<Resource, ValuePermissions>,
    relation_arguments: BTreeMap<Resource, ArgumentTypes>,
}

impl OntologySchema {
    /// Creates an empty schema minting resources under `namespace`.
    #[must_use]
    pub fn new(namespace: Iri) -> Self {
        Self {
            namespace,
            label: None,
            entity_types: BTreeMap::new(),
            entity_aliases: BTreeMap::new(),
            relation_types: BTreeMap::new(),
            event_types: BTreeMap::new(),
            event_argument_types: BTreeMap::new(),
            permissions: BTreeMap::new(),
            relation_arguments: BTreeMap::new(),
        }
    }

    /// Sets a human readable label for the ontology.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mints a resource for `local` under the schema namespace.
    pub fn resource_for(&self, local: &str) -> Result<Resource, IriError> {
        self.namespace.join(local).map(Resource::new)
    }

    /// Adds an entity type, enforcing unique short names across names and aliases.
    pub fn add_entity_type(&mut self, declaration: TypeDeclaration) -> Result<(), SchemaError> {
        let name = declaration.short_name().to_owned();
        if self.entity_types.contains_key(&name) || self.entity_aliases.contains_key(&name) {
            return Err(SchemaError::duplicate(TypeKind::Entity, &name));
        }
        self.grant(declaration.resource(), declaration.permissions());
        self.entity_types.insert(name, declaration);
        Ok(())
    }

    /// Registers `alias` as a second short name of the entity type `target`.
    pub fn add_entity_alias(
        &mut self,
        alias: impl Into<String>,
        target: &str,
    ) -> Result<(), SchemaError> {
        let alias = alias.into();
        if self.entity_types.contains_key(&alias) || self.entity_aliases.contains_key(&alias) {
            return Err(SchemaError::duplicate(TypeKind::Entity, &alias));
        }
        if !self.entity_types.contains_key(target) {
            return Err(SchemaError::UnknownEntityType {
                name: target.to_owned(),
            });
        }
        self.entity_aliases.insert(alias, target.to_owned());
        Ok(())
    }

    /// Adds a relation type; declared argument types must be known entity types.
    pub fn add_relation_type(
        &mut self,
        declaration: RelationDeclaration,
    ) -> Result<(), SchemaError> {
        let name = declaration.short_name().to_owned();
        if self.relation_types.contains_key(&name) {
            return Err(SchemaError::duplicate(TypeKind::Relation, &name));
        }

        if let Some(arguments) = declaration.arguments() {
            for argument in [&arguments.first, &arguments.second] {
                if !self.is_entity_resource(argument) {
                    return Err(SchemaError::UndeclaredArgumentType {
                        relation: name,
                        argument: argument.clone(),
                    });
                }
            }
            match self.relation_arguments.get(declaration.resource()) {
                Some(existing) if existing != arguments => {
                    return Err(SchemaError::ConflictingArguments {
                        relation: declaration.resource().clone(),
                    });
                }
                Some(_) => {}
                None => {
                    self.relation_arguments
                        .insert(declaration.resource().clone(), arguments.clone());
                }
            }
        }

        self.relation_types.insert(name, declaration);
        Ok(())
    }

    /// Adds an event type.
    pub fn add_event_type(&mut self, declaration: TypeDeclaration) -> Result<(), SchemaError> {
        let name = declaration.short_name().to_owned();
        if self.event_types.contains_key(&name) {
            return Err(SchemaError::duplicate(TypeKind::Event, &name));
        }
        self.grant(declaration.resource(), declaration.permissions());
        self.event_types.insert(name, declaration);
        Ok(())
    }

    /// Adds an event argument role.
    pub fn add_event_argument_type(
        &mut self,
        declaration: TypeDeclaration,
    ) -> Result<(), SchemaError> {
        let name = declaration.short_name().to_owned();
        if self.event_argument_types.contains_key(&name) {
            return Err(SchemaError::duplicate(TypeKind::EventArgument, &name));
        }
        self.grant(declaration.resource(), declaration.permissions());
        self.event_argument_types.insert(name, declaration);
        Ok(())
    }

    fn grant(&mut self, resource: &Resource, permissions: ValuePermissions) {
        let entry = self.permissions.entry(resource.clone()).or_default();
        *entry = entry.union(permissions);
    }

    fn is_entity_resource(&self, resource: &Resource) -> bool {
        self.entity_types
            .values()
            .any(|declaration| declaration.resource() == resource)
    }

    /// Returns the namespace new resources are minted under.
    #[must_use]
    pub fn namespace(&self) -> &Iri {
        &self.namespace
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns entity types keyed by canonical short name.
    #[must_use]
    pub fn entity_types(&self) -> &BTreeMap<String, TypeDeclaration> {
        &self.entity_types
    }

    /// Returns entity aliases mapped to their canonical short name.
    #[must_use]
    pub fn entity_aliases(&self) -> &BTreeMap<String, String> {
        &self.entity_aliases
    }

    #[must_use]
    pub fn relation_types(&self) -> &BTreeMap<String, RelationDeclaration> {
        &self.relation_types
    }

    #[must_use]
    pub fn event_types(&self) -> &BTreeMap<String, TypeDeclaration> {
        &self.event_types
    }

    #[must_use]
    pub fn event_argument_types(&self) -> &BTreeMap<String, TypeDeclaration> {
        &self.event_argument_types
    }

    /// Returns the literal value permissions of a resource; unknown resources allow nothing.
    #[must_use]
    pub fn permissions(&self, resource: &Resource) -> ValuePermissions {
        self.permissions.get(resource).copied().unwrap_or_default()
    }
}

impl OntologyMapping for OntologySchema {
    fn entity_short_names(&self) -> BTreeSet<String> {
        self.entity_types
            .keys()
            .chain(self.entity_aliases.keys())
            .cloned()
            .collect()
    }

    fn entity_type(&self, short_name: &str) -> Result<Resource, LookupError> {
        let canonical = self
            .entity_aliases
            .get(short_name)
            .map_or(short_name, String::as_str);
        self.entity_types
            .get(canonical)
            .map(|declaration| declaration.resource().clone())
            .ok_or_else(|| LookupError::entity(short_name))
    }

    fn relation_type(&self, name: &str) -> Result<Resource, LookupError> {
        self.relation_types
            .get(name)
            .map(|declaration| declaration.resource().clone())
            .ok_or_else(|| LookupError::relation(name))
    }

    fn event_type(&self, name: &str) -> Result<Resource, LookupError> {
        self.event_types
            .get(name)
            .map(|declaration| declaration.resource().clone())
            .ok_or_else(|| LookupError::event(name))
    }

    fn event_argument_type(&self, name: &str) -> Result<Resource, LookupError> {
        self.event_argument_types
            .get(name)
            .map(|declaration| declaration.resource().clone())
            .ok_or_else(|| LookupError::event_argument(name))
    }

    fn relation_argument_types(&self, relation: &Resource) -> Result<ArgumentTypes, LookupError> {
        self.relation_arguments
            .get(relation)
            .cloned()
            .ok_or_else(|| LookupError::MissingArgumentTypes {
                relation: relation.clone(),
            })
    }

    fn type_allowed_to_have_a_name(&self, ty: &Resource) -> bool {
        self.permissions(ty).name
    }

    fn type_allowed_to_have_text_value(&self, ty: &Resource) -> bool {
        self.permissions(ty).text
    }

    fn type_allowed_to_have_numeric_value(&self, ty: &Resource) -> bool {
        self.permissions(ty).numeric
    }
}

/// Errors raised when assembling an [`OntologySchema`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A short name was declared twice within one kind.
    #[error("{kind} `{name}` already exists")]
    Duplicate { kind: TypeKind, name: String },
    /// An alias pointed at an entity type that was never declared.
    #[error("entity type `{name}` does not exist")]
    UnknownEntityType { name: String },
    /// A relation argument is not one of the declared entity types.
    #[error("relation `{relation}` uses undeclared argument type `{argument}`")]
    UndeclaredArgumentType { relation: String, argument: Resource },
    /// Two names share a relation resource but disagree on its arguments.
    #[error("relation `{relation}` is declared with conflicting argument types")]
    ConflictingArguments { relation: Resource },
    /// A resource could not be minted.
    #[error(transparent)]
    Iri(#[from] IriError),
}

impl SchemaError {
    fn duplicate(kind: TypeKind, name: &str) -> Self {
        Self::Duplicate {
            kind,
            name: name.to_owned(),
        }
    }
}
