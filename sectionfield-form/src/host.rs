//! Host entities and their relation accessors.
//!
//! A host entity type declares, once, which relations it has and how to read
//! each of them. Relationship fields look accessors up by relation name
//! instead of assuming a getter exists.

use std::collections::HashMap;

/// Reads one relation of a host entity.
pub enum RelationAccessor<H, E> {
    /// Many-to-one: the related entity, if any.
    ToOne(fn(&H) -> Option<E>),
    /// One-to-many and many-to-many: related entities in their stored order.
    ToMany(fn(&H) -> Vec<E>),
}

impl<H, E> Clone for RelationAccessor<H, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, E> Copy for RelationAccessor<H, E> {}

/// Relation name → accessor, defined once per host entity type.
pub struct RelationAccessors<H, E> {
    accessors: HashMap<String, RelationAccessor<H, E>>,
}

impl<H, E> RelationAccessors<H, E> {
    pub fn new() -> Self {
        Self {
            accessors: HashMap::new(),
        }
    }

    /// Register a to-one relation.
    pub fn to_one(mut self, relation: impl Into<String>, get: fn(&H) -> Option<E>) -> Self {
        self.accessors
            .insert(relation.into(), RelationAccessor::ToOne(get));
        self
    }

    /// Register a to-many relation.
    pub fn to_many(mut self, relation: impl Into<String>, get: fn(&H) -> Vec<E>) -> Self {
        self.accessors
            .insert(relation.into(), RelationAccessor::ToMany(get));
        self
    }

    pub fn get(&self, relation: &str) -> Option<RelationAccessor<H, E>> {
        self.accessors.get(relation).copied()
    }

    pub fn contains(&self, relation: &str) -> bool {
        self.accessors.contains_key(relation)
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl<H, E> Default for RelationAccessors<H, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The entity a form is being built for.
///
/// Implementations usually return a reference to a `static` built with
/// `LazyLock`, so the accessor map is constructed once per type.
pub trait HostEntity<E>: Sized {
    fn relations(&self) -> &RelationAccessors<Self, E>;
}
