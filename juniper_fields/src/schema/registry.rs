use std::{fmt, ops::Index};

use crate::{
    error::FieldResult,
    field::{self, Declaration, FieldOptions},
    resolver::Resolver,
    schema::meta::FieldDefinition,
};

/// Stable identifier of a [`FieldDefinition`] within its [`Registry`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldId(usize);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of every declared [`FieldDefinition`].
///
/// Definitions are never removed nor replaced, so a [`FieldId`] handed out by
/// a [`Registry`] stays valid for its whole lifetime. Indexing a [`Registry`]
/// with a [`FieldId`] of another one panics.
#[derive(Debug, Default)]
pub struct Registry {
    fields: Vec<FieldDefinition>,
}

impl Registry {
    /// Creates a new empty [`Registry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new field, see [`field()`] for details.
    ///
    /// [`field()`]: crate::field()
    pub fn field(
        &mut self,
        resolver: Option<Resolver>,
        options: FieldOptions,
    ) -> FieldResult<Declaration> {
        field::field(self, resolver, options)
    }

    pub(crate) fn insert(&mut self, definition: FieldDefinition) -> FieldId {
        let id = FieldId(self.fields.len());
        self.fields.push(definition);
        id
    }

    pub(crate) fn definition_mut(&mut self, id: FieldId) -> &mut FieldDefinition {
        &mut self.fields[id.0]
    }

    /// Returns the [`FieldDefinition`] identified by `id`, if any.
    pub fn get(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.fields.get(id.0)
    }

    /// Finds the field declared with the given `resolver`.
    pub fn find_by_resolver(&self, resolver: &Resolver) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|f| f.origin.as_ref().is_some_and(|o| o.ptr_eq(resolver)))
            .map(FieldId)
    }

    /// Iterates over all the declared fields, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldDefinition)> {
        self.fields.iter().enumerate().map(|(i, f)| (FieldId(i), f))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Indicates whether no field has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Index<FieldId> for Registry {
    type Output = FieldDefinition;

    fn index(&self, id: FieldId) -> &Self::Output {
        &self.fields[id.0]
    }
}
