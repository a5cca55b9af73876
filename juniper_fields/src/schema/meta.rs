//! Types used to describe the fields of a `GraphQL` schema

use arcstr::ArcStr;

use crate::{ast::Type, permission::Permission, resolver::Resolver};

/// Lifecycle phase of a [`FieldDefinition`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
    /// Declared without a resolver yet.
    Declared,
    /// A resolver is bound and the definition is fully populated.
    Bound,
}

/// Federation-specific parameters of a field.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FederationFieldParams {
    #[doc(hidden)]
    pub provides: Vec<ArcStr>,
    #[doc(hidden)]
    pub requires: Vec<ArcStr>,
    #[doc(hidden)]
    pub external: bool,
}

impl FederationFieldParams {
    /// Builds new empty [`FederationFieldParams`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field set this field `provides`.
    #[must_use]
    pub fn provides(mut self, fields: impl Into<ArcStr>) -> Self {
        self.provides.push(fields.into());
        self
    }

    /// Adds a field set this field `requires`.
    #[must_use]
    pub fn requires(mut self, fields: impl Into<ArcStr>) -> Self {
        self.requires.push(fields.into());
        self
    }

    /// Marks this field as `external`, owned by another service.
    #[must_use]
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Indicates whether no federation parameter is set.
    pub fn is_empty(&self) -> bool {
        self.provides.is_empty() && self.requires.is_empty() && !self.external
    }
}

/// Metadata for an argument to a field
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub origin_name: ArcStr,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub default_value: Option<serde_json::Value>,
}

impl ArgumentDefinition {
    /// Builds a new [`ArgumentDefinition`] of the given [`Type`], exposed as
    /// `name` and declared as `origin_name`.
    pub fn new(name: impl Into<ArcStr>, origin_name: impl Into<ArcStr>, arg_type: Type) -> Self {
        Self {
            name: name.into(),
            origin_name: origin_name.into(),
            arg_type,
            description: None,
            default_value: None,
        }
    }

    /// Sets the `description` of this [`ArgumentDefinition`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the default value of this [`ArgumentDefinition`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: serde_json::Value) -> Self {
        self.default_value = Some(val);
        self
    }

    /// Indicates whether this argument may be omitted in a query.
    pub fn is_optional(&self) -> bool {
        !self.arg_type.is_non_null() || self.default_value.is_some()
    }
}

/// Metadata for a field.
///
/// Created once, when the field is declared, and then mutated in place until
/// it reaches [`Phase::Bound`]. See [`field()`] for how the attributes are
/// populated.
///
/// [`field()`]: crate::field()
#[derive(Clone, Debug)]
pub struct FieldDefinition {
    /// Externally visible name.
    pub name: Option<ArcStr>,
    /// Name as declared at the source site.
    pub origin_name: Option<ArcStr>,
    /// Type of the field's value, if declared or inferred yet.
    pub field_type: Option<Type>,
    /// Resolver the field was declared with, if it's not a plain attribute.
    pub origin: Option<Resolver>,
    /// Resolver computing the field's value.
    pub base_resolver: Option<Resolver>,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub is_subscription: bool,
    #[doc(hidden)]
    pub permission_classes: Vec<Permission>,
    #[doc(hidden)]
    pub arguments: Vec<ArgumentDefinition>,
    #[doc(hidden)]
    pub federation: FederationFieldParams,
}

impl FieldDefinition {
    /// Returns the [`Phase`] this [`FieldDefinition`] is in.
    pub fn phase(&self) -> Phase {
        if self.base_resolver.is_some() {
            Phase::Bound
        } else {
            Phase::Declared
        }
    }

    /// Looks up an argument of this field by its externally visible `name`.
    pub fn argument_by_name(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.iter().find(|a| a.name.as_str() == name)
    }
}

crate::sa::assert_impl_all!(FieldDefinition: Send, Sync);

#[cfg(test)]
mod tests {
    use arcstr::literal;
    use serde_json::json;

    use super::{ArgumentDefinition, FederationFieldParams};
    use crate::ast::Type;

    #[test]
    fn argument_optionality() {
        let required = ArgumentDefinition::new("first", "first", Type::NonNullNamed(literal!("Int")));
        assert!(!required.is_optional());
        assert!(required.clone().default_value(json!(10)).is_optional());

        let nullable = ArgumentDefinition::new("after", "after", Type::Named(literal!("String")));
        assert!(nullable.is_optional());
    }

    #[test]
    fn federation_params() {
        assert!(FederationFieldParams::default().is_empty());

        let params = FederationFieldParams::new()
            .provides("name")
            .requires("id email")
            .external();
        assert!(!params.is_empty());
        assert_eq!(params.provides, vec![literal!("name")]);
        assert_eq!(params.requires, vec![literal!("id email")]);
        assert!(params.external);
    }
}
