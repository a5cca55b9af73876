//! Declaring fields and binding resolvers to them.

use std::ops::Deref;

use arcstr::ArcStr;
use tracing::{debug, warn};

use crate::{
    arguments::get_arguments_from_resolver,
    ast::Type,
    error::{FieldError, FieldResult},
    permission::Permission,
    resolver::Resolver,
    schema::{
        meta::{FederationFieldParams, FieldDefinition},
        registry::{FieldId, Registry},
    },
    util::to_camel_case,
};

/// Options a field is declared with.
#[derive(Clone, Debug, Default)]
pub struct FieldOptions {
    #[doc(hidden)]
    pub name: Option<ArcStr>,
    #[doc(hidden)]
    pub is_subscription: bool,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub permission_classes: Vec<Permission>,
    #[doc(hidden)]
    pub federation: Option<FederationFieldParams>,
}

impl FieldOptions {
    /// Creates new default [`FieldOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the externally visible `name` of the field, used as is.
    ///
    /// An empty `name` counts as no name at all.
    ///
    /// Overwrites any previously set name.
    #[must_use]
    pub fn name(mut self, name: impl Into<ArcStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the field as belonging to a subscription.
    #[must_use]
    pub fn subscription(mut self) -> Self {
        self.is_subscription = true;
        self
    }

    /// Sets the `description` of the field.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a `permission` guarding the field.
    #[must_use]
    pub fn permission(mut self, permission: Permission) -> Self {
        self.permission_classes.push(permission);
        self
    }

    /// Appends all the given `permissions` guarding the field.
    #[must_use]
    pub fn permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permission_classes.extend(permissions);
        self
    }

    /// Sets the [`FederationFieldParams`] of the field.
    ///
    /// Overwrites any previously set parameters.
    #[must_use]
    pub fn federation(mut self, federation: FederationFieldParams) -> Self {
        self.federation = Some(federation);
        self
    }
}

/// Outcome of [`field()`].
#[derive(Debug)]
pub enum Declaration {
    /// Declared without a resolver, awaiting one via [`FieldBuilder::complete()`].
    Deferred(FieldBuilder),
    /// Declared with a resolver, already bound to it.
    Bound(BoundResolver),
}

impl Declaration {
    /// Returns the [`FieldBuilder`], if the field awaits its resolver.
    pub fn into_deferred(self) -> Option<FieldBuilder> {
        match self {
            Self::Deferred(builder) => Some(builder),
            Self::Bound(_) => None,
        }
    }

    /// Returns the [`BoundResolver`], if the field has been declared with one.
    pub fn into_bound(self) -> Option<BoundResolver> {
        match self {
            Self::Deferred(_) => None,
            Self::Bound(resolver) => Some(resolver),
        }
    }

    /// Identifier of the declared [`FieldDefinition`].
    pub fn id(&self) -> FieldId {
        match self {
            Self::Deferred(builder) => builder.id,
            Self::Bound(resolver) => resolver.field,
        }
    }
}

/// Declares a new field in the `registry`.
///
/// With a `resolver` at hand, the field is named after it (unless
/// [`FieldOptions::name()`] says otherwise), its arguments are extracted from
/// the resolver's parameters and its type is inferred from the resolver's
/// return type. The resolver is handed back as a [`BoundResolver`].
///
/// Without one, the field only gets what the `options` tell and a
/// [`FieldBuilder`] is handed back, to be completed once the resolver is
/// known, or to be named afterwards via [`FieldBuilder::set_name()`] for
/// plain attributes.
///
/// A name given via [`FieldOptions::name()`] is used as is, while names derived
/// from resolvers are converted to `camelCase`.
///
/// # Errors
///
/// [`FieldError::MissingArgumentsAnnotations`] if the `resolver` has untyped
/// parameters.
pub fn field(
    registry: &mut Registry,
    resolver: Option<Resolver>,
    options: FieldOptions,
) -> FieldResult<Declaration> {
    let FieldOptions {
        name,
        is_subscription,
        description,
        permission_classes,
        federation,
    } = options;
    let name = name.filter(|n| !n.is_empty());

    let (resolver_name, name, arguments) = match &resolver {
        Some(resolver) => {
            let resolver_name = ArcStr::from(to_camel_case(resolver.name()).as_ref());
            let name = name.unwrap_or_else(|| resolver_name.clone());
            let arguments = get_arguments_from_resolver(resolver, &resolver_name)?;
            (Some(resolver_name), Some(name), arguments)
        }
        None => (None, name, Vec::new()),
    };

    let id = registry.insert(FieldDefinition {
        name,
        origin_name: resolver_name,
        field_type: None,
        origin: resolver.clone(),
        base_resolver: resolver.clone(),
        description,
        is_subscription,
        permission_classes,
        arguments,
        federation: federation.unwrap_or_default(),
    });
    let builder = FieldBuilder { id };

    debug!(
        field = %id,
        name = registry[id].name.as_deref(),
        phase = ?registry[id].phase(),
        is_subscription,
        "declared field"
    );

    match resolver {
        Some(resolver) => builder.complete(registry, resolver).map(Declaration::Bound),
        None => Ok(Declaration::Deferred(builder)),
    }
}

/// Field declared in a [`Registry`], which is not bound to a resolver yet.
///
/// Created by [`field()`] and finished by [`FieldBuilder::complete()`].
#[derive(Debug, Eq, PartialEq)]
pub struct FieldBuilder {
    id: FieldId,
}

impl FieldBuilder {
    /// Identifier of the [`FieldDefinition`] being built.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Returns the [`FieldDefinition`] being built.
    ///
    /// # Panics
    ///
    /// If the `registry` is not the one this field has been declared in.
    pub fn definition<'r>(&self, registry: &'r Registry) -> &'r FieldDefinition {
        &registry[self.id]
    }

    /// Records the name the field is declared under, once it's known.
    ///
    /// The `name` is taken as the field's origin name, unless one is already
    /// set, and its `camelCase` form as the field's name, unless one is
    /// already set. Empty names are ignored, and empty names already set are
    /// overwritten.
    ///
    /// # Panics
    ///
    /// If the `registry` is not the one this field has been declared in.
    pub fn set_name(&self, registry: &mut Registry, name: &str) {
        if name.is_empty() {
            return;
        }

        let definition = registry.definition_mut(self.id);
        if definition.origin_name.as_deref().is_none_or(str::is_empty) {
            definition.origin_name = Some(name.into());
        }
        if definition.name.as_deref().is_none_or(str::is_empty) {
            definition.name = Some(to_camel_case(name).as_ref().into());
        }
    }

    /// Sets the [`Type`] of the field explicitly.
    ///
    /// # Panics
    ///
    /// If the `registry` is not the one this field has been declared in.
    pub fn set_type(&self, registry: &mut Registry, ty: Type) {
        registry.definition_mut(self.id).field_type = Some(ty);
    }

    /// Binds the `resolver` to this field, moving it to [`Phase::Bound`].
    ///
    /// The field keeps its name if it has a non-empty one already, otherwise it's named
    /// after the `resolver` in `camelCase`. The origin name is always reset to
    /// the `camelCase`d name of the `resolver`. Arguments are re-extracted from
    /// the `resolver`'s parameters and the type is taken from its return type,
    /// staying unset if the `resolver` declares none (see
    /// [`check_return_annotation()`] to reject such fields).
    ///
    /// # Errors
    ///
    /// [`FieldError::MissingArgumentsAnnotations`] if the `resolver` has
    /// untyped parameters.
    ///
    /// # Panics
    ///
    /// If the `registry` is not the one this field has been declared in.
    ///
    /// [`Phase::Bound`]: crate::Phase::Bound
    pub fn complete(self, registry: &mut Registry, resolver: Resolver) -> FieldResult<BoundResolver> {
        let resolver_name = ArcStr::from(to_camel_case(resolver.name()).as_ref());

        let definition = registry.definition_mut(self.id);
        let name = definition
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| resolver_name.clone());
        let arguments = get_arguments_from_resolver(&resolver, &name)?;

        definition.name = Some(name.clone());
        definition.origin_name = Some(resolver_name);
        definition.origin = Some(resolver.clone());
        definition.base_resolver = Some(resolver.clone());
        definition.arguments = arguments;
        definition.field_type = resolver.signature().return_type().cloned();

        if definition.field_type.is_none() {
            warn!(
                field = %self.id,
                name = name.as_str(),
                resolver = resolver.name(),
                "resolver declares no return type, field type left unset"
            );
        }
        debug!(
            field = %self.id,
            name = name.as_str(),
            origin_name = definition.origin_name.as_deref(),
            phase = ?definition.phase(),
            arguments = definition.arguments.len(),
            "bound field resolver"
        );

        Ok(BoundResolver {
            resolver,
            field: self.id,
        })
    }
}

/// [`Resolver`] bound to the field it has been declared for.
///
/// Dereferences to the [`Resolver`] itself, which stays unchanged.
#[derive(Clone, Debug)]
pub struct BoundResolver {
    resolver: Resolver,
    field: FieldId,
}

impl BoundResolver {
    /// Identifier of the field this [`Resolver`] is bound to.
    pub fn field_id(&self) -> FieldId {
        self.field
    }

    /// Returns the [`FieldDefinition`] this [`Resolver`] is bound to.
    ///
    /// # Panics
    ///
    /// If the `registry` is not the one the field has been declared in.
    pub fn definition<'r>(&self, registry: &'r Registry) -> &'r FieldDefinition {
        &registry[self.field]
    }

    /// Unwraps the bound [`Resolver`].
    pub fn into_inner(self) -> Resolver {
        self.resolver
    }
}

impl Deref for BoundResolver {
    type Target = Resolver;

    fn deref(&self) -> &Self::Target {
        &self.resolver
    }
}

/// Checks that the resolver of the given field declares its return type.
///
/// Fields without a resolver pass, as there is nothing to check.
///
/// # Errors
///
/// [`FieldError::MissingReturnAnnotation`] carrying the field's name if the
/// bound resolver declares no return type.
pub fn check_return_annotation(definition: &FieldDefinition) -> FieldResult<()> {
    let Some(resolver) = &definition.base_resolver else {
        return Ok(());
    };

    if resolver.signature().return_type().is_none() {
        let name = definition
            .name
            .clone()
            .unwrap_or_else(|| resolver.name().into());
        return Err(FieldError::MissingReturnAnnotation(name));
    }

    Ok(())
}
