//! Resolvers and the signatures they are reflected through.

use std::{any::Any, fmt, sync::Arc};

use arcstr::ArcStr;

use crate::ast::Type;

/// Declared parameter of a [`Signature`].
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub param_type: Option<Type>,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub default_value: Option<serde_json::Value>,
}

impl Parameter {
    /// Builds a new untyped [`Parameter`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            param_type: None,
            description: None,
            default_value: None,
        }
    }

    /// Sets the declared [`Type`] of this [`Parameter`].
    ///
    /// Overwrites any previously set type.
    #[must_use]
    pub fn of_type(mut self, ty: Type) -> Self {
        self.param_type = Some(ty);
        self
    }

    /// Sets the `description` of this [`Parameter`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value of this [`Parameter`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: serde_json::Value) -> Self {
        self.default_value = Some(val);
        self
    }
}

/// Declared signature of a resolver: its identifier, its parameters in
/// declaration order and, optionally, its return [`Type`].
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    name: ArcStr,
    parameters: Vec<Parameter>,
    return_type: Option<Type>,
}

impl Signature {
    /// Builds a new [`Signature`] of a resolver declared as `name`, without
    /// parameters and without a declared return type.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Appends a `parameter` to this [`Signature`].
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the declared return [`Type`] of this [`Signature`].
    #[must_use]
    pub fn returns(mut self, ty: Type) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Identifier the resolver is declared under, as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters of the resolver, in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Declared return [`Type`], if any.
    pub fn return_type(&self) -> Option<&Type> {
        self.return_type.as_ref()
    }
}

/// A function computing a field's value, along with its [`Signature`].
///
/// The function itself is type-erased, so resolvers of different shapes may
/// be registered side by side. Cloning a [`Resolver`] is cheap and keeps its
/// identity, see [`Resolver::ptr_eq()`].
#[derive(Clone)]
pub struct Resolver {
    func: Arc<dyn Any + Send + Sync>,
    signature: Arc<Signature>,
}

impl Resolver {
    /// Wraps the given `func` declared with the given `signature`.
    pub fn new<F>(func: F, signature: Signature) -> Self
    where
        F: Any + Send + Sync,
    {
        Self {
            func: Arc::new(func),
            signature: Arc::new(signature),
        }
    }

    /// Returns the wrapped function, if it's an `F`.
    pub fn func<F: Any>(&self) -> Option<&F> {
        self.func.downcast_ref()
    }

    /// Identifier this [`Resolver`] is declared under.
    pub fn name(&self) -> &str {
        self.signature.name()
    }

    /// [`Signature`] of this [`Resolver`].
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Indicates whether both [`Resolver`]s are the same declaration.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.signature, &other.signature)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

crate::sa::assert_impl_all!(Resolver: Send, Sync);
