use crate::ast::Type;

/// Rust type exposed through a GraphQL schema under a known [`Type`].
///
/// This is what a resolver's parameter and return types are reflected
/// through: the [`resolver!`] macro asks every parameter type and the return
/// type for their [`GraphQLTypeRef::type_ref`] when building the resolver's
/// [`Signature`].
///
/// Plain Rust types map to non-null GraphQL types; wrapping into an [`Option`]
/// makes them nullable, while [`Vec`] and slices turn them into lists.
///
/// ```rust
/// use arcstr::literal;
/// use juniper_fields::{GraphQLTypeRef, Type};
///
/// struct User;
///
/// impl GraphQLTypeRef for User {
///     fn type_ref() -> Type {
///         Type::NonNullNamed(literal!("User"))
///     }
/// }
///
/// assert_eq!(<Option<Vec<User>>>::type_ref().to_string(), "[User!]");
/// ```
///
/// [`resolver!`]: crate::resolver!
/// [`Signature`]: crate::Signature
pub trait GraphQLTypeRef {
    /// Returns the [`Type`] this Rust type is represented by.
    fn type_ref() -> Type;
}
