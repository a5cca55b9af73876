use arcstr::literal;
use derive_more::with_trait::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::{ast::Type, types::base::GraphQLTypeRef};

/// An ID as defined by the GraphQL specification
///
/// Represented as a string, but can be converted _to_ from an integer as well.
/// Serializes as a plain string, so it may serve as a parameter's default
/// value.
#[derive(Clone, Debug, Deref, Deserialize, Display, Eq, From, Hash, Into, PartialEq, Serialize)]
#[deref(forward)]
#[from(Box<str>, String)]
#[into(Box<str>, String)]
pub struct ID(Box<str>);

impl ID {
    /// Construct a new [`ID`] from anything implementing [`Into`]`<`[`String`]`>`.
    #[must_use]
    pub fn new<S: Into<String>>(value: S) -> Self {
        ID(value.into().into())
    }
}

impl From<i32> for ID {
    fn from(value: i32) -> Self {
        Self::new(value.to_string())
    }
}

/// Implements [`GraphQLTypeRef`] for built-in scalars as non-null named types.
macro_rules! impl_builtin_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl GraphQLTypeRef for $ty {
            fn type_ref() -> Type {
                Type::NonNullNamed(literal!($name))
            }
        }
    )*};
}

impl_builtin_scalar! {
    i32 => "Int",
    f64 => "Float",
    bool => "Boolean",
    String => "String",
    str => "String",
    ID => "ID",
}

#[cfg(test)]
mod tests {
    use super::ID;
    use crate::types::base::GraphQLTypeRef;

    #[test]
    fn from_string() {
        let actual = ID::from(String::from("foo"));
        let expected = ID("foo".into());
        assert_eq!(actual, expected);
    }

    #[test]
    fn new_and_from_int() {
        let actual = ID::new("foo");
        let expected = ID("foo".into());
        assert_eq!(actual, expected);
        assert_eq!(ID::from(42), ID::new("42"));
    }

    #[test]
    fn derefs_to_str() {
        let id = ID("foo".into());
        assert_eq!(id.len(), 3);
    }

    #[test]
    fn displays_verbatim() {
        let id = ID("foo".into());
        assert_eq!(id.to_string(), "foo");
    }

    #[test]
    fn usable_as_default_value() {
        let value = serde_json::to_value(ID::from(7)).unwrap();
        assert_eq!(value, serde_json::json!("7"));

        let id: ID = serde_json::from_value(serde_json::json!("user-7")).unwrap();
        assert_eq!(id, ID::new("user-7"));
    }

    #[test]
    fn builtin_scalars_are_non_null() {
        assert_eq!(i32::type_ref().to_string(), "Int!");
        assert_eq!(f64::type_ref().to_string(), "Float!");
        assert_eq!(bool::type_ref().to_string(), "Boolean!");
        assert_eq!(String::type_ref().to_string(), "String!");
        assert_eq!(str::type_ref().to_string(), "String!");
        assert_eq!(ID::type_ref().to_string(), "ID!");
    }
}
