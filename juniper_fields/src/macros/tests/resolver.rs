use arcstr::literal;
use pretty_assertions::assert_eq;

use crate::{GraphQLTypeRef, ID, Parameter, Signature, ast::Type};

struct User;

impl GraphQLTypeRef for User {
    fn type_ref() -> Type {
        Type::NonNullNamed(literal!("User"))
    }
}

#[test]
fn reflects_parameters_and_return_type() {
    let resolver = resolver! {
        fn get_user_profile(user_id: ID, with_friends: Option<bool>) -> Option<User> {
            let _ = (user_id, with_friends);
            None
        }
    };

    assert_eq!(
        *resolver.signature(),
        Signature::new("get_user_profile")
            .parameter(Parameter::new("user_id").of_type(Type::NonNullNamed(literal!("ID"))))
            .parameter(Parameter::new("with_friends").of_type(Type::Named(literal!("Boolean"))))
            .returns(Type::Named(literal!("User"))),
    );
}

#[test]
fn no_parameters() {
    let resolver = resolver! {
        fn hello() -> &'static str {
            "world"
        }
    };

    assert!(resolver.signature().parameters().is_empty());
    assert_eq!(
        resolver.signature().return_type(),
        Some(&Type::NonNullNamed(literal!("String"))),
    );

    let func = resolver.func::<fn() -> &'static str>().unwrap();
    assert_eq!(func(), "world");
}

#[test]
fn trailing_comma_and_attributes() {
    let resolver = resolver! {
        /// Sums up numbers.
        #[inline]
        fn total(
            values: Vec<i32>,
            offset: i32,
        ) -> i32 {
            values.iter().sum::<i32>() + offset
        }
    };

    assert_eq!(
        resolver.signature().parameters()[0].param_type,
        Some(Type::NonNullList(Box::new(Type::NonNullNamed(literal!("Int"))))),
    );

    let func = resolver.func::<fn(Vec<i32>, i32) -> i32>().unwrap();
    assert_eq!(func(vec![1, 2, 3], 4), 10);
}

#[test]
fn without_return_type() {
    let resolver = resolver! {
        fn touch(id: ID) {
            let _ = id;
        }
    };

    assert_eq!(resolver.name(), "touch");
    assert_eq!(resolver.signature().return_type(), None);
    assert!(resolver.func::<fn(ID)>().is_some());
}
