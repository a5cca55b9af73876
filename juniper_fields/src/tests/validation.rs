use arcstr::literal;

use crate::{
    FieldError, FieldOptions, Registry, Resolver, Signature, check_return_annotation, field,
};

#[test]
fn rejects_resolver_without_return_type() {
    let mut registry = Registry::new();
    let bound = field(
        &mut registry,
        Some(resolver! {
            fn delete_user(id: i32) {
                let _ = id;
            }
        }),
        FieldOptions::new(),
    )
    .unwrap()
    .into_bound()
    .unwrap();

    assert_eq!(
        check_return_annotation(bound.definition(&registry)),
        Err(FieldError::MissingReturnAnnotation(literal!("deleteUser"))),
    );
}

#[test]
fn reports_explicit_name() {
    let mut registry = Registry::new();
    let declaration = field(
        &mut registry,
        Some(Resolver::new((), Signature::new("noop"))),
        FieldOptions::new().name("doNothing"),
    )
    .unwrap();

    assert_eq!(
        check_return_annotation(&registry[declaration.id()]),
        Err(FieldError::MissingReturnAnnotation(literal!("doNothing"))),
    );
}

#[test]
fn accepts_resolver_with_return_type() {
    let mut registry = Registry::new();
    let bound = field(
        &mut registry,
        Some(resolver! {
            fn user_count() -> i32 {
                0
            }
        }),
        FieldOptions::new(),
    )
    .unwrap()
    .into_bound()
    .unwrap();

    assert_eq!(check_return_annotation(bound.definition(&registry)), Ok(()));
}

#[test]
fn accepts_field_without_resolver() {
    let mut registry = Registry::new();
    let declaration = field(&mut registry, None, FieldOptions::new().name("age")).unwrap();

    assert_eq!(check_return_annotation(&registry[declaration.id()]), Ok(()));
}
