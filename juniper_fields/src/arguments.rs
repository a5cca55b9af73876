//! Extraction of [`ArgumentDefinition`]s from a resolver's [`Signature`].
//!
//! [`Signature`]: crate::Signature

use arcstr::ArcStr;
use tracing::trace;

use crate::{
    error::{FieldError, FieldResult},
    resolver::Resolver,
    schema::meta::ArgumentDefinition,
    util::to_camel_case,
};

/// Parameters bound by whatever executes the resolver, rather than being
/// provided as GraphQL arguments.
const RESERVED_PARAMETERS: [&str; 3] = ["self", "root", "info"];

/// Builds the [`ArgumentDefinition`]s of a field from the parameters of its
/// `resolver`, in declaration order.
///
/// `field_name` only labels the error raised when some parameters don't
/// declare their types. The `resolver` is left untouched.
///
/// # Errors
///
/// [`FieldError::MissingArgumentsAnnotations`] listing every untyped
/// parameter (sorted by name).
pub fn get_arguments_from_resolver(
    resolver: &Resolver,
    field_name: &str,
) -> FieldResult<Vec<ArgumentDefinition>> {
    let parameters = resolver
        .signature()
        .parameters()
        .iter()
        .filter(|p| !RESERVED_PARAMETERS.contains(&p.name.as_str()));

    let mut missing = Vec::new();
    let mut arguments = Vec::new();
    for param in parameters {
        let Some(arg_type) = &param.param_type else {
            missing.push(param.name.clone());
            continue;
        };

        let mut argument = ArgumentDefinition::new(
            ArcStr::from(to_camel_case(&param.name).as_ref()),
            param.name.clone(),
            arg_type.clone(),
        );
        argument.description = param.description.clone();
        argument.default_value = param.default_value.clone();
        arguments.push(argument);
    }

    if !missing.is_empty() {
        missing.sort();
        return Err(FieldError::MissingArgumentsAnnotations {
            field_name: field_name.into(),
            arguments: missing,
        });
    }

    trace!(
        field = field_name,
        resolver = resolver.name(),
        count = arguments.len(),
        "extracted field arguments"
    );

    Ok(arguments)
}
