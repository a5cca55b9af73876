#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// These are required by the code generated via the declarative macros.
#[doc(hidden)]
pub use static_assertions as sa;

#[doc(hidden)]
#[macro_use]
pub mod macros;
pub mod arguments;
mod ast;
mod error;
pub mod field;
pub mod logging;
pub mod permission;
pub mod resolver;
pub(crate) mod schema;
mod types;
mod util;

pub use crate::{
    arguments::get_arguments_from_resolver,
    ast::Type,
    error::{FieldError, FieldResult},
    field::{
        BoundResolver, Declaration, FieldBuilder, FieldOptions, check_return_annotation, field,
    },
    logging::error_logger,
    permission::{BasePermission, Permission},
    resolver::{Parameter, Resolver, Signature},
    schema::{
        meta::{ArgumentDefinition, FederationFieldParams, FieldDefinition, Phase},
        registry::{FieldId, Registry},
    },
    types::{base::GraphQLTypeRef, scalars::ID},
    util::to_camel_case,
};

#[cfg(test)]
mod tests;
