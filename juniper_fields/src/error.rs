use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};
use itertools::Itertools as _;

/// Error raised while declaring a field.
///
/// Declaring fields happens once, when a schema is assembled, so none of these
/// are recoverable: they abort assembling the schema and carry the name of the
/// offending field for diagnosis.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum FieldError {
    /// The resolver of a field doesn't declare its return type, so the type of
    /// the field can't be inferred.
    #[display("Return annotation missing for field \"{_0}\", did you forget to add it?")]
    MissingReturnAnnotation(#[error(not(source))] ArcStr),

    /// Some parameters of the resolver of a field don't declare their types,
    /// so the field's arguments can't be inferred.
    #[display(
        "Missing annotation for arguments \"{}\" in field \"{field_name}\", \
         did you forget to add it?",
        arguments.iter().join(", ")
    )]
    MissingArgumentsAnnotations {
        /// Name of the field the resolver is declared for.
        field_name: ArcStr,
        /// Names of the untyped parameters, sorted.
        arguments: Vec<ArcStr>,
    },
}

/// Result of a field declaration step.
pub type FieldResult<T> = Result<T, FieldError>;
