//! Reporting of errors through [`tracing`].

use std::error::Error;

use tracing::error;

/// Target every [`error_logger()`] event is emitted under.
pub const EXECUTION_TARGET: &str = "juniper_fields::execution";

/// Emits an `ERROR` level event for each of the given `errors`.
///
/// Events are emitted under the [`EXECUTION_TARGET`], with the error as the
/// message and its [`Error::source()`], if any, as the `source` field.
pub fn error_logger<E: Error>(errors: &[E]) {
    for e in errors {
        match e.source() {
            Some(source) => error!(target: EXECUTION_TARGET, source = %source, "{e}"),
            None => error!(target: EXECUTION_TARGET, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use arcstr::literal;
    use derive_more::with_trait::{Display, Error};

    use super::error_logger;
    use crate::{error::FieldError, tests::capture_logs};

    #[derive(Debug, Display, Error)]
    #[display("failed to load schema definitions")]
    struct LoadError {
        source: io::Error,
    }

    #[test]
    fn logs_each_error() {
        let logged = capture_logs(|| {
            error_logger(&[
                FieldError::MissingReturnAnnotation(literal!("userName")),
                FieldError::MissingReturnAnnotation(literal!("friends")),
            ]);
        });

        let lines = logged.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2, "unexpected output: {logged}");
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("juniper_fields::execution"));
        assert!(lines[0].contains(
            "Return annotation missing for field \"userName\", did you forget to add it?",
        ));
        assert!(!lines[0].contains("source="));
        assert!(lines[1].contains("\"friends\""));
    }

    #[test]
    fn attaches_error_source() {
        let logged = capture_logs(|| {
            error_logger(&[LoadError {
                source: io::Error::new(io::ErrorKind::NotFound, "schema.graphql not found"),
            }]);
        });

        let lines = logged.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1, "unexpected output: {logged}");
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("failed to load schema definitions"));
        assert!(lines[0].contains("source=schema.graphql not found"));
    }

    #[test]
    fn logs_nothing_without_errors() {
        let logged = capture_logs(|| error_logger::<FieldError>(&[]));

        assert_eq!(logged, "");
    }
}
