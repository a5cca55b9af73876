//! Access-control hooks attached to fields.

use std::{any::Any, fmt, sync::Arc};

/// Access-control policy guarding a field.
///
/// Policies are stored on a [`FieldDefinition`] verbatim and in order; they're
/// invoked by whatever executes the schema, never while fields are being
/// declared.
///
/// [`FieldDefinition`]: crate::FieldDefinition
pub trait BasePermission: fmt::Debug + Send + Sync {
    /// Message to report when [`BasePermission::has_permission()`] denies
    /// access.
    fn message(&self) -> Option<&str> {
        None
    }

    /// Decides whether the field may be resolved on the given `source` value
    /// within the given `context`.
    fn has_permission(&self, source: &dyn Any, context: &dyn Any) -> bool;
}

crate::sa::assert_obj_safe!(BasePermission);

/// Shared reference to a [`BasePermission`] policy.
pub type Permission = Arc<dyn BasePermission>;
