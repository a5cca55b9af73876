use std::borrow::Cow;

/// Convert string to camel case.
///
/// A single leading `_` is dropped, to be more friendly with the `_var`
/// convention for unused variables. The conversion is idempotent: its output
/// never contains `_`, so converting it again returns it unchanged.
pub fn to_camel_case(s: &str) -> Cow<'_, str> {
    let s = s.strip_prefix('_').unwrap_or(s);
    if !s.contains('_') {
        return Cow::Borrowed(s);
    }

    let mut parts = s.split('_');
    let mut dest = String::with_capacity(s.len());
    dest.extend(parts.next());
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            dest.extend(first.to_uppercase());
            dest.push_str(chars.as_str());
        }
    }

    Cow::Owned(dest)
}
