//! Command and group name validation.

use crate::error::Error;

/// Validates a candidate command or group name.
///
/// The grammar: an ASCII letter followed by letters, digits, `-` and `_`.
/// Command names may additionally contain `:` for namespacing
/// (`cache:clear`); group names may not, which is what the `is_group`
/// toggle controls. Empty and whitespace-only names always fail.
pub fn validate_name(name: &str, is_group: bool) -> Result<(), Error> {
    let invalid = |reason: String| Error::InvalidName {
        name: name.to_string(),
        is_group,
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("name must not be empty".to_string()));
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err(invalid("must start with a letter".to_string())),
    }
    for c in chars {
        let allowed =
            c.is_ascii_alphanumeric() || c == '-' || c == '_' || (c == ':' && !is_group);
        if !allowed {
            return Err(invalid(format!("character '{c}' is not allowed")));
        }
    }
    Ok(())
}
