//! Placeholder substitution for the prompt and response templates.

/// Placeholder replaced by the inbound message text in the prompt template.
pub const MESSAGE_PLACEHOLDER: &str = "{message}";

/// Placeholder replaced by the completion text in the response template.
pub const RESPONSE_PLACEHOLDER: &str = "{response}";

/// Replaces the first occurrence of `placeholder` in `template` with `value`.
/// Templates are expected to carry exactly one placeholder; any further
/// occurrences are left as-is.
pub fn substitute(template: &str, placeholder: &str, value: &str) -> String {
    template.replacen(placeholder, value, 1)
}
