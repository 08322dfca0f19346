//! Naming rules for kata names and generated function names.
//!
//! Both predicates are total: any input string yields a `bool`, nothing
//! panics and nothing is trimmed or normalised first.

/// `true` if `name` is a lowercase letter followed by lowercase letters,
/// digits, or hyphens.
pub fn is_valid_kata_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }
        _ => false,
    }
}

/// `true` if `name` is a JavaScript identifier in the ASCII subset:
/// a letter, `_` or `$`, followed by letters, digits, `_` or `$`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {
            chars.all(|c| is_identifier_start(c) || c.is_ascii_digit())
        }
        _ => false,
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}
