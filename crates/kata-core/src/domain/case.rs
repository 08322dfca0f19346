//! Kebab-case conversions used to derive defaults from a kata name.

/// Convert `roman-numerals` into `romanNumerals`.
///
/// Only a hyphen directly followed by a lowercase ASCII letter is folded;
/// any other hyphen (trailing, doubled, or before a digit) is kept as-is.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.next_if(|n| n.is_ascii_lowercase()) {
                out.push(next.to_ascii_uppercase());
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Convert `roman-numerals` into `Roman Numerals`.
///
/// Every hyphen-separated segment keeps its position, including empty ones,
/// so `a--b` becomes `A  B`.
pub fn to_title_case(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
