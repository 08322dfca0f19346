//! Enabling the DOM entry point in the project's `index.html`.
//!
//! The skeleton ships the script tag commented out. Rather than parse HTML,
//! we look for that exact comment and strip the comment delimiters.

/// The commented-out script tag as it appears in the skeleton.
pub const COMMENTED_SCRIPT_TAG: &str =
    r#"<!-- <script type="module" src="/src/main.ts"></script> -->"#;

/// The script tag once enabled.
pub const SCRIPT_TAG: &str = r#"<script type="module" src="/src/main.ts"></script>"#;

/// Uncomment the first occurrence of the marker.
///
/// Returns `None` when the marker is absent, including when the tag has
/// already been enabled, so the caller knows not to rewrite the file.
pub fn enable_script_tag(html: &str) -> Option<String> {
    if html.contains(COMMENTED_SCRIPT_TAG) {
        Some(html.replacen(COMMENTED_SCRIPT_TAG, SCRIPT_TAG, 1))
    } else {
        None
    }
}
