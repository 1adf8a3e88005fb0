//! File-safe names for output artifacts.

/// Characters stripped from names and extensions before they become file
/// names.
const FORBIDDEN: &[char] = &[
    '!', '"', '§', '$', '%', '&', '/', '(', ')', '=', '?', '\\', ':', ',', '\'', '*', '+', '~', ';',
];

/// Join `name` and `extension` into a file name, stripping characters that
/// are unsafe or awkward in file names from both parts.
pub fn sanitize(name: &str, extension: &str) -> String {
    format!("{}.{}", strip(name), strip(extension))
}

fn strip(s: &str) -> String {
    s.chars().filter(|c| !FORBIDDEN.contains(c)).collect()
}
