//! File-name helpers shared by the create flow.

/// Split a requested file name into base and extension.
///
/// The extension keeps its leading dot. A name without a dot, or with only a
/// leading dot (".gitignore"), has an empty extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Normalize a user-supplied extension, prefixing the dot when omitted.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
