//! Filetype pass-through decision
//!
//! Only originals whose extension is on the whitelist are routed through
//! the proxy. Anything else (SVG, PDF, extensionless paths) is returned
//! untouched by the builder.

use crate::constants::DEFAULT_FILETYPES;

/// The default whitelist as owned, lowercase strings
pub fn default_filetypes() -> Vec<String> {
    DEFAULT_FILETYPES.iter().map(|s| s.to_string()).collect()
}

/// Extension of the last path segment, ignoring query string and fragment
pub fn extension_of(original: &str) -> Option<&str> {
    let end = original.find(['?', '#']).unwrap_or(original.len());
    let path = &original[..end];
    let file_name = path.rsplit('/').next().unwrap_or(path);

    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Whether `original` has an extension on the whitelist (ASCII case-insensitive)
pub fn is_proxyable<S: AsRef<str>>(original: &str, filetypes: &[S]) -> bool {
    match extension_of(original) {
        Some(ext) => filetypes
            .iter()
            .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(ext)),
        None => false,
    }
}
