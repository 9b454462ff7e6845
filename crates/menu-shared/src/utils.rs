//! Utility functions

/// Escapes text for use inside markup attribute values and element content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Appends an optional custom class to a base class, space separated. The
/// custom class is taken as given.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}
