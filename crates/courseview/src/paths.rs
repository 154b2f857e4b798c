//! Path string normalization and file-type classification.
//!
//! Raw path lists arrive as newline-delimited text with `./` prefixes and
//! stray whitespace; everything downstream works on normalized paths.

/// Normalize one raw path line: strip a leading `./` and trim whitespace.
pub fn normalize_path(line: &str) -> String {
    let trimmed = line.trim();
    trimmed.strip_prefix("./").unwrap_or(trimmed).to_string()
}

/// Whether a path points at a Markdown document (`.md`, case-insensitive).
pub fn is_markdown(path: &str) -> bool {
    path.to_lowercase().ends_with(".md")
}

/// Infer a highlighting language from a path's extension.
///
/// Returns `None` for unrecognized or missing extensions; the caller renders
/// such files as untagged code.
pub fn language_for(path: &str) -> Option<&'static str> {
    let lower = path.to_lowercase();
    if lower.ends_with(".py") {
        Some("python")
    } else if lower.ends_with(".js") {
        Some("javascript")
    } else if lower.ends_with(".ts") {
        Some("typescript")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── normalize_path ─────────────────────────────────────────────────

    #[test]
    fn test_normalize_strips_dot_slash() {
        assert_eq!(normalize_path("./sessions/001/readme.md"), "sessions/001/readme.md");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_path("  sessions/001/readme.md \n"), "sessions/001/readme.md");
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize_path("a/b/c.py"), "a/b/c.py");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_path("   "), "");
    }

    // ── is_markdown ────────────────────────────────────────────────────

    #[test]
    fn test_is_markdown_lowercase() {
        assert!(is_markdown("docs/intro.md"));
    }

    #[test]
    fn test_is_markdown_uppercase() {
        assert!(is_markdown("README.MD"));
    }

    #[test]
    fn test_is_markdown_rejects_code() {
        assert!(!is_markdown("src/main.py"));
    }

    // ── language_for ───────────────────────────────────────────────────

    #[test]
    fn test_language_python() {
        assert_eq!(language_for("x/y/script.py"), Some("python"));
    }

    #[test]
    fn test_language_javascript() {
        assert_eq!(language_for("app/main.js"), Some("javascript"));
    }

    #[test]
    fn test_language_typescript() {
        assert_eq!(language_for("app/main.TS"), Some("typescript"));
    }

    #[test]
    fn test_language_unknown() {
        assert_eq!(language_for("notes.txt"), None);
        assert_eq!(language_for("Makefile"), None);
    }
}
