//! Display-name formatting for the docs tree.
//!
//! Docs file names use `snake_case` on disk but are shown as spaced,
//! upper-cased labels; the extension (when present on a file) is kept
//! verbatim so the document type stays visible.

use crate::tree::NodeKind;

/// Format a tree-node name for the docs sidebar.
///
/// Runs of underscores in the base name collapse to a single space and the
/// base is upper-cased; a file's extension is reattached unchanged.
///
/// ```
/// use courseview::label::format_docs_label;
/// use courseview::tree::NodeKind;
///
/// assert_eq!(format_docs_label("intro_to_agents.md", NodeKind::File), "INTRO TO AGENTS.md");
/// assert_eq!(format_docs_label("02_setup", NodeKind::Directory), "02 SETUP");
/// ```
pub fn format_docs_label(name: &str, kind: NodeKind) -> String {
    let dot_index = match kind {
        NodeKind::File => name.rfind('.'),
        NodeKind::Directory => None,
    };
    let (base, ext) = match dot_index {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    };

    let mut normalized = String::with_capacity(base.len());
    let mut in_run = false;
    for ch in base.chars() {
        if ch == '_' {
            if !in_run {
                normalized.push(' ');
                in_run = true;
            }
        } else {
            normalized.push(ch);
            in_run = false;
        }
    }

    format!("{}{}", normalized.to_uppercase(), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_with_extension() {
        assert_eq!(
            format_docs_label("intro_to_agents.md", NodeKind::File),
            "INTRO TO AGENTS.md"
        );
    }

    #[test]
    fn test_directory_keeps_dots() {
        // Directories never get extension handling, even with a dot in the name.
        assert_eq!(
            format_docs_label("v1.2_notes", NodeKind::Directory),
            "V1.2 NOTES"
        );
    }

    #[test]
    fn test_directory_plain() {
        assert_eq!(format_docs_label("02_setup", NodeKind::Directory), "02 SETUP");
    }

    #[test]
    fn test_underscore_runs_collapse() {
        assert_eq!(
            format_docs_label("a__b___c.md", NodeKind::File),
            "A B C.md"
        );
    }

    #[test]
    fn test_file_without_extension() {
        assert_eq!(format_docs_label("makefile_notes", NodeKind::File), "MAKEFILE NOTES");
    }

    #[test]
    fn test_extension_case_preserved() {
        assert_eq!(format_docs_label("summary.MD", NodeKind::File), "SUMMARY.MD");
    }
}
