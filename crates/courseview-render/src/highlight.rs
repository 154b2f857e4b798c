//! Syntax highlighting.
//!
//! A full-featured engine can be plugged in through [`HighlightEngine`]
//! (the `syntect` feature ships one); when none is available, or the engine
//! does not know a language, a small regex tokenizer covers Python and
//! Bash/shell dialects. Everything else degrades to escaped plain text, so
//! highlighting never fails a render.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{Segment, ViewerDoc};
use crate::escape::escape_html;

/// Narrow contract over a host-provided highlighting engine.
pub trait HighlightEngine: Send + Sync {
    /// Whether the engine recognizes this language tag.
    fn supports(&self, language: &str) -> bool;
    /// Highlight to HTML. `None` defers to the regex fallback.
    fn highlight(&self, code: &str, language: &str) -> Option<String>;
}

/// Dispatches each code block to the engine when possible, else to the
/// regex fallback.
pub struct Highlighter {
    engine: Option<Box<dyn HighlightEngine>>,
}

impl Highlighter {
    /// The preferred configuration: a full engine when one is compiled in,
    /// the fallback otherwise.
    pub fn new() -> Self {
        #[cfg(feature = "syntect")]
        {
            Self::with_engine(Box::new(SyntectEngine::new()))
        }
        #[cfg(not(feature = "syntect"))]
        {
            Self::fallback_only()
        }
    }

    pub fn fallback_only() -> Self {
        Self { engine: None }
    }

    pub fn with_engine(engine: Box<dyn HighlightEngine>) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    pub fn engine_available(&self) -> bool {
        self.engine.is_some()
    }

    /// Highlight one code block to inner HTML.
    ///
    /// A tagged block the engine does not support goes to the fallback; an
    /// untagged block goes to the engine when present (which may still
    /// decline), else comes back escaped verbatim.
    pub fn highlight_block(&self, code: &str, language: &str) -> String {
        if let Some(engine) = &self.engine {
            if !language.is_empty() && !engine.supports(language) {
                return simple_highlight(code, language);
            }
            if let Some(html) = engine.highlight(code, language) {
                return html;
            }
        }
        simple_highlight(code, language)
    }

    /// Claim every remaining code segment of a document, wrapping each block
    /// in `<pre><code class="language-…">` with highlighted inner HTML.
    pub fn highlight_doc(&self, doc: ViewerDoc) -> ViewerDoc {
        let segments = doc
            .segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Code { language, text } => {
                    let class = if language.is_empty() {
                        String::new()
                    } else {
                        format!(" class=\"language-{language}\"")
                    };
                    let inner = self.highlight_block(&text, &language);
                    Segment::Html(format!("<pre><code{class}>{inner}</code></pre>"))
                }
                html => html,
            })
            .collect();
        ViewerDoc::new(segments)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Regex fallback
// ============================================================================

/// Fallback tokenizer: Python and Bash/shell only, everything else escaped.
pub fn simple_highlight(code: &str, language: &str) -> String {
    match language.to_lowercase().as_str() {
        "py" | "python" => apply_pattern(&PYTHON_PATTERN, PYTHON_CLASSES, code),
        "bash" | "sh" | "shell" | "zsh" => apply_pattern(&BASH_PATTERN, BASH_CLASSES, code),
        _ => escape_html(code),
    }
}

static PYTHON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)(#.*$)|("[^"]*"|'[^']*')|(\b\d+(?:\.\d+)?\b)|(\b(?:def|class|return|if|elif|else|for|while|break|continue|try|except|finally|with|as|import|from|pass|raise|yield|lambda|True|False|None|and|or|not|in|is)\b)"#,
    )
    .expect("python pattern compiles")
});

const PYTHON_CLASSES: &[&str] = &["tok-com", "tok-str", "tok-num", "tok-kw"];

static BASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)(#.*$)|("[^"]*"|'[^']*')|(\$\{[^}]+\}|\$[A-Za-z_][A-Za-z0-9_]*)|(\b\d+\b)|(\b(?:if|then|fi|for|in|do|done|while|case|esac|function|return|exit|export|local|set|unset|alias|source|readonly|shift|break|continue)\b)"#,
    )
    .expect("bash pattern compiles")
});

const BASH_CLASSES: &[&str] = &["tok-com", "tok-str", "tok-var", "tok-num", "tok-kw"];

/// Walk the matches, wrapping the first participating group of each in its
/// token span and escaping everything in between.
fn apply_pattern(pattern: &Regex, classes: &[&str], code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut last = 0;
    for caps in pattern.captures_iter(code) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&escape_html(&code[last..whole.start()]));

        let mut emitted = false;
        for (idx, class) in classes.iter().enumerate() {
            if let Some(group) = caps.get(idx + 1) {
                out.push_str(&format!(
                    "<span class=\"{class}\">{}</span>",
                    escape_html(group.as_str())
                ));
                emitted = true;
                break;
            }
        }
        if !emitted {
            out.push_str(&escape_html(whole.as_str()));
        }
        last = whole.end();
    }
    out.push_str(&escape_html(&code[last..]));
    out
}

// ============================================================================
// Syntect engine (feature-gated)
// ============================================================================

/// Full-featured engine backed by syntect's bundled syntax definitions.
#[cfg(feature = "syntect")]
pub struct SyntectEngine {
    syntaxes: syntect::parsing::SyntaxSet,
}

#[cfg(feature = "syntect")]
impl SyntectEngine {
    pub fn new() -> Self {
        Self {
            syntaxes: syntect::parsing::SyntaxSet::load_defaults_newlines(),
        }
    }
}

#[cfg(feature = "syntect")]
impl Default for SyntectEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "syntect")]
impl HighlightEngine for SyntectEngine {
    fn supports(&self, language: &str) -> bool {
        self.syntaxes.find_syntax_by_token(language).is_some()
    }

    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        use syntect::html::{ClassStyle, ClassedHTMLGenerator};
        use syntect::util::LinesWithEndings;

        let syntax = self.syntaxes.find_syntax_by_token(language)?;
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            if let Err(error) = generator.parse_html_for_line_which_includes_newline(line) {
                log::warn!("syntect failed on {language} block: {error}");
                return None;
            }
        }
        Some(generator.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── python fallback ────────────────────────────────────────────────

    #[test]
    fn test_python_keywords_and_strings() {
        let html = simple_highlight("def greet():\n    return 'hi'", "python");
        assert!(html.contains("<span class=\"tok-kw\">def</span>"));
        assert!(html.contains("<span class=\"tok-kw\">return</span>"));
        assert!(html.contains("<span class=\"tok-str\">'hi'</span>"));
    }

    #[test]
    fn test_python_comment_spans_to_line_end() {
        let html = simple_highlight("x = 1  # the answer\ny = 2", "py");
        assert!(html.contains("<span class=\"tok-com\"># the answer</span>"));
        assert!(!html.contains("y = 2</span>"));
    }

    #[test]
    fn test_python_numbers() {
        let html = simple_highlight("pi = 3.14", "python");
        assert!(html.contains("<span class=\"tok-num\">3.14</span>"));
    }

    #[test]
    fn test_python_surrounding_text_escaped() {
        let html = simple_highlight("if a < b:", "python");
        assert!(html.contains("a &lt; b"));
    }

    // ── bash fallback ──────────────────────────────────────────────────

    #[test]
    fn test_bash_variable_expansion() {
        let html = simple_highlight("echo ${HOME} $USER", "bash");
        assert!(html.contains("<span class=\"tok-var\">${HOME}</span>"));
        assert!(html.contains("<span class=\"tok-var\">$USER</span>"));
    }

    #[test]
    fn test_bash_keywords() {
        let html = simple_highlight("if true; then\n  exit 1\nfi", "sh");
        assert!(html.contains("<span class=\"tok-kw\">if</span>"));
        assert!(html.contains("<span class=\"tok-kw\">exit</span>"));
        assert!(html.contains("<span class=\"tok-num\">1</span>"));
    }

    // ── degradation ────────────────────────────────────────────────────

    #[test]
    fn test_unknown_language_escaped_plain() {
        assert_eq!(
            simple_highlight("<b>1</b>", "cobol"),
            "&lt;b&gt;1&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_language_escaped_plain() {
        assert_eq!(simple_highlight("a < b", ""), "a &lt; b");
    }

    #[test]
    fn test_malformed_input_never_panics() {
        // Unterminated quote, stray hash, invalid-looking bytes.
        let html = simple_highlight("echo \"unterminated\n# tail", "bash");
        assert!(html.contains("tok-com"));
        let _ = simple_highlight("'", "python");
    }

    // ── engine dispatch ────────────────────────────────────────────────

    struct UpperEngine;

    impl HighlightEngine for UpperEngine {
        fn supports(&self, language: &str) -> bool {
            language == "rust"
        }
        fn highlight(&self, code: &str, _language: &str) -> Option<String> {
            Some(code.to_uppercase())
        }
    }

    #[test]
    fn test_engine_used_when_supported() {
        let highlighter = Highlighter::with_engine(Box::new(UpperEngine));
        assert_eq!(highlighter.highlight_block("fn main", "rust"), "FN MAIN");
    }

    #[test]
    fn test_unsupported_language_falls_back() {
        let highlighter = Highlighter::with_engine(Box::new(UpperEngine));
        let html = highlighter.highlight_block("def x(): pass", "python");
        assert!(html.contains("tok-kw"));
    }

    #[test]
    fn test_highlight_doc_claims_code_segments() {
        let highlighter = Highlighter::fallback_only();
        let doc = highlighter.highlight_doc(ViewerDoc::code_block("python", "import os"));
        let Segment::Html(html) = &doc.segments[0] else {
            panic!("expected html segment");
        };
        assert!(html.starts_with("<pre><code class=\"language-python\">"));
        assert!(html.contains("<span class=\"tok-kw\">import</span>"));
    }
}
