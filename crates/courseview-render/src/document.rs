//! Segmented viewer documents.
//!
//! The pipeline stages (markdown conversion, diagram transform, syntax
//! highlighting) hand each other a [`ViewerDoc`] instead of mutating a live
//! DOM: finished HTML lives in [`Segment::Html`] pieces, and fenced code
//! blocks stay as raw [`Segment::Code`] pieces until a later stage claims
//! them. Joining the segments yields the final viewer markup.

use crate::escape::escape_html;

/// One piece of a partially rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Finished HTML, emitted as-is.
    Html(String),
    /// A fenced code block not yet transformed or highlighted.
    Code {
        /// Language tag from the fence (first word), empty when untagged.
        language: String,
        text: String,
    },
}

/// A document flowing through the content pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerDoc {
    pub segments: Vec<Segment>,
}

impl ViewerDoc {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// A document holding a single untransformed code block.
    pub fn code_block(language: &str, text: &str) -> Self {
        Self {
            segments: vec![Segment::Code {
                language: language.to_string(),
                text: text.to_string(),
            }],
        }
    }

    /// Whether any code block tagged with `language` remains.
    pub fn has_code_language(&self, language: &str) -> bool {
        self.segments.iter().any(|segment| {
            matches!(segment, Segment::Code { language: lang, .. } if lang == language)
        })
    }

    /// Join everything into final markup. Code blocks no stage claimed are
    /// emitted as plain escaped `<pre><code>` so unfinished pipelines still
    /// produce safe output.
    pub fn into_html(self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            match segment {
                Segment::Html(html) => out.push_str(&html),
                Segment::Code { language, text } => {
                    let class = if language.is_empty() {
                        String::new()
                    } else {
                        format!(" class=\"language-{language}\"")
                    };
                    out.push_str(&format!("<pre><code{class}>{}</code></pre>", escape_html(&text)));
                }
            }
        }
        out
    }
}
