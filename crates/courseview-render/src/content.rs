//! The per-navigation content pipeline.
//!
//! Each invocation walks Idle → Loading → one of Rendered / Empty / Failed /
//! Superseded. Markdown documents run convert → diagram transform →
//! highlight, code files wrap into a single tagged block and highlight; the
//! pipeline polls a "still current" predicate between stages and silently
//! stops when a newer navigation superseded it.

use courseview::paths::{is_markdown, language_for};

use crate::diagram::DiagramRenderer;
use crate::document::{Segment, ViewerDoc};
use crate::highlight::Highlighter;
use crate::markdown::{CmarkEngine, MarkdownEngine};

/// Placeholder when no document is selected.
pub const SELECT_DOCUMENT_MESSAGE: &str = "표시할 문서를 선택하세요.";
/// Placeholder when content loading failed.
pub const LOAD_ERROR_MESSAGE: &str = "콘텐츠를 불러오는 중 오류가 발생했습니다.";
/// Placeholder body when no markdown engine is configured.
pub const MARKDOWN_UNAVAILABLE_MESSAGE: &str = "Markdown 라이브러리가 없습니다.";

/// Terminal state of one render invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered {
        html: String,
        breadcrumb: String,
        /// Cosmetic transition cue for the concrete binding.
        animate: bool,
    },
    /// Nothing selected; breadcrumb clears.
    Empty { html: String },
    /// Load failed; breadcrumb still shows what failed.
    Failed { html: String, breadcrumb: String },
    /// A newer request took over; nothing may touch the viewer.
    Superseded,
}

impl RenderOutcome {
    /// The fixed empty state (no path selected).
    pub fn empty() -> Self {
        RenderOutcome::Empty {
            html: format!("<div class=\"empty-state\">{SELECT_DOCUMENT_MESSAGE}</div>"),
        }
    }

    /// The fixed failure state for `path`.
    pub fn failed(path: &str) -> Self {
        RenderOutcome::Failed {
            html: format!("<div class=\"empty-state\">{LOAD_ERROR_MESSAGE}</div>"),
            breadcrumb: path.to_string(),
        }
    }
}

/// Dispatches loaded text through the markdown or code pipeline.
pub struct ContentRenderer {
    markdown: Option<Box<dyn MarkdownEngine>>,
    highlighter: Highlighter,
    diagram: DiagramRenderer,
}

impl ContentRenderer {
    /// Bundled adapters: pulldown-cmark, the default highlighter, and no
    /// diagram engine.
    pub fn new() -> Self {
        Self {
            markdown: Some(Box::new(CmarkEngine)),
            highlighter: Highlighter::new(),
            diagram: DiagramRenderer::disabled(),
        }
    }

    /// Explicit adapter wiring, `None` meaning "engine unavailable".
    pub fn with_adapters(
        markdown: Option<Box<dyn MarkdownEngine>>,
        highlighter: Highlighter,
        diagram: DiagramRenderer,
    ) -> Self {
        Self {
            markdown,
            highlighter,
            diagram,
        }
    }

    /// Render already-fetched text for `path`.
    ///
    /// `still_current` is polled before every stage that feeds visible
    /// state; once it reports false the invocation ends as
    /// [`RenderOutcome::Superseded`] without further work.
    pub async fn render_loaded(
        &self,
        path: &str,
        text: &str,
        still_current: impl Fn() -> bool,
    ) -> RenderOutcome {
        if !still_current() {
            return RenderOutcome::Superseded;
        }

        let doc = if is_markdown(path) {
            let doc = self.convert_markdown(text);
            if !still_current() {
                return RenderOutcome::Superseded;
            }
            let doc = self.diagram.render(doc).await;
            if !still_current() {
                return RenderOutcome::Superseded;
            }
            self.highlighter.highlight_doc(doc)
        } else {
            let language = language_for(path).unwrap_or("");
            self.highlighter
                .highlight_doc(ViewerDoc::code_block(language, text))
        };

        if !still_current() {
            return RenderOutcome::Superseded;
        }
        RenderOutcome::Rendered {
            html: doc.into_html(),
            breadcrumb: path.to_string(),
            animate: true,
        }
    }

    fn convert_markdown(&self, text: &str) -> ViewerDoc {
        match &self.markdown {
            Some(engine) => engine.convert(text),
            None => ViewerDoc::new(vec![Segment::Html(format!(
                "<div class=\"empty-state\">{MARKDOWN_UNAVAILABLE_MESSAGE}</div>"
            ))]),
        }
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn renderer() -> ContentRenderer {
        ContentRenderer::new()
    }

    // ── terminal states ────────────────────────────────────────────────

    #[test]
    fn test_empty_outcome_carries_placeholder() {
        let RenderOutcome::Empty { html } = RenderOutcome::empty() else {
            panic!("expected empty");
        };
        assert!(html.contains(SELECT_DOCUMENT_MESSAGE));
    }

    #[test]
    fn test_failed_outcome_keeps_breadcrumb() {
        let RenderOutcome::Failed { html, breadcrumb } = RenderOutcome::failed("d/x.md") else {
            panic!("expected failed");
        };
        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert_eq!(breadcrumb, "d/x.md");
    }

    // ── markdown pipeline ──────────────────────────────────────────────

    #[tokio::test]
    async fn test_markdown_rendered_with_highlighted_code() {
        let outcome = renderer()
            .render_loaded("docs/a.md", "# Hi\n\n```python\nimport os\n```", || true)
            .await;
        let RenderOutcome::Rendered {
            html,
            breadcrumb,
            animate,
        } = outcome
        else {
            panic!("expected rendered");
        };
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<span class=\"tok-kw\">import</span>"));
        assert_eq!(breadcrumb, "docs/a.md");
        assert!(animate);
    }

    #[tokio::test]
    async fn test_markdown_extension_case_insensitive() {
        let outcome = renderer().render_loaded("docs/A.MD", "*em*", || true).await;
        let RenderOutcome::Rendered { html, .. } = outcome else {
            panic!("expected rendered");
        };
        assert!(html.contains("<em>em</em>"));
    }

    #[tokio::test]
    async fn test_missing_markdown_engine_renders_placeholder() {
        let renderer = ContentRenderer::with_adapters(
            None,
            Highlighter::fallback_only(),
            DiagramRenderer::disabled(),
        );
        let outcome = renderer.render_loaded("docs/a.md", "# Hi", || true).await;
        let RenderOutcome::Rendered { html, .. } = outcome else {
            panic!("expected rendered");
        };
        assert!(html.contains(MARKDOWN_UNAVAILABLE_MESSAGE));
    }

    // ── code pipeline ──────────────────────────────────────────────────

    #[tokio::test]
    async fn test_code_file_wrapped_and_tagged() {
        let outcome = renderer()
            .render_loaded("src/app.py", "def main():\n    pass", || true)
            .await;
        let RenderOutcome::Rendered { html, .. } = outcome else {
            panic!("expected rendered");
        };
        assert!(html.contains("class=\"language-python\""));
        assert!(html.contains("<span class=\"tok-kw\">def</span>"));
    }

    #[tokio::test]
    async fn test_unknown_extension_untagged_and_escaped() {
        let outcome = renderer()
            .render_loaded("notes.txt", "a < b", || true)
            .await;
        let RenderOutcome::Rendered { html, .. } = outcome else {
            panic!("expected rendered");
        };
        assert!(html.contains("<pre><code>a &lt; b</code></pre>"));
    }

    // ── staleness ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_superseded_before_start() {
        let outcome = renderer().render_loaded("docs/a.md", "# Hi", || false).await;
        assert_eq!(outcome, RenderOutcome::Superseded);
    }

    #[tokio::test]
    async fn test_superseded_mid_pipeline() {
        // The predicate flips to stale after the first poll, so the
        // pipeline must stop between stages.
        let polls = AtomicUsize::new(0);
        let outcome = renderer()
            .render_loaded("docs/a.md", "# Hi", || {
                polls.fetch_add(1, Ordering::SeqCst) == 0
            })
            .await;
        assert_eq!(outcome, RenderOutcome::Superseded);
    }
}
