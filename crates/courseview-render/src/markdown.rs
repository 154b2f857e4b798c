//! Markdown conversion adapter.
//!
//! The engine converts markdown text into a [`ViewerDoc`]: prose becomes
//! finished HTML segments, while fenced code blocks are kept raw (with their
//! fence language) so the diagram and highlighting stages can claim them —
//! the same contract the `language-` class prefix serves in a browser host.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::document::{Segment, ViewerDoc};

/// Narrow adapter contract over whatever markdown engine the host carries.
pub trait MarkdownEngine: Send + Sync {
    fn convert(&self, markdown: &str) -> ViewerDoc;
}

/// The bundled engine, backed by pulldown-cmark.
#[derive(Debug, Default)]
pub struct CmarkEngine;

impl MarkdownEngine for CmarkEngine {
    fn convert(&self, markdown: &str) -> ViewerDoc {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(markdown, options);

        let mut segments = Vec::new();
        let mut pending: Vec<Event> = Vec::new();
        let mut code: Option<(String, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    flush_pending(&mut pending, &mut segments);
                    let language = match &kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .unwrap_or("")
                            .to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code = Some((language, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((language, text)) = code.take() {
                        segments.push(Segment::Code { language, text });
                    }
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, buffer)) = code.as_mut() {
                        buffer.push_str(&text);
                    }
                }
                other => pending.push(other),
            }
        }
        flush_pending(&mut pending, &mut segments);

        ViewerDoc::new(segments)
    }
}

fn flush_pending(pending: &mut Vec<Event<'_>>, segments: &mut Vec<Segment>) {
    if pending.is_empty() {
        return;
    }
    let mut out = String::new();
    html::push_html(&mut out, pending.drain(..));
    segments.push(Segment::Html(out));
}
