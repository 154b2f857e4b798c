//! Diagram (mermaid) rendering adapter.
//!
//! Only engaged when a converted markdown document carries at least one
//! `mermaid`-tagged code block. The engine behind the adapter is loaded
//! lazily, exactly once per process — concurrent callers share the one
//! in-flight load — and every failure mode degrades to a logged no-op:
//! a missing engine leaves the blocks untouched, and a render error leaves
//! whatever the engine managed to produce.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::document::{Segment, ViewerDoc};
use crate::escape::escape_html;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct DiagramError(pub String);

/// One diagram block handed to the engine, already wrapped as an
/// engine-renderable node. The engine rewrites `html` in place.
#[derive(Debug, Clone)]
pub struct DiagramNode {
    /// The raw diagram source from the fence.
    pub source: String,
    /// Current markup for the node; starts as `<pre class="mermaid">…</pre>`.
    pub html: String,
}

/// Narrow contract over the diagram rendering engine.
#[async_trait]
pub trait DiagramEngine: Send + Sync {
    async fn run(&self, nodes: &mut [DiagramNode]) -> Result<(), DiagramError>;
}

type EngineFuture = Pin<Box<dyn Future<Output = Result<Arc<dyn DiagramEngine>, DiagramError>> + Send>>;
type EngineFactory = Box<dyn Fn() -> EngineFuture + Send + Sync>;

/// Transforms mermaid blocks and drives the lazily loaded engine.
pub struct DiagramRenderer {
    factory: Option<EngineFactory>,
    engine: OnceCell<Option<Arc<dyn DiagramEngine>>>,
}

impl DiagramRenderer {
    /// No engine configured; documents pass through unmodified.
    pub fn disabled() -> Self {
        Self {
            factory: None,
            engine: OnceCell::new(),
        }
    }

    /// Engine loaded on first use via `factory`.
    pub fn with_factory(factory: EngineFactory) -> Self {
        Self {
            factory: Some(factory),
            engine: OnceCell::new(),
        }
    }

    /// Render every mermaid block of `doc` in place.
    pub async fn render(&self, doc: ViewerDoc) -> ViewerDoc {
        if !doc.has_code_language("mermaid") {
            return doc;
        }
        let Some(engine) = self.engine().await else {
            log::debug!("다이어그램 엔진이 없어 mermaid 블록을 그대로 둡니다");
            return doc;
        };

        let mut doc = doc;
        let mut slots = Vec::new();
        let mut nodes = Vec::new();
        for (idx, segment) in doc.segments.iter().enumerate() {
            if let Segment::Code { language, text } = segment
                && language == "mermaid"
            {
                slots.push(idx);
                nodes.push(DiagramNode {
                    source: text.clone(),
                    html: format!("<pre class=\"mermaid\">{}</pre>", escape_html(text)),
                });
            }
        }

        if let Err(error) = engine.run(&mut nodes).await {
            // Keep whatever the engine produced so far visible.
            log::warn!("Mermaid 렌더링 실패: {error}");
        }

        for (idx, node) in slots.into_iter().zip(nodes) {
            doc.segments[idx] = Segment::Html(node.html);
        }
        doc
    }

    /// Memoized engine slot. The factory runs at most once; a load failure
    /// is logged and pins the slot to "unavailable".
    async fn engine(&self) -> Option<Arc<dyn DiagramEngine>> {
        let factory = self.factory.as_ref()?;
        self.engine
            .get_or_init(|| async {
                match factory().await {
                    Ok(engine) => Some(engine),
                    Err(error) => {
                        log::warn!("다이어그램 엔진 로드 실패: {error}");
                        None
                    }
                }
            })
            .await
            .clone()
    }
}
