//! The memoizing content loader.
//!
//! One logical request is "current" at any time, system-wide. Each
//! navigation calls [`ContentLoader::begin_request`], which hands out a
//! monotonically increasing token and cancels whatever fetch the previous
//! request still had in flight. A fetch that settles after its token went
//! stale is discarded — success and failure alike — so the last request
//! issued, not the last to complete, determines what the viewer shows.
//!
//! Successful fetches are cached by normalized path for the life of the
//! process; site files are static, so there is no eviction or invalidation.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

use courseview::paths::normalize_path;

use crate::error::Result;
use crate::source::ContentSource;

/// Identity of one navigation-triggered load.
#[derive(Debug)]
pub struct RequestGuard {
    id: u64,
    cancel: CancellationToken,
}

impl RequestGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Result of a load attempt that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Text(String),
    /// A newer request took over; the caller must not render anything.
    Superseded,
}

pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
    cache: Mutex<HashMap<String, String>>,
    latest: AtomicU64,
    active: Mutex<Option<CancellationToken>>,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
            latest: AtomicU64::new(0),
            active: Mutex::new(None),
        }
    }

    /// Start a new logical request: the returned guard carries the now-latest
    /// token, and the previous request's in-flight fetch (if any) receives a
    /// cancel signal.
    pub fn begin_request(&self) -> RequestGuard {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();
        let previous = self
            .active
            .lock()
            .expect("loader state mutex poisoned")
            .replace(cancel.clone());
        if let Some(previous) = previous {
            log::debug!("요청 {id} 시작, 이전 요청 취소");
            previous.cancel();
        }
        RequestGuard { id, cancel }
    }

    /// Whether `guard` still identifies the latest request.
    pub fn is_current(&self, guard: &RequestGuard) -> bool {
        self.latest.load(Ordering::SeqCst) == guard.id
    }

    /// Load content for `path` under `guard`.
    ///
    /// Cached paths return without touching the network. Otherwise the fetch
    /// races the guard's cancel signal; a result arriving after supersession
    /// is dropped silently, errors included.
    pub async fn load(&self, path: &str, guard: &RequestGuard) -> Result<Fetched> {
        let key = normalize_path(path);
        let cached = self
            .cache
            .lock()
            .expect("content cache mutex poisoned")
            .get(&key)
            .cloned();
        if let Some(text) = cached {
            log::debug!("캐시 적중: {key}");
            return Ok(Fetched::Text(text));
        }

        let fetched = tokio::select! {
            _ = guard.cancel.cancelled() => return Ok(Fetched::Superseded),
            result = self.source.fetch_text(&key) => result,
        };
        if !self.is_current(guard) {
            return Ok(Fetched::Superseded);
        }

        let text = fetched?;
        self.cache
            .lock()
            .expect("content cache mutex poisoned")
            .insert(key, text.clone());
        Ok(Fetched::Text(text))
    }
}
