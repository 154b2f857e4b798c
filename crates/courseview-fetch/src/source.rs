//! Content sources.
//!
//! Everything the browser reads — manifest, path lists, home data, document
//! content — comes through one [`ContentSource`], addressed by site-relative
//! path. A source is either a local site directory or an HTTP base URL.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{LoadError, Result};

/// Fetches raw text by site-relative path.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// Local site directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        Ok(tokio::fs::read_to_string(full).await?)
    }
}

/// HTTP site behind a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base, path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Pick a source from a site argument: URLs go over HTTP, anything else is
/// treated as a directory.
pub fn source_for(site: &str) -> Arc<dyn ContentSource> {
    if site.starts_with("http://") || site.starts_with("https://") {
        Arc::new(HttpSource::new(site))
    } else {
        Arc::new(FsSource::new(site))
    }
}
