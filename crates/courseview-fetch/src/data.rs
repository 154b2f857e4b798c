//! Startup data loading: manifest, path lists, and the cached home data.

use std::sync::Arc;

use tokio::sync::OnceCell;

use courseview::paths::normalize_path;
use courseview::types::{HomeData, Manifest};

use crate::error::Result;
use crate::source::ContentSource;

/// Where the static data files live below the site root.
const DATA_BASE: &str = "site/data";

/// Loads the static data files. Home data is fetched at most once; a failed
/// fetch pins it to "absent" so the caller renders the built-in fallback.
pub struct DataService {
    source: Arc<dyn ContentSource>,
    home: OnceCell<Option<HomeData>>,
}

impl DataService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            home: OnceCell::new(),
        }
    }

    /// Load and parse `manifest.json`. Failures abort initialization.
    pub async fn load_manifest(&self) -> Result<Manifest> {
        let text = self
            .source
            .fetch_text(&format!("{DATA_BASE}/manifest.json"))
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load a newline-delimited path list: each line normalized, empty lines
    /// discarded.
    pub async fn load_paths(&self, file_name: &str) -> Result<Vec<String>> {
        let text = self
            .source
            .fetch_text(&format!("{DATA_BASE}/{file_name}"))
            .await?;
        Ok(text
            .lines()
            .map(normalize_path)
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Home data, fetched and parsed once. `None` when the file is missing
    /// or malformed.
    pub async fn load_home(&self) -> Option<&HomeData> {
        self.home
            .get_or_init(|| async {
                match self.fetch_home().await {
                    Ok(data) => Some(data),
                    Err(error) => {
                        log::debug!("home.json 로드 실패, 기본 콘텐츠 사용: {error}");
                        None
                    }
                }
            })
            .await
            .as_ref()
    }

    async fn fetch_home(&self) -> Result<HomeData> {
        let text = self
            .source
            .fetch_text(&format!("{DATA_BASE}/home.json"))
            .await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FsSource;
    use std::path::Path;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let full = dir.join(rel);
        std::fs::create_dir_all(full.parent().expect("parent")).expect("mkdir");
        std::fs::write(full, contents).expect("write");
    }

    fn service(dir: &Path) -> DataService {
        DataService::new(Arc::new(FsSource::new(dir)))
    }

    #[tokio::test]
    async fn test_load_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            dir.path(),
            "site/data/manifest.json",
            r#"{ "site": { "default_session": "MAIN" }, "sessions": [] }"#,
        );
        let manifest = service(dir.path()).load_manifest().await.expect("manifest");
        assert_eq!(manifest.site.default_session, "MAIN");
    }

    #[tokio::test]
    async fn test_load_manifest_missing_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(service(dir.path()).load_manifest().await.is_err());
    }

    #[tokio::test]
    async fn test_load_paths_normalizes_and_filters() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            dir.path(),
            "site/data/docs_paths.txt",
            "./sessions/001/docs/a.md\n\n  sessions/001/docs/b.md  \n\n",
        );
        let paths = service(dir.path())
            .load_paths("docs_paths.txt")
            .await
            .expect("paths");
        assert_eq!(paths, ["sessions/001/docs/a.md", "sessions/001/docs/b.md"]);
    }

    #[tokio::test]
    async fn test_home_data_cached() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "site/data/home.json", r#"{ "features": [] }"#);
        let service = service(dir.path());
        assert!(service.load_home().await.is_some());

        // Removing the file must not matter once cached.
        std::fs::remove_file(dir.path().join("site/data/home.json")).expect("rm");
        assert!(service.load_home().await.is_some());
    }

    #[tokio::test]
    async fn test_home_data_absent_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(service(dir.path()).load_home().await.is_none());
    }
}
