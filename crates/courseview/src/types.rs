use serde::{Deserialize, Serialize};

/// Reserved id of the landing pseudo-session. It owns no trees and renders
/// the home layout instead of docs/code content.
pub const MAIN_SESSION: &str = "MAIN";

// ============================================================================
// Manifest
// ============================================================================

/// The site manifest, loaded once at startup.
///
/// # JSON shape
///
/// ```json
/// {
///   "site": { "default_session": "MAIN" },
///   "sessions": [
///     {
///       "id": "S1",
///       "label": "Session 1",
///       "docs_root": "sessions/001/docs",
///       "code_root": "sessions/001/code",
///       "readme": "sessions/001/docs/readme.md"
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub site: SiteConfig,
    pub sessions: Vec<Session>,
}

/// Site-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Session opened when the route fragment names none.
    pub default_session: String,
}

/// One navigable course unit with optional docs/code roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub label: String,
    /// Path prefix of the docs tree, absent when the session has no docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_root: Option<String>,
    /// Path prefix of the code tree, absent when the session has no code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_root: Option<String>,
    /// Document opened by default on session entry.
    #[serde(default)]
    pub readme: String,
}

impl Manifest {
    /// Look up a session by id. Unknown ids are a silent miss, not an error.
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Sessions shown as top-nav tabs, i.e. everything except `MAIN`.
    pub fn nav_sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(|s| s.id != MAIN_SESSION)
    }
}

impl Session {
    /// The view a session opens in: docs when a docs root exists, code
    /// otherwise.
    pub fn default_view(&self) -> View {
        if self.docs_root.is_some() {
            View::Docs
        } else {
            View::Code
        }
    }
}

// ============================================================================
// View
// ============================================================================

/// Which sidebar tree the UI is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Docs,
    Code,
}

impl View {
    /// Parse the `v` route key; anything but `docs`/`code` is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "docs" => Some(View::Docs),
            "code" => Some(View::Code),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Docs => "docs",
            View::Code => "code",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Home data
// ============================================================================

/// Optional landing-page content (`home.json`). Every field is optional;
/// the renderer substitutes built-in fallback content per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<Blueprint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

/// Hero panel: headline, accent line, and badge pills.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kicker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pills: Vec<String>,
}

/// Blueprint panel: an ASCII track plus a small stats grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ascii: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// One feature card with a bullet list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}
