//! The navigation store: one process-wide value owning the current
//! session/view/path plus the lazily built per-session trees.
//!
//! The store is created at startup and passed by reference to whatever needs
//! it; trees and state live for the whole browsing session (no eviction, no
//! manifest hot-reload).

use std::collections::HashMap;

use crate::tree::{TreeNode, build_tree};
use crate::types::{Manifest, Session, View};

/// Mutable navigation state plus the per-session tree caches.
#[derive(Debug, Clone)]
pub struct NavigationStore {
    pub current_session_id: String,
    pub current_view: View,
    /// Currently selected document path; empty means nothing selected.
    pub current_path: String,
    docs_trees: HashMap<String, TreeNode>,
    code_trees: HashMap<String, TreeNode>,
}

/// Enabled/active flags for the docs/code sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    pub has_docs: bool,
    pub has_code: bool,
    pub current_view: View,
    /// Whether the sidebar shows at all (any root present).
    pub visible: bool,
}

/// One top-nav tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub id: String,
    pub label: String,
    pub active: bool,
}

impl NavigationStore {
    pub fn new(default_session: &str) -> Self {
        Self {
            current_session_id: default_session.to_string(),
            current_view: View::Docs,
            current_path: String::new(),
            docs_trees: HashMap::new(),
            code_trees: HashMap::new(),
        }
    }

    /// Enter a session: the view follows the session's roots and the path is
    /// reset to the caller-provided initial path.
    pub fn enter_session(&mut self, session: &Session, initial_path: &str) {
        self.current_session_id = session.id.clone();
        self.current_view = session.default_view();
        self.current_path = initial_path.to_string();
    }

    /// Build whichever of the session's trees are missing from the caches.
    /// Already-built trees are reused untouched.
    pub fn ensure_session_trees(
        &mut self,
        session: &Session,
        docs_paths: &[String],
        code_paths: &[String],
    ) {
        if let Some(root) = &session.docs_root
            && !self.docs_trees.contains_key(&session.id)
        {
            self.docs_trees
                .insert(session.id.clone(), build_tree(docs_paths, root));
        }
        if let Some(root) = &session.code_root
            && !self.code_trees.contains_key(&session.id)
        {
            self.code_trees
                .insert(session.id.clone(), build_tree(code_paths, root));
        }
    }

    pub fn docs_tree(&self, session_id: &str) -> Option<&TreeNode> {
        self.docs_trees.get(session_id)
    }

    pub fn code_tree(&self, session_id: &str) -> Option<&TreeNode> {
        self.code_trees.get(session_id)
    }

    /// Sidebar section flags for a session (`None` for an unknown session,
    /// which disables both sections).
    pub fn section_state(&self, session: Option<&Session>) -> SectionState {
        let has_docs = session.is_some_and(|s| s.docs_root.is_some());
        let has_code = session.is_some_and(|s| s.code_root.is_some());
        SectionState {
            has_docs,
            has_code,
            current_view: self.current_view,
            visible: has_docs || has_code,
        }
    }

    /// Top-nav tabs in manifest order, `MAIN` excluded, the current session
    /// marked active.
    pub fn nav_tabs(&self, manifest: &Manifest) -> Vec<NavTab> {
        manifest
            .nav_sessions()
            .map(|session| NavTab {
                id: session.id.clone(),
                label: session.label.clone(),
                active: session.id == self.current_session_id,
            })
            .collect()
    }
}
