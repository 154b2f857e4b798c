//! The browsing session itself: manifest + path lists + navigation store +
//! loader + renderer, wired the same way for every subcommand.
//!
//! [`Browser`] owns the single [`NavigationStore`] and a [`ViewerPane`]
//! standing in for the viewer/breadcrumb DOM nodes. Selecting a session or a
//! path mutates the store, drives the content pipeline, and leaves the pane
//! holding whatever the user would see.

use std::sync::Arc;

use courseview::route::{read_fragment, write_fragment};
use courseview::state::NavigationStore;
use courseview::tree::TreeNode;
use courseview::types::{MAIN_SESSION, Manifest, View};
use courseview_fetch::{ContentLoader, ContentSource, DataService, Fetched, Result};
use courseview_render::content::{ContentRenderer, RenderOutcome};
use courseview_render::home::render_home;
use courseview_render::tree_view::{LabelStyle, TreeOptions, TreePlan, render_tree};

/// Stand-in for the viewer pane and breadcrumb elements.
#[derive(Debug, Clone, Default)]
pub struct ViewerPane {
    pub content: String,
    pub breadcrumb: String,
    /// Transition cue; set when fresh content landed.
    pub animate: bool,
}

impl ViewerPane {
    /// Commit a pipeline outcome. A superseded outcome changes nothing.
    fn apply(&mut self, outcome: RenderOutcome) {
        match outcome {
            RenderOutcome::Rendered {
                html,
                breadcrumb,
                animate,
            } => {
                self.content = html;
                self.breadcrumb = breadcrumb;
                self.animate = animate;
            }
            RenderOutcome::Empty { html } => {
                self.content = html;
                self.breadcrumb.clear();
                self.animate = false;
            }
            RenderOutcome::Failed { html, breadcrumb } => {
                self.content = html;
                self.breadcrumb = breadcrumb;
                self.animate = false;
            }
            RenderOutcome::Superseded => {}
        }
    }
}

/// How to enter a session.
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// Path to mark selected on entry instead of starting empty.
    pub initial_path: Option<String>,
    /// Skip opening the session's readme (used when a deep link carries its
    /// own path).
    pub skip_readme: bool,
}

pub struct Browser {
    manifest: Manifest,
    docs_paths: Vec<String>,
    code_paths: Vec<String>,
    store: NavigationStore,
    data: DataService,
    loader: ContentLoader,
    renderer: ContentRenderer,
    viewer: ViewerPane,
}

impl Browser {
    /// Load the manifest and both path lists, then start on the default
    /// session. Any load failure here aborts initialization.
    pub async fn init(source: Arc<dyn ContentSource>) -> Result<Self> {
        let data = DataService::new(Arc::clone(&source));
        let manifest = data.load_manifest().await?;
        let docs_paths = data.load_paths("docs_paths.txt").await?;
        let code_paths = data.load_paths("code_paths.txt").await?;
        let store = NavigationStore::new(&manifest.site.default_session);

        Ok(Self {
            manifest,
            docs_paths,
            code_paths,
            store,
            data,
            loader: ContentLoader::new(source),
            renderer: ContentRenderer::new(),
            viewer: ViewerPane::default(),
        })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    pub fn viewer(&self) -> &ViewerPane {
        &self.viewer
    }

    /// Enter a session by id. An id missing from the manifest is a silent
    /// no-op, leaving all state as it was.
    pub async fn select_session(&mut self, session_id: &str, options: SelectOptions) {
        let Some(session) = self.manifest.session(session_id).cloned() else {
            log::debug!("알 수 없는 세션 무시: {session_id}");
            return;
        };

        self.store
            .enter_session(&session, options.initial_path.as_deref().unwrap_or(""));
        self.store
            .ensure_session_trees(&session, &self.docs_paths, &self.code_paths);

        if session.id == MAIN_SESSION {
            let home = self.data.load_home().await;
            self.viewer.apply(render_home(home));
            return;
        }

        if !options.skip_readme {
            self.select_path(&session.readme).await;
        }
    }

    /// Select a document: update the store and run the content pipeline.
    /// An empty path renders the empty state.
    pub async fn select_path(&mut self, path: &str) {
        self.store.current_path = path.to_string();
        if path.is_empty() {
            self.viewer.apply(RenderOutcome::empty());
            return;
        }

        let guard = self.loader.begin_request();
        let outcome = match self.loader.load(path, &guard).await {
            Err(error) => {
                log::warn!("콘텐츠 로드 실패 ({path}): {error}");
                RenderOutcome::failed(path)
            }
            Ok(Fetched::Superseded) => RenderOutcome::Superseded,
            Ok(Fetched::Text(text)) => {
                self.renderer
                    .render_loaded(path, &text, || self.loader.is_current(&guard))
                    .await
            }
        };
        self.viewer.apply(outcome);
    }

    /// Re-derive the whole navigation state from a URL fragment, exactly as
    /// on a fragment-change event.
    pub async fn apply_route(&mut self, fragment: &str) {
        let default_session = self.manifest.site.default_session.clone();
        let route = read_fragment(fragment, &default_session);
        if self.manifest.session(&route.session_id).is_none() {
            log::debug!("알 수 없는 세션 무시: {}", route.session_id);
            return;
        }

        self.select_session(
            &route.session_id,
            SelectOptions {
                initial_path: route.path.clone(),
                skip_readme: route.path.is_some(),
            },
        )
        .await;

        if route.session_id != MAIN_SESSION {
            if let Some(view) = route.view {
                self.store.current_view = view;
            }
            if let Some(path) = &route.path {
                self.select_path(path).await;
            }
        }
    }

    /// The fragment encoding the current state (what the address bar shows).
    pub fn current_fragment(&self) -> String {
        let path = (!self.store.current_path.is_empty()).then_some(self.store.current_path.as_str());
        write_fragment(
            &self.store.current_session_id,
            self.store.current_view,
            path,
        )
    }

    /// Render plan for the docs sidebar (docs label style). `MAIN` and
    /// sessions without a docs tree render the empty state.
    pub fn docs_plan(&self) -> TreePlan {
        render_tree(
            self.session_tree(View::Docs),
            &self.store.current_path,
            &TreeOptions {
                label_style: LabelStyle::Docs,
            },
        )
    }

    /// Render plan for the code sidebar (plain labels).
    pub fn code_plan(&self) -> TreePlan {
        render_tree(
            self.session_tree(View::Code),
            &self.store.current_path,
            &TreeOptions::default(),
        )
    }

    fn session_tree(&self, view: View) -> Option<&TreeNode> {
        let session_id = self.store.current_session_id.as_str();
        if session_id == MAIN_SESSION {
            return None;
        }
        match view {
            View::Docs => self.store.docs_tree(session_id),
            View::Code => self.store.code_tree(session_id),
        }
    }
}
