#![doc = include_str!("../README.md")]

pub mod label;
pub mod paths;
pub mod route;
pub mod state;
pub mod tree;
pub mod types;

pub use label::format_docs_label;
pub use paths::{is_markdown, language_for, normalize_path};
pub use route::{Route, read_fragment, write_fragment};
pub use state::{NavTab, NavigationStore, SectionState};
pub use tree::{NodeKind, TreeNode, build_tree};
pub use types::{
    Blueprint, Feature, Hero, HomeData, MAIN_SESSION, Manifest, Session, SiteConfig, Stat, View,
};
