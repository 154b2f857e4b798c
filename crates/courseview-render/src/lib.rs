#![doc = include_str!("../README.md")]

pub mod content;
pub mod diagram;
pub mod document;
pub mod escape;
pub mod highlight;
pub mod home;
pub mod markdown;
pub mod tree_view;

pub use content::{ContentRenderer, RenderOutcome};
pub use diagram::{DiagramEngine, DiagramError, DiagramNode, DiagramRenderer};
pub use document::{Segment, ViewerDoc};
pub use escape::{escape_attr, escape_html};
pub use highlight::{HighlightEngine, Highlighter, simple_highlight};
pub use home::render_home;
pub use markdown::{CmarkEngine, MarkdownEngine};
pub use tree_view::{LabelStyle, TreeItem, TreeOptions, TreePlan, render_tree};
