//! Sidebar tree rendering.
//!
//! A built [`TreeNode`] plus the currently selected path project into a
//! [`TreePlan`] — a DOM-agnostic render plan the concrete binding serializes
//! (here, to HTML or a text outline). Rendering is idempotent and fully
//! replaces prior output; re-marking the selection on navigation is a cheap
//! in-place pass that never rebuilds the plan.

use courseview::label::format_docs_label;
use courseview::tree::{NodeKind, TreeNode};

use crate::escape::{escape_attr, escape_html};

/// Shown when a tree is missing or has no entries.
pub const EMPTY_TREE_MESSAGE: &str = "표시할 항목이 없습니다.";

/// Per-call label formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Names shown as-is.
    #[default]
    Plain,
    /// Docs style: underscores to spaces, upper-cased base, extension kept.
    Docs,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    pub label_style: LabelStyle,
}

/// One entry of a render plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeItem {
    File {
        label: String,
        path: String,
        active: bool,
    },
    Directory {
        label: String,
        /// Directories render expanded by default.
        expanded: bool,
        children: Vec<TreeItem>,
    },
}

/// The full render plan for one sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreePlan {
    Empty,
    Tree(Vec<TreeItem>),
}

/// Project a tree and the current selection into a render plan.
///
/// A missing or childless tree yields [`TreePlan::Empty`] — never an error.
pub fn render_tree(tree: Option<&TreeNode>, current_path: &str, options: &TreeOptions) -> TreePlan {
    match tree {
        Some(tree) if !tree.children.is_empty() => TreePlan::Tree(
            tree.children
                .iter()
                .map(|child| render_item(child, current_path, options))
                .collect(),
        ),
        _ => TreePlan::Empty,
    }
}

fn render_item(node: &TreeNode, current_path: &str, options: &TreeOptions) -> TreeItem {
    let label = match options.label_style {
        LabelStyle::Plain => node.name.clone(),
        LabelStyle::Docs => format_docs_label(&node.name, node.kind),
    };
    match node.kind {
        NodeKind::File => TreeItem::File {
            label,
            path: node.path.clone(),
            active: node.path == current_path,
        },
        NodeKind::Directory => TreeItem::Directory {
            label,
            expanded: true,
            children: node
                .children
                .iter()
                .map(|child| render_item(child, current_path, options))
                .collect(),
        },
    }
}

impl TreePlan {
    /// Re-mark the active item so exactly the entry at `current_path` is
    /// selected. Idempotent; does not rebuild the plan.
    pub fn sync_selection(&mut self, current_path: &str) {
        if let TreePlan::Tree(items) = self {
            for item in items {
                sync_item(item, current_path);
            }
        }
    }

    /// Serialize to viewer markup, matching the details/summary/button shape
    /// of the sidebar.
    pub fn to_html(&self) -> String {
        match self {
            TreePlan::Empty => {
                format!("<div class=\"empty-state\">{EMPTY_TREE_MESSAGE}</div>")
            }
            TreePlan::Tree(items) => {
                let mut out = String::from("<div class=\"tree-list\">");
                for item in items {
                    push_item_html(item, &mut out);
                }
                out.push_str("</div>");
                out
            }
        }
    }

    /// Serialize to an indented text outline (`>` marks the active item).
    pub fn to_text(&self) -> String {
        match self {
            TreePlan::Empty => format!("{EMPTY_TREE_MESSAGE}\n"),
            TreePlan::Tree(items) => {
                let mut out = String::new();
                for item in items {
                    push_item_text(item, 0, &mut out);
                }
                out
            }
        }
    }
}

fn sync_item(item: &mut TreeItem, current_path: &str) {
    match item {
        TreeItem::File { path, active, .. } => *active = path == current_path,
        TreeItem::Directory { children, .. } => {
            for child in children {
                sync_item(child, current_path);
            }
        }
    }
}

fn push_item_html(item: &TreeItem, out: &mut String) {
    match item {
        TreeItem::File {
            label,
            path,
            active,
        } => {
            let class = if *active { " class=\"is-active\"" } else { "" };
            out.push_str(&format!(
                "<div class=\"tree-item\"><button type=\"button\" data-path=\"{}\"{class}>{}</button></div>",
                escape_attr(path),
                escape_html(label)
            ));
        }
        TreeItem::Directory {
            label,
            expanded,
            children,
        } => {
            out.push_str(if *expanded { "<details open>" } else { "<details>" });
            out.push_str(&format!("<summary>{}</summary><div>", escape_html(label)));
            for child in children {
                push_item_html(child, out);
            }
            out.push_str("</div></details>");
        }
    }
}

fn push_item_text(item: &TreeItem, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match item {
        TreeItem::File { label, active, .. } => {
            let marker = if *active { "> " } else { "" };
            out.push_str(&format!("{indent}{marker}{label}\n"));
        }
        TreeItem::Directory {
            label, children, ..
        } => {
            out.push_str(&format!("{indent}{label}/\n"));
            for child in children {
                push_item_text(child, depth + 1, out);
            }
        }
    }
}
