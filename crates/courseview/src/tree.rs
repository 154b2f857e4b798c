//! Builds the hierarchical docs/code trees from flat path lists.
//!
//! A tree is a pure function of `(paths, root)`: building twice from the same
//! input yields the same structure and ordering, which is what lets the
//! navigation store cache trees per session.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

/// Directory or file entry in a built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[serde(rename = "dir")]
    Directory,
    File,
}

/// One node of a docs/code tree.
///
/// `path` is the full normalized path and doubles as the node's stable
/// identity; for every non-root node it equals parent path + `/` + `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: &str, kind: NodeKind, path: String) -> Self {
        Self {
            name: name.to_string(),
            kind,
            path,
            children: Vec::new(),
        }
    }
}

/// Build the tree for one root prefix out of a flat path list.
///
/// Only paths beginning with `root + "/"` participate; everything else is
/// ignored. Each qualifying path contributes one file leaf plus any directory
/// nodes not seen before (re-encountering a prefix reuses the existing node).
/// Siblings are sorted recursively: directories before files, ties by
/// Korean-locale collation of the display name.
///
/// When nothing matches the root, the returned root node simply has no
/// children; callers render an empty state.
pub fn build_tree<S: AsRef<str>>(paths: &[S], root: &str) -> TreeNode {
    let root_path = root.strip_suffix('/').unwrap_or(root);
    let root_name = root_path.rsplit('/').next().unwrap_or(root_path);
    let mut root_node = TreeNode::new(root_name, NodeKind::Directory, root_path.to_string());

    let prefix = format!("{root_path}/");
    for path in paths {
        let path = path.as_ref();
        let Some(rel_path) = path.strip_prefix(&prefix) else {
            continue;
        };
        insert_path(&mut root_node, root_path, rel_path);
    }

    let collator = korean_collator();
    sort_children(&mut root_node, collator.as_ref());
    root_node
}

/// Walk segments below the root, extending the tree with one node per unseen
/// prefix. The final segment is a file, every intermediate one a directory.
fn insert_path(root: &mut TreeNode, root_path: &str, rel_path: &str) {
    let segments: Vec<&str> = rel_path.split('/').collect();
    let mut current = root;
    let mut current_path = root_path.to_string();

    for (idx, segment) in segments.iter().enumerate() {
        let is_last = idx == segments.len() - 1;
        current_path = format!("{current_path}/{segment}");

        let existing = current
            .children
            .iter()
            .position(|child| child.name == *segment);
        let child_idx = match existing {
            Some(i) => i,
            None => {
                let kind = if is_last {
                    NodeKind::File
                } else {
                    NodeKind::Directory
                };
                current
                    .children
                    .push(TreeNode::new(segment, kind, current_path.clone()));
                current.children.len() - 1
            }
        };
        current = &mut current.children[child_idx];
    }
}

/// Recursively sort every directory's children, directories first, then by
/// locale-aware name order within each kind.
fn sort_children(node: &mut TreeNode, collator: Option<&Collator>) {
    node.children.sort_by(|a, b| {
        if a.kind != b.kind {
            if a.kind == NodeKind::Directory {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        } else {
            compare_names(&a.name, &b.name, collator)
        }
    });
    for child in &mut node.children {
        if child.kind == NodeKind::Directory {
            sort_children(child, collator);
        }
    }
}

fn compare_names(a: &str, b: &str, collator: Option<&Collator>) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// The UI's display language is Korean, so sibling ordering follows the `ko`
/// collation. Falls back to plain byte order if the collation data cannot be
/// loaded.
fn korean_collator() -> Option<Collator> {
    Collator::try_new(&locale!("ko").into(), CollatorOptions::new()).ok()
}
