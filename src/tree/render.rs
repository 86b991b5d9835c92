//! Plain-text renderings of a heading tree.

use super::{HeadingTree, NodeId};

/// Indented outline, one heading per line.
///
/// Top-level headings start at column zero and each deeper level adds
/// `indent` spaces.
///
/// # Examples
///
/// ```
/// # use wiktree::tree::{HeadingTree, render_outline};
/// let mut tree = HeadingTree::new();
/// tree.insert_heading::<&str>(&[], "French").unwrap();
/// tree.insert_heading(&["French"], "Noun").unwrap();
/// assert_eq!(render_outline(&tree, 4), "French\n    Noun\n");
/// ```
pub fn render_outline(tree: &HeadingTree, indent: usize) -> String {
    let mut output = String::new();
    for (depth, title) in tree.traverse() {
        output.push_str(&" ".repeat(indent * (depth - 1)));
        output.push_str(title);
        output.push('\n');
    }
    output
}

/// Outline drawn with box-drawing connectors.
pub fn render_box_tree(tree: &HeadingTree) -> String {
    let mut output = String::new();
    let children: Vec<_> = tree.children(tree.root()).collect();
    for (i, child) in children.iter().enumerate() {
        render_node(tree, *child, "", i == children.len() - 1, &mut output);
    }
    output
}

fn render_node(tree: &HeadingTree, id: NodeId, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(tree.node(id).title());
    output.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    let children: Vec<_> = tree.children(id).collect();
    for (i, child) in children.iter().enumerate() {
        render_node(tree, *child, &child_prefix, i == children.len() - 1, output);
    }
}
