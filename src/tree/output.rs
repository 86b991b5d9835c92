//! JSON output types for the nested heading structure.

use serde::{Deserialize, Serialize};

use super::{HeadingTree, NodeId};

/// Root document structure with metadata and nested sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeOutput {
    pub document: DocumentRoot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRoot {
    pub metadata: DocumentMetadata,
    /// Text that appeared before the first heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: Option<String>,
    #[serde(rename = "headingCount")]
    pub heading_count: usize,
    #[serde(rename = "maxDepth")]
    pub max_depth: usize,
}

/// A heading with its body text and nested headings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Depth below the root (1 for top-level headings)
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub children: Vec<Section>,
}

/// Convert a tree into its serialisable form.
pub fn build_json_output(tree: &HeadingTree, source: Option<&str>) -> TreeOutput {
    let sections = tree
        .children(tree.root())
        .map(|id| build_section(tree, id, 1))
        .collect();

    TreeOutput {
        document: DocumentRoot {
            metadata: DocumentMetadata {
                source: source.map(str::to_string),
                heading_count: tree.len(),
                max_depth: tree.max_depth(),
            },
            preamble: tree.node(tree.root()).text.clone(),
            sections,
        },
    }
}

fn build_section(tree: &HeadingTree, id: NodeId, depth: usize) -> Section {
    let node = tree.node(id);
    Section {
        title: node.title().to_string(),
        depth,
        text: node.text.clone(),
        children: tree
            .children(id)
            .map(|child| build_section(tree, child, depth + 1))
            .collect(),
    }
}
