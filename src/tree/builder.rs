//! Builds a heading tree from a flat, rank-tagged element sequence.
//!
//! The builder keeps one open heading per level. A new heading at level `R`
//! closes every open heading at `R` or deeper and becomes the deepest open
//! heading itself; content is attached to whatever heading is deepest at the
//! time it arrives, or to the root when nothing is open.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::element::{ElementKind, MAX_HEADING_LEVEL, RankedElement};
use super::{HeadingTree, NodeId};
use crate::error::TreeError;

/// What to do when a heading receives a second block of body text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPolicy {
    /// Keep only the most recent block.
    #[default]
    Replace,
    /// Join blocks with a blank line.
    Append,
}

/// What to do when a heading's title matches an existing sibling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The new heading replaces the old one and its subtree.
    #[default]
    Replace,
    /// Both headings are kept as distinct siblings.
    Keep,
}

/// Options controlling how elements are folded into the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub text: TextPolicy,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

/// Single-pass builder for a [`HeadingTree`].
///
/// On a malformed element the pass stops, the error is returned, and the
/// tree built so far stays available through [`tree`](Self::tree) and
/// [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: HeadingTree,
    open: BTreeMap<u8, NodeId>,
    options: BuildOptions,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Build a whole tree in one call.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiktree::tree::{BuildOptions, RankedElement, TreeBuilder};
    ///
    /// let tree = TreeBuilder::build(
    ///     [
    ///         RankedElement::heading(2, "Noun"),
    ///         RankedElement::content("bread"),
    ///     ],
    ///     BuildOptions::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(tree.text_at(&["Noun"]).unwrap(), Some("bread"));
    /// ```
    pub fn build<I>(elements: I, options: BuildOptions) -> Result<HeadingTree, TreeError>
    where
        I: IntoIterator<Item = RankedElement>,
    {
        let mut builder = Self::with_options(options);
        builder.extend(elements)?;
        Ok(builder.finish())
    }

    /// Feed elements in document order, stopping at the first malformed one.
    pub fn extend<I>(&mut self, elements: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = RankedElement>,
    {
        for (index, element) in elements.into_iter().enumerate() {
            if let Err(err) = self.push(&element) {
                warn!(index, %err, "aborting tree build");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Place one element and return the node it created or updated.
    pub fn push(&mut self, element: &RankedElement) -> Result<NodeId, TreeError> {
        match element.kind {
            ElementKind::Heading { level } => {
                if !(1..=MAX_HEADING_LEVEL).contains(&level) {
                    return Err(TreeError::MalformedInput(format!(
                        "heading level {level} outside 1..={MAX_HEADING_LEVEL}"
                    )));
                }
                let parent = self.parent_for(level);
                let id = self
                    .tree
                    .insert_child(parent, &element.text, self.options.duplicates);
                // Closes siblings and anything nested below them.
                self.open.split_off(&level);
                self.open.insert(level, id);
                debug!(level, title = %element.text, "opened heading");
                Ok(id)
            }
            ElementKind::Content => {
                let parent = self.deepest_open();
                self.tree.set_text(parent, &element.text, self.options.text);
                debug!(bytes = element.text.len(), "attached content");
                Ok(parent)
            }
        }
    }

    /// Levels of the currently open headings, shallowest first.
    pub fn open_levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.open.keys().copied()
    }

    /// Titles of the currently open headings, shallowest first.
    pub fn ancestry(&self) -> Vec<&str> {
        self.open
            .values()
            .map(|id| self.tree.node(*id).title())
            .collect()
    }

    pub fn tree(&self) -> &HeadingTree {
        &self.tree
    }

    pub fn finish(self) -> HeadingTree {
        self.tree
    }

    fn parent_for(&self, level: u8) -> NodeId {
        self.open
            .range(..level)
            .next_back()
            .map(|(_, id)| *id)
            .unwrap_or(self.tree.root())
    }

    fn deepest_open(&self) -> NodeId {
        self.open
            .last_key_value()
            .map(|(_, id)| *id)
            .unwrap_or(self.tree.root())
    }
}
