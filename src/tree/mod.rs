//! Heading tree construction and traversal.
//!
//! A [`HeadingTree`] owns every node of a document outline. Nodes live in an
//! `indextree` arena, so each heading has a stable [`NodeId`] of its own while
//! the public path API still addresses headings by their titles.

pub mod builder;
pub mod element;
pub mod output;
pub mod render;

pub use builder::{BuildOptions, DuplicatePolicy, TextPolicy, TreeBuilder};
pub use element::{ElementKind, MAX_HEADING_LEVEL, RankedElement};
pub use indextree::NodeId;
pub use output::{TreeOutput, build_json_output};
pub use render::{render_box_tree, render_outline};

use indextree::{Arena, NodeEdge};

use crate::error::TreeError;

/// A heading and the body text directly beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingNode {
    /// Heading label. Only the root has none.
    pub title: Option<String>,
    /// Body text before the first child heading.
    pub text: Option<String>,
}

impl HeadingNode {
    fn heading(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            text: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// Rooted, ordered tree of headings.
#[derive(Debug, Clone)]
pub struct HeadingTree {
    arena: Arena<HeadingNode>,
    root: NodeId,
}

impl Default for HeadingTree {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingTree {
    /// Create a tree holding only the untitled root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(HeadingNode::default());
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another tree or was removed.
    pub fn node(&self, id: NodeId) -> &HeadingNode {
        self.arena[id].get()
    }

    /// Child headings of `id`, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Number of headings, not counting the root.
    pub fn len(&self) -> usize {
        self.root.descendants(&self.arena).count() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.root).next().is_none()
    }

    /// Deepest heading depth (root children are depth 1), 0 for an empty tree.
    pub fn max_depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Find the child of `parent` titled `title`.
    ///
    /// When siblings share a title the most recently inserted one wins.
    pub fn find_child(&self, parent: NodeId, title: &str) -> Option<NodeId> {
        parent
            .children(&self.arena)
            .rev()
            .find(|child| self.arena[*child].get().title.as_deref() == Some(title))
    }

    /// Resolve an ancestry path to a node. The empty path is the root.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Result<NodeId, TreeError> {
        let mut current = self.root;
        for (depth, segment) in path.iter().enumerate() {
            current = self
                .find_child(current, segment.as_ref())
                .ok_or_else(|| TreeError::lookup(&path[..=depth]))?;
        }
        Ok(current)
    }

    /// Borrow the heading at `path`.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<&HeadingNode, TreeError> {
        self.resolve(path).map(|id| self.node(id))
    }

    /// Body text stored at `path`, if any.
    pub fn text_at<S: AsRef<str>>(&self, path: &[S]) -> Result<Option<&str>, TreeError> {
        self.get(path).map(|node| node.text.as_deref())
    }

    /// Insert a heading titled `title` under the node at `path`.
    ///
    /// A sibling with the same title is replaced in place: the new node takes
    /// its position and the old subtree is dropped.
    pub fn insert_heading<S: AsRef<str>>(
        &mut self,
        path: &[S],
        title: &str,
    ) -> Result<NodeId, TreeError> {
        let parent = self.resolve(path)?;
        Ok(self.insert_child(parent, title, DuplicatePolicy::Replace))
    }

    /// Set the body text of the node at `path`, overwriting earlier text.
    pub fn attach_text<S: AsRef<str>>(&mut self, path: &[S], text: &str) -> Result<(), TreeError> {
        let id = self.resolve(path)?;
        self.set_text(id, text, TextPolicy::Replace);
        Ok(())
    }

    /// Delete the child `title` of the node at `path`, with its subtree.
    pub fn remove_heading<S: AsRef<str>>(&mut self, path: &[S], title: &str) -> Result<(), TreeError> {
        let parent = self.resolve(path)?;
        let target = self.find_child(parent, title).ok_or_else(|| {
            let mut full: Vec<&str> = path.iter().map(|s| s.as_ref()).collect();
            full.push(title);
            TreeError::lookup(full.as_slice())
        })?;
        target.remove_subtree(&mut self.arena);
        Ok(())
    }

    /// Lazy depth-first, pre-order `(depth, title)` pairs for every heading.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wiktree::tree::HeadingTree;
    /// let mut tree = HeadingTree::new();
    /// tree.insert_heading::<&str>(&[], "Noun").unwrap();
    /// tree.insert_heading(&["Noun"], "Declension").unwrap();
    /// let seen: Vec<_> = tree.traverse().collect();
    /// assert_eq!(seen, vec![(1, "Noun"), (2, "Declension")]);
    /// ```
    pub fn traverse(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.walk()
            .map(move |(depth, id)| (depth, self.node(id).title()))
    }

    /// Like [`traverse`](Self::traverse) but yields node ids.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            edges: self.root.traverse(&self.arena),
            depth: 0,
            root: self.root,
        }
    }

    pub(crate) fn insert_child(
        &mut self,
        parent: NodeId,
        title: &str,
        duplicates: DuplicatePolicy,
    ) -> NodeId {
        let node = self.arena.new_node(HeadingNode::heading(title));
        match (duplicates, self.find_child(parent, title)) {
            (DuplicatePolicy::Replace, Some(existing)) => {
                existing.insert_before(node, &mut self.arena);
                existing.remove_subtree(&mut self.arena);
            }
            _ => parent.append(node, &mut self.arena),
        }
        node
    }

    pub(crate) fn set_text(&mut self, id: NodeId, text: &str, policy: TextPolicy) {
        let node = self.arena[id].get_mut();
        match (policy, &mut node.text) {
            (TextPolicy::Append, Some(existing)) => {
                existing.push_str("\n\n");
                existing.push_str(text);
            }
            (_, slot) => *slot = Some(text.to_string()),
        }
    }
}

/// Pre-order walk over the headings of a [`HeadingTree`].
pub struct Walk<'a> {
    edges: indextree::Traverse<'a, HeadingNode>,
    depth: usize,
    root: NodeId,
}

impl Iterator for Walk<'_> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        for edge in self.edges.by_ref() {
            match edge {
                NodeEdge::Start(id) => {
                    let depth = self.depth;
                    self.depth += 1;
                    if id != self.root {
                        return Some((depth, id));
                    }
                }
                NodeEdge::End(_) => self.depth -= 1,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &[&str] = &[];

    fn sample() -> HeadingTree {
        let mut tree = HeadingTree::new();
        tree.insert_heading(ROOT, "A").unwrap();
        tree.insert_heading(&["A"], "B").unwrap();
        tree.insert_heading(ROOT, "C").unwrap();
        tree
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree = HeadingTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.max_depth(), 0);
        assert_eq!(tree.traverse().count(), 0);
        assert_eq!(tree.node(tree.root()).title, None);
    }

    #[test]
    fn test_insert_and_traverse() {
        let tree = sample();
        let seen: Vec<_> = tree.traverse().collect();
        assert_eq!(seen, vec![(1, "A"), (2, "B"), (1, "C")]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.max_depth(), 2);
    }

    #[test]
    fn test_traverse_is_restartable() {
        let tree = sample();
        let first: Vec<_> = tree.traverse().collect();
        let second: Vec<_> = tree.traverse().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_insert_under_missing_path_fails() {
        let mut tree = HeadingTree::new();
        let err = tree.insert_heading(&["Z"], "X").unwrap_err();
        assert_eq!(
            err,
            TreeError::Lookup {
                path: "Z".to_string()
            }
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn test_lookup_reports_failing_prefix() {
        let tree = sample();
        let err = tree.resolve(&["A", "Q", "R"]).unwrap_err();
        assert_eq!(
            err,
            TreeError::Lookup {
                path: "A / Q".to_string()
            }
        );
    }

    #[test]
    fn test_same_title_overwrites_in_place() {
        let mut tree = sample();
        tree.attach_text(&["A"], "old").unwrap();
        tree.insert_heading(ROOT, "A").unwrap();

        let seen: Vec<_> = tree.traverse().collect();
        assert_eq!(seen, vec![(1, "A"), (1, "C")]);
        assert_eq!(tree.text_at(&["A"]).unwrap(), None);
    }

    #[test]
    fn test_attach_text_overwrites() {
        let mut tree = sample();
        tree.attach_text(&["A", "B"], "first").unwrap();
        tree.attach_text(&["A", "B"], "second").unwrap();
        assert_eq!(tree.text_at(&["A", "B"]).unwrap(), Some("second"));
        assert_eq!(tree.text_at(&["A"]).unwrap(), None);
    }

    #[test]
    fn test_attach_text_to_root() {
        let mut tree = HeadingTree::new();
        tree.attach_text(ROOT, "y").unwrap();
        assert_eq!(tree.node(tree.root()).text.as_deref(), Some("y"));
    }

    #[test]
    fn test_remove_heading_drops_subtree() {
        let mut tree = sample();
        tree.remove_heading(ROOT, "A").unwrap();
        let seen: Vec<_> = tree.traverse().collect();
        assert_eq!(seen, vec![(1, "C")]);
        assert!(tree.resolve(&["A", "B"]).is_err());
    }

    #[test]
    fn test_remove_missing_heading_fails() {
        let mut tree = sample();
        assert_eq!(
            tree.remove_heading(&["A"], "Nope").unwrap_err(),
            TreeError::Lookup {
                path: "A / Nope".to_string()
            }
        );
        assert!(tree.remove_heading(&["Nope"], "B").is_err());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_find_child_prefers_latest_duplicate() {
        let mut tree = HeadingTree::new();
        let root = tree.root();
        let first = tree.insert_child(root, "Noun", DuplicatePolicy::Keep);
        let second = tree.insert_child(root, "Noun", DuplicatePolicy::Keep);
        assert_ne!(first, second);
        assert_eq!(tree.find_child(root, "Noun"), Some(second));
        assert_eq!(tree.children(root).count(), 2);
    }

    #[test]
    fn test_append_text_policy() {
        let mut tree = sample();
        let b = tree.resolve(&["A", "B"]).unwrap();
        tree.set_text(b, "one", TextPolicy::Append);
        tree.set_text(b, "two", TextPolicy::Append);
        assert_eq!(tree.node(b).text.as_deref(), Some("one\n\ntwo"));
    }
}
