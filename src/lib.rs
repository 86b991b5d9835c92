//! # wiktree
//!
//! A dictionary page navigator library that recovers the section structure of
//! a page from its flat sequence of headings and body blocks.
//!
//! Pages are classified into rank-tagged elements, folded into a
//! [`HeadingTree`] in a single pass, pruned of boilerplate sections, and then
//! rendered or queried for the text under a heading path.
//!
//! ## Example
//!
//! ```rust
//! use wiktree::tree::{BuildOptions, RankedElement, TreeBuilder};
//!
//! let elements = vec![
//!     RankedElement::heading(2, "Etymology"),
//!     RankedElement::content("From Latin."),
//!     RankedElement::heading(3, "Pronunciation"),
//!     RankedElement::content("/pɛ̃/"),
//!     RankedElement::heading(2, "Noun"),
//!     RankedElement::content("bread"),
//! ];
//!
//! let tree = TreeBuilder::build(elements, BuildOptions::default()).unwrap();
//! let outline: Vec<_> = tree.traverse().collect();
//! assert_eq!(outline, vec![(1, "Etymology"), (2, "Pronunciation"), (1, "Noun")]);
//! assert_eq!(tree.text_at(&["Noun"]).unwrap(), Some("bread"));
//! ```

/// Configuration module for persisting user preferences.
///
/// Provides build policies, output settings and locale overrides.
pub mod config;

/// Error types shared across the crate.
pub mod error;

/// Locale tables: heading normalisation and boilerplate denylists.
pub mod locale;

/// Parser module for dictionary pages.
///
/// Turns saved HTML into ranked elements and heading trees.
pub mod parser;

/// Heading tree data structure, builder and renderers.
pub mod tree;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{ConfigError, DocumentError, LocaleError, TreeError};
pub use locale::{HeadingNormalizer, LocaleTable, Locales, prune_boilerplate};
pub use parser::{parse_file, parse_html};
pub use tree::{HeadingNode, HeadingTree, RankedElement, TreeBuilder};
