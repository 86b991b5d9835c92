//! Input elements for the tree builder.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Deepest heading level the builder accepts (`<h6>`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// What an element contributes to the tree.
///
/// Content has no level of its own: it always belongs to the deepest
/// heading that is open when it is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementKind {
    Heading { level: u8 },
    Content,
}

/// A single classified element of a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedElement {
    #[serde(flatten)]
    pub kind: ElementKind,
    pub text: String,
}

impl RankedElement {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Heading { level },
            text: text.into(),
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Content,
            text: text.into(),
        }
    }

    /// Classify an HTML tag name.
    ///
    /// `h<N>` becomes a heading of level `N` (range checked by the builder),
    /// `p`, `ul` and `ol` become content. Any other tag is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wiktree::tree::{ElementKind, RankedElement};
    /// let el = RankedElement::from_tag("h3", "Noun").unwrap();
    /// assert_eq!(el.kind, ElementKind::Heading { level: 3 });
    /// assert!(RankedElement::from_tag("table", "x").is_err());
    /// ```
    pub fn from_tag(tag: &str, text: impl Into<String>) -> Result<Self, TreeError> {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "p" | "ul" | "ol" => Ok(Self::content(text)),
            _ => tag
                .strip_prefix('h')
                .filter(|digits| {
                    !digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit())
                })
                .and_then(|digits| digits.parse::<u8>().ok())
                .map(|level| Self::heading(level, text))
                .ok_or_else(|| TreeError::MalformedInput(format!("unrecognised element <{tag}>"))),
        }
    }

    /// Heading level, or `None` for content.
    pub fn level(&self) -> Option<u8> {
        match self.kind {
            ElementKind::Heading { level } => Some(level),
            ElementKind::Content => None,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, ElementKind::Heading { .. })
    }
}
