//! Per-language tables for heading normalisation and boilerplate pruning.
//!
//! Tables are loaded once (built-in defaults merged with config overrides)
//! and handed to the code that needs them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LocaleError;
use crate::tree::HeadingTree;

/// Settings for one dictionary language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable {
    /// Edit affordance label appended to rendered headings, e.g. `[edit]`.
    #[serde(default)]
    pub edit_suffix: String,
    /// Top-level headings that are page furniture rather than dictionary content.
    #[serde(default)]
    pub boilerplate: Vec<String>,
}

impl LocaleTable {
    fn new(edit_suffix: &str, boilerplate: &[&str]) -> Self {
        Self {
            edit_suffix: edit_suffix.to_string(),
            boilerplate: boilerplate.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Locale tables keyed by dictionary language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locales {
    tables: IndexMap<String, LocaleTable>,
}

impl Default for Locales {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Locales {
    pub fn builtin() -> Self {
        let mut tables = IndexMap::new();
        tables.insert(
            "en".to_string(),
            LocaleTable::new(
                "[edit]",
                &[
                    "Contents",
                    "Navigation menu",
                    "Search",
                    "Personal tools",
                    "Namespaces",
                    "Views",
                    "Navigation",
                    "Tools",
                    "Print/export",
                    "In other projects",
                    "In other languages",
                ],
            ),
        );
        tables.insert(
            "fr".to_string(),
            LocaleTable::new(
                "[modifier le wikicode]",
                &[
                    "Sommaire",
                    "Menu de navigation",
                    "Rechercher",
                    "Outils personnels",
                    "Espaces de noms",
                    "Affichages",
                    "Navigation",
                    "Outils",
                    "Imprimer / exporter",
                    "Dans d’autres projets",
                    "Dans d’autres langues",
                ],
            ),
        );
        tables.insert(
            "de".to_string(),
            LocaleTable::new(
                "[Bearbeiten]",
                &[
                    "Inhaltsverzeichnis",
                    "Navigationsmenü",
                    "Suche",
                    "Meine Werkzeuge",
                    "Namensräume",
                    "Ansichten",
                    "Navigation",
                    "Werkzeuge",
                    "Drucken/exportieren",
                    "In anderen Projekten",
                    "In anderen Sprachen",
                ],
            ),
        );
        Self { tables }
    }

    /// Replace or add tables. Overrides win over built-in entries.
    pub fn merge(mut self, overrides: &IndexMap<String, LocaleTable>) -> Self {
        for (code, table) in overrides {
            self.tables.insert(code.clone(), table.clone());
        }
        self
    }

    pub fn get(&self, code: &str) -> Result<&LocaleTable, LocaleError> {
        self.tables
            .get(code)
            .ok_or_else(|| LocaleError::UnknownLocale(code.to_string()))
    }

    /// Registered language codes, in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

/// Strips presentation-only suffixes from heading text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingNormalizer {
    edit_suffix: String,
}

impl HeadingNormalizer {
    pub fn new(edit_suffix: impl Into<String>) -> Self {
        Self {
            edit_suffix: edit_suffix.into(),
        }
    }

    pub fn for_table(table: &LocaleTable) -> Self {
        Self::new(table.edit_suffix.clone())
    }

    pub fn for_locale(locales: &Locales, code: &str) -> Result<Self, LocaleError> {
        locales.get(code).map(Self::for_table)
    }

    /// Normalise heading text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wiktree::locale::HeadingNormalizer;
    /// assert_eq!(HeadingNormalizer::new("[edit]").normalize("Bread[edit]"), "Bread");
    /// assert_eq!(
    ///     HeadingNormalizer::new("[modifier le wikicode]").normalize("Pain [modifier le wikicode]"),
    ///     "Pain"
    /// );
    /// ```
    pub fn normalize(&self, heading: &str) -> String {
        let trimmed = heading.trim();
        let stripped = if self.edit_suffix.is_empty() {
            trimmed
        } else {
            trimmed.strip_suffix(&self.edit_suffix).unwrap_or(trimmed)
        };
        stripped.trim_end().to_string()
    }
}

/// Remove the table's boilerplate headings from the top level of `tree`.
///
/// Returns how many headings were removed. Titles missing from the tree are
/// skipped.
pub fn prune_boilerplate(tree: &mut HeadingTree, table: &LocaleTable) -> usize {
    let mut removed = 0;
    for title in &table.boilerplate {
        match tree.remove_heading::<&str>(&[], title) {
            Ok(()) => removed += 1,
            Err(err) => debug!(%title, %err, "boilerplate heading not present"),
        }
    }
    removed
}
