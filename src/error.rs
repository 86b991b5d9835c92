//! Error types for tree construction, page parsing and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or editing a heading tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A caller-supplied ancestry path or title did not resolve to a node.
    #[error("no heading at path '{path}'")]
    Lookup { path: String },

    /// An element that the builder cannot place in the tree.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl TreeError {
    pub(crate) fn lookup<S: AsRef<str>>(segments: &[S]) -> Self {
        let path = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" / ");
        TreeError::Lookup { path }
    }
}

/// Errors raised by the locale tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// No table is registered for the dictionary language code.
    #[error("no locale table for language code '{0}'")]
    UnknownLocale(String),
}

/// Errors raised while turning a page into a heading tree.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The page could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTML could not be parsed at all.
    #[error("failed to parse HTML: {0}")]
    Html(String),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors raised when loading an explicit configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::Config`].
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
