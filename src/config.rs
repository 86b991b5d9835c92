use crate::error::ConfigError;
use crate::locale::{LocaleTable, Locales};
use crate::tree::BuildOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,

    /// How elements are folded into the heading tree
    #[serde(default)]
    pub build: BuildOptions,

    #[serde(default)]
    pub output: OutputConfig,

    /// Per-language overrides merged over the built-in locale tables
    #[serde(default)]
    pub locales: IndexMap<String, LocaleTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Dictionary language used when `--lang` is not given
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Remove boilerplate headings such as "Contents" (default: true)
    #[serde(default = "default_prune_boilerplate")]
    pub prune_boilerplate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces per nesting level in the plain outline
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            prune_boilerplate: default_prune_boilerplate(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_prune_boilerplate() -> bool {
    true
}

fn default_indent() -> usize {
    4
}

impl Config {
    /// Get the XDG-style config file path (~/.config/wiktree/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("wiktree").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/wiktree/config.toml
    /// - Linux: ~/.config/wiktree/config.toml
    /// - Windows: %APPDATA%/wiktree/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wiktree").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/wiktree first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        {
            if let Some(xdg_path) = Self::xdg_config_path() {
                if let Ok(config) = Self::load_from(&xdg_path) {
                    return config;
                }
            }
        }

        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path. Unlike [`load`](Self::load), a
    /// missing or invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in locale tables with this config's overrides applied
    pub fn locales(&self) -> Locales {
        Locales::builtin().merge(&self.locales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{DuplicatePolicy, TextPolicy};

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.page.lang, "en");
        assert!(config.page.prune_boilerplate);
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.build, BuildOptions::default());
        assert!(config.locales().get("fr").is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[page]
lang = "fr"

[build]
text = "append"
duplicates = "keep"

[output]
indent = 2

[locales.es]
edit_suffix = "[editar]"
boilerplate = ["Menú de navegación"]
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.page.lang, "fr");
        assert!(config.page.prune_boilerplate);
        assert_eq!(config.build.text, TextPolicy::Append);
        assert_eq!(config.build.duplicates, DuplicatePolicy::Keep);
        assert_eq!(config.output.indent, 2);

        let locales = config.locales();
        assert_eq!(locales.get("es").unwrap().edit_suffix, "[editar]");
        assert_eq!(locales.get("en").unwrap().edit_suffix, "[edit]");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[build]\ntext = \"shuffle\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
