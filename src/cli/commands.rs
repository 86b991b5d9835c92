use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use wiktree::tree::{BuildOptions, DuplicatePolicy, TextPolicy};

#[derive(Parser, Debug)]
#[command(name = "wiktree")]
#[command(version)]
#[command(about = "Outline a saved dictionary page and extract the text under its headings")]
#[command(
    long_about = "wiktree - Recover the section structure of a saved dictionary page.\n\n\
    Reads page HTML from a file or stdin, builds the heading tree, removes page\n\
    furniture such as \"Contents\", and prints the outline or the text under a heading.\n\n\
    Examples:\n  \
    wiktree pain.html                       # Indented outline\n  \
    wiktree --tree pain.html                # Box-drawing tree\n  \
    wiktree --tree -o json pain.html        # Nested JSON\n  \
    wiktree -s French/Noun pain.html        # Text under French > Noun\n  \
    curl -s URL | wiktree --lang fr -       # Read from stdin"
)]
pub struct Cli {
    /// Saved page HTML, or '-' for stdin
    ///
    /// If no file is given the page is read from stdin.
    pub file: Option<PathBuf>,

    /// Dictionary language code (en, fr, de, or any configured locale)
    ///
    /// Selects the heading edit suffix to strip and the boilerplate
    /// sections to remove. Defaults to the config's page.lang.
    #[arg(long = "lang", value_name = "CODE")]
    pub lang: Option<String>,

    /// List all headings as an indented outline (default mode)
    ///
    /// Overrides `-o tree`; `-o json` is still honoured.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Show heading tree structure with box-drawing characters
    #[arg(long = "tree", conflicts_with = "list")]
    pub tree: bool,

    /// Output format for --list and --tree modes
    ///
    ///   plain - Indented outline (default)
    ///   tree  - Box-drawing tree structure
    ///   json  - Nested sections with their text
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Print the text under a heading path
    ///
    /// Path segments are separated by '/'. Write '\/' for a slash inside a
    /// heading title, as in "Tools/Print\/export".
    ///
    /// Example: -s "French/Noun" prints the French noun definition
    #[arg(short = 's', long = "section", value_name = "PATH")]
    pub section: Option<String>,

    /// Keep boilerplate sections such as "Contents" and "Navigation menu"
    #[arg(long = "keep-boilerplate")]
    pub keep_boilerplate: bool,

    /// Join consecutive text blocks under a heading instead of keeping the last one
    #[arg(long = "append-text")]
    pub append_text: bool,

    /// Keep same-titled sibling headings as separate sections
    #[arg(long = "keep-duplicates")]
    pub keep_duplicates: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of configured build options.
    pub fn build_options(&self, configured: BuildOptions) -> BuildOptions {
        BuildOptions {
            text: if self.append_text {
                TextPolicy::Append
            } else {
                configured.text
            },
            duplicates: if self.keep_duplicates {
                DuplicatePolicy::Keep
            } else {
                configured.duplicates
            },
        }
    }

    /// Output format after applying --list and --tree.
    pub fn output_format(&self) -> OutputFormat {
        match (self.list, self.tree, self.output) {
            (true, _, OutputFormat::Json) => OutputFormat::Json,
            (true, _, _) => OutputFormat::Plain,
            (_, true, OutputFormat::Plain) => OutputFormat::Tree,
            (_, _, format) => format,
        }
    }

    /// Heading path given to --section, split into segments.
    pub fn section_path(&self) -> Option<Vec<String>> {
        self.section.as_deref().map(split_section_path)
    }
}

/// Split a heading path on '/', treating `\/` as a literal slash and `\\` as
/// a literal backslash. Segments are trimmed and empty ones dropped.
fn split_section_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next @ ('/' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            '/' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);

    segments
        .iter()
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline
    Plain,
    /// Box-drawing tree
    Tree,
    /// Nested JSON sections
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["wiktree", "pain.html"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("pain.html")));
        assert_eq!(cli.output, OutputFormat::Plain);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.build_options(BuildOptions::default()), BuildOptions::default());
        assert_eq!(cli.section_path(), None);
    }

    #[test]
    fn test_cli_overrides_build_options() {
        let cli = Cli::try_parse_from(["wiktree", "--append-text", "--keep-duplicates", "-vv"])
            .unwrap();
        let options = cli.build_options(BuildOptions::default());
        assert_eq!(options.text, TextPolicy::Append);
        assert_eq!(options.duplicates, DuplicatePolicy::Keep);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_section_path_splits_segments() {
        let cli = Cli::try_parse_from(["wiktree", "-s", "French / Noun/", "-"]).unwrap();
        assert_eq!(
            cli.section_path(),
            Some(vec!["French".to_string(), "Noun".to_string()])
        );
    }

    #[test]
    fn test_section_path_escaped_slash() {
        let cli = Cli::try_parse_from(["wiktree", "-s", r"Tools/Print\/export", "-"]).unwrap();
        assert_eq!(
            cli.section_path(),
            Some(vec!["Tools".to_string(), "Print/export".to_string()])
        );
        assert_eq!(split_section_path(r"a\\/b"), vec![r"a\".to_string(), "b".to_string()]);
        assert_eq!(split_section_path(r"C:\dir"), vec![r"C:\dir".to_string()]);
    }

    #[test]
    fn test_output_format_modes() {
        let format = |args: &[&str]| Cli::try_parse_from(args).unwrap().output_format();
        assert_eq!(format(&["wiktree"]), OutputFormat::Plain);
        assert_eq!(format(&["wiktree", "--tree"]), OutputFormat::Tree);
        assert_eq!(format(&["wiktree", "--tree", "-o", "json"]), OutputFormat::Json);
        assert_eq!(format(&["wiktree", "-o", "tree"]), OutputFormat::Tree);
        assert_eq!(format(&["wiktree", "--list", "-o", "tree"]), OutputFormat::Plain);
        assert_eq!(format(&["wiktree", "-l", "-o", "json"]), OutputFormat::Json);
    }

    #[test]
    fn test_list_conflicts_with_tree() {
        assert!(Cli::try_parse_from(["wiktree", "--list", "--tree"]).is_err());
    }
}
