use bookshelf::model::SearchField;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version = get_version())]
#[command(about = "Keep track of the books you own and the ones you've read", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $BOOKSHELF_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the library
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        /// Year published
        year: u32,
        genre: String,

        /// Mark the book as already read
        #[arg(long)]
        read: bool,
    },

    /// Remove the first book with the given title (case-insensitive)
    #[command(alias = "rm")]
    Remove { title: String },

    /// Search by title or author
    Search {
        /// Text to look for; empty matches everything
        #[arg(default_value = "")]
        keyword: String,

        /// Which field to search
        #[arg(long, value_enum, default_value_t = SearchBy::Title)]
        by: SearchBy,
    },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Show reading statistics
    Stats,

    /// Write the library to disk
    Save,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., library-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty library
    Init,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Title,
    Author,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Title => SearchField::Title,
            SearchBy::Author => SearchField::Author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_read_flag() {
        let cli = Cli::try_parse_from([
            "bookshelf", "add", "Dune", "Herbert", "1965", "SciFi", "--read",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                title, year, read, ..
            }) => {
                assert_eq!(title, "Dune");
                assert_eq!(year, 1965);
                assert!(read);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_year() {
        assert!(Cli::try_parse_from(["bookshelf", "add", "Dune", "Herbert", "soon", "SciFi"]).is_err());
    }

    #[test]
    fn search_defaults_to_title_and_empty_keyword() {
        let cli = Cli::try_parse_from(["bookshelf", "search"]).unwrap();
        match cli.command {
            Some(Commands::Search { keyword, by }) => {
                assert_eq!(keyword, "");
                assert_eq!(by, SearchBy::Title);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn search_by_author() {
        let cli = Cli::try_parse_from(["bookshelf", "search", "tolkien", "--by", "author"]).unwrap();
        match cli.command {
            Some(Commands::Search { by, .. }) => {
                assert_eq!(SearchField::from(by), SearchField::Author)
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["bookshelf", "ls", "--dir", "/tmp/shelf"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/shelf")));
    }
}
