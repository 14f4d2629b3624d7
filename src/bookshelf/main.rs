use bookshelf::api::{self, BookshelfApi, BookshelfPaths, CmdResult, ConfigAction};
use bookshelf::config::BookshelfConfig;
use bookshelf::error::{BookshelfError, Result};
use bookshelf::library::NewBook;
use bookshelf::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};

const HOME_ENV: &str = "BOOKSHELF_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = BookshelfPaths {
        data_dir: resolve_data_dir(&cli)?,
    };

    // Only commands that read the collection open the library, so config and
    // init still work when the library file cannot be decoded
    let result = match cli.command {
        Some(Commands::Config { key, value }) => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            api::config(&paths, action)?
        }
        Some(Commands::Init) => api::init(&mut open_store(&paths)?, &paths)?,
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        }) => open_api(&paths)?.add_book(NewBook::new(title, author, year, genre, read))?,
        Some(Commands::Remove { title }) => open_api(&paths)?.remove_book(&title)?,
        Some(Commands::Search { keyword, by }) => {
            open_api(&paths)?.search_books(by.into(), &keyword)?
        }
        Some(Commands::List) | None => open_api(&paths)?.list_books()?,
        Some(Commands::Stats) => open_api(&paths)?.stats()?,
        Some(Commands::Save) => open_api(&paths)?.shutdown()?,
    };

    render(&result);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "bookshelf=debug"
    } else {
        "bookshelf=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookshelfError::Config("Could not determine data directory".to_string()))
}

fn open_store(paths: &BookshelfPaths) -> Result<FileStore> {
    let config = BookshelfConfig::load(&paths.data_dir)?;
    let library_path = config.library_path(&paths.data_dir);
    tracing::debug!(data_dir = %paths.data_dir.display(), library = %library_path.display(), "Resolved paths");
    Ok(FileStore::new(library_path))
}

fn open_api(paths: &BookshelfPaths) -> Result<BookshelfApi<FileStore>> {
    BookshelfApi::open(open_store(paths)?)
}

fn render(result: &CmdResult) {
    print::print_books(&result.listed_books);
    if let Some(stats) = &result.stats {
        print::print_stats(stats);
    }
    if let Some(config) = &result.config {
        print::print_config(config);
    }
    print::print_messages(&result.messages);
}
