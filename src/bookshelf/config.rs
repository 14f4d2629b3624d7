use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIBRARY_FILE: &str = "library.txt";

pub const LIBRARY_FILE_KEY: &str = "library-file";

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// Library file name, relative to the data directory unless absolute
    #[serde(default = "default_library_file")]
    pub library_file: String,
}

fn default_library_file() -> String {
    DEFAULT_LIBRARY_FILE.to_string()
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
        }
    }
}

impl BookshelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        match fs::read_to_string(&config_path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(BookshelfError::Io(e)),
        }
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;
        fs::write(
            config_dir.join(CONFIG_FILENAME),
            serde_json::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    /// Full path of the library file for a given data directory
    pub fn library_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.library_file)
    }

    pub fn keys() -> &'static [&'static str] {
        &[LIBRARY_FILE_KEY]
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            LIBRARY_FILE_KEY => Ok(self.library_file.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            LIBRARY_FILE_KEY => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(BookshelfError::Config(format!(
                        "{} must not be empty",
                        LIBRARY_FILE_KEY
                    )));
                }
                self.library_file = value.to_string();
                Ok(())
            }
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> BookshelfError {
    BookshelfError::Config(format!("Unknown config key: {}", key))
}
