use super::DataStore;
use crate::codec;
use crate::error::{BookshelfError, Result};
use crate::model::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::instrument;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(BookshelfError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load_books(&self) -> Result<Vec<Book>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Library file does not exist yet; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(BookshelfError::Io(e)),
        };

        let books = codec::decode_all(&content)?;
        tracing::debug!(books = books.len(), "Loaded library");
        Ok(books)
    }

    #[instrument(level = "debug", skip(self, books), fields(path = %self.path.display(), books = books.len()))]
    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        let content = codec::encode_all(books)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        // Atomic write: the old file stays intact until the rename succeeds
        let tmp_path = dir.join(format!(".library-{}.tmp", Uuid::new_v4()));
        let written =
            fs::write(&tmp_path, &content).and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            // A failed write can still leave a partial tmp file behind
            let _ = fs::remove_file(&tmp_path);
            return Err(BookshelfError::Io(e));
        }

        tracing::debug!(bytes = content.len(), "Saved library");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
