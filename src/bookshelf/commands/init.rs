use crate::commands::{BookshelfPaths, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;

/// Creates the data directory and writes an empty library file if none
/// exists. An existing file is left as is, readable or not.
pub fn run<S: DataStore>(store: &mut S, paths: &BookshelfPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;

    let location = store.location();
    let mut result = CmdResult::default();
    if location.exists() {
        result.add_message(CmdMessage::info(format!(
            "Library already exists at {}",
            location.display()
        )));
    } else {
        store.save_books(&[])?;
        result.add_message(CmdMessage::success(format!(
            "Initialized library at {}",
            location.display()
        )));
    }
    Ok(result)
}
