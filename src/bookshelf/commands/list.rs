use crate::commands::{number_books, CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_books(number_books(library.books()));
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("No books added yet."));
    }
    Ok(result)
}
