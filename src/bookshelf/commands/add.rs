use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::{Library, NewBook};
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut Library<S>, new_book: NewBook) -> Result<CmdResult> {
    let book = library.add(new_book)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "'{}' added to your library.",
        book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
