use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut Library<S>) -> Result<CmdResult> {
    library.shutdown()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Library saved. Goodbye!"));
    Ok(result)
}
