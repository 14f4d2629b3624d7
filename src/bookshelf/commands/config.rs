use crate::commands::{BookshelfPaths, CmdMessage, CmdResult};
use crate::config::BookshelfConfig;
use crate::error::{BookshelfError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json`. Never touches the library file.
pub fn run(paths: &BookshelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = BookshelfConfig::load(dir)?;

    let outcome = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => config.get(&key).map(CmdMessage::info),
        ConfigAction::Set(key, value) => config
            .set(&key, &value)
            .and_then(|()| config.save(dir))
            .and_then(|()| config.get(&key))
            .map(|value| CmdMessage::success(format!("{} set to {}", key, value))),
    };

    let mut result = CmdResult::default();
    match outcome {
        Ok(message) => result.add_message(message),
        // Unknown keys and rejected values are reported, not raised
        Err(BookshelfError::Config(reason)) => result.add_message(CmdMessage::error(reason)),
        Err(e) => return Err(e),
    }
    Ok(result)
}
