use crate::commands::{CmdMessage, CmdResult};
use crate::config::GuestConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = GuestConfig::load_or_default(data_dir);
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GuestConfig::load_or_default(data_dir);
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = GuestConfig::load_or_default(data_dir);
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(data_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
