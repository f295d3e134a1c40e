use crate::commands::{CmdMessage, CmdResult};
use crate::config::WastewatchConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = WastewatchConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("track-interval-ms".into(), "10".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().track_interval_ms, 10);
    }

    #[test]
    fn show_key_reports_value() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("date-format".into())).unwrap();
        assert_eq!(result.messages[0].content, "date-format = %Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::Set("colour".into(), "red".into())).is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
