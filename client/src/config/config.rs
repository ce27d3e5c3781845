use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::{DEFAULT_COMPUTER_MARK, Difficulty, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise the config next to the executable.
pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub computer_opponent: bool,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_computer_mark")]
    pub computer_mark: Mark,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_computer_mark() -> Mark {
    DEFAULT_COMPUTER_MARK
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_mark == Mark::Empty {
            return Err("computer_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_opponent: false,
            difficulty: Difficulty::Normal,
            computer_mark: DEFAULT_COMPUTER_MARK,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer;
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let serializer = YamlConfigSerializer;
        let config: Config = serializer.deserialize("difficulty: hard\n").unwrap();

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.computer_mark, Mark::O);
        assert!(!config.computer_opponent);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let config = Config {
            computer_opponent: true,
            difficulty: Difficulty::Hard,
            computer_mark: Mark::X,
            seed: Some(1234),
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh = get_config_manager(Some(file_path.as_path()));
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_empty_computer_mark_is_rejected() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content("computer_mark: Empty\n")
            .unwrap();

        let err = get_config_manager(Some(file_path.as_path())).get_config().unwrap_err();
        assert!(err.contains("computer_mark"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(Path::new("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }
}
