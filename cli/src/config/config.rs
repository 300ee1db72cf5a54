use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::FirstPlayerMode;

use super::{LogConfig, MarkerConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// `None` asks at start-up.
    pub first_player: Option<FirstPlayerMode>,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub save_on_exit: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.markers.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_cli_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            first_player: Some(FirstPlayerMode::Random),
            markers: MarkerConfig {
                user: 'U',
                agent: 'A',
                empty: '.',
            },
            log: LogConfig {
                enabled: true,
                prefix: Some("ttt".to_string()),
            },
            save_on_exit: true,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh = get_config_manager(Some(file_path.as_path()));
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(Path::new("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider.set_config_content("first_player: Agent\n").unwrap();

        let manager = get_config_manager(Some(file_path.as_path()));
        let loaded = manager.get_config().unwrap();
        assert_eq!(loaded.first_player, Some(FirstPlayerMode::Agent));
        assert_eq!(loaded.markers, MarkerConfig::default());
        assert!(!loaded.log.enabled);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_duplicate_markers_cant_be_read() {
        let invalid_config_content = r#"
            first_player: User
            markers:
              user: X
              agent: X
              empty: " "
        "#;

        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider.set_config_content(invalid_config_content).unwrap();

        let manager = get_config_manager(Some(file_path.as_path()));
        let get_result = manager.get_config();
        assert!(get_result.is_err());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_blank_log_prefix_is_invalid() {
        let config = Config {
            log: LogConfig {
                enabled: true,
                prefix: Some("  ".to_string()),
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
