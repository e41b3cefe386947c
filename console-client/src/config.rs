use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_TIMING_PRECISION: usize = 9;

pub type ConsoleConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: Option<PathBuf>) -> ConsoleConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub first_player: FirstPlayerMode,
    pub show_timings: bool,
    /// Decimal places for printed durations.
    pub timing_precision: usize,
    pub verbose: bool,
    pub use_log_prefix: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.timing_precision > MAX_TIMING_PRECISION {
            return Err(format!(
                "timing_precision must be at most {}, got {}",
                MAX_TIMING_PRECISION, self.timing_precision
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Ai,
            show_timings: true,
            timing_precision: 7,
            verbose: false,
            use_log_prefix: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer, InMemoryConfigProvider};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
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
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let manager = ConfigManager::new(
            InMemoryConfigProvider::new(Some("first_player: human\nverbose: true\n".to_string())),
            YamlConfigSerializer::new(),
        );
        let config: Config = manager.get_config().unwrap();
        assert_eq!(config.first_player, FirstPlayerMode::Human);
        assert!(config.verbose);
        assert!(config.show_timings);
        assert_eq!(config.timing_precision, 7);
    }

    #[test]
    fn test_excessive_precision_is_rejected() {
        let config = Config {
            timing_precision: 12,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_file_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            first_player: FirstPlayerMode::Random,
            show_timings: false,
            ..Config::default()
        };

        let manager = get_config_manager(Some(file_path.clone()));
        manager.set_config(&config).unwrap();

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config(), Ok(config));

        let provider = FileContentConfigProvider::new(file_path.clone());
        assert!(provider.get_config_content().unwrap().is_some());
        std::fs::remove_file(file_path).unwrap();
    }
}
