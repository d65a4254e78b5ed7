use std::io::ErrorKind;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::BoardCounts;
use crate::rules::Rules;

const MAX_ENTITIES: usize = 200;
const MIN_TRAP_COUNTDOWN_MS: u64 = 100;
const MAX_TRAP_COUNTDOWN_MS: u64 = 60_000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardCounts,
    pub rules: Rules,
    pub trap_countdown_ms: u64,
    pub log_file: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardCounts::default(),
            rules: Rules::default(),
            trap_countdown_ms: 2000,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn trap_countdown(&self) -> Duration {
        Duration::from_millis(self.trap_countdown_ms)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        let counts = [
            ("walls", self.board.walls),
            ("prizes", self.board.prizes),
            ("traps", self.board.traps),
        ];
        for (name, count) in counts {
            if count > MAX_ENTITIES {
                return Err(format!("Number of {} must be at most {}", name, MAX_ENTITIES));
            }
        }
        if !(MIN_TRAP_COUNTDOWN_MS..=MAX_TRAP_COUNTDOWN_MS).contains(&self.trap_countdown_ms) {
            return Err(format!(
                "Trap countdown must be between {}ms and {}ms",
                MIN_TRAP_COUNTDOWN_MS, MAX_TRAP_COUNTDOWN_MS
            ));
        }
        self.rules.validate()
    }
}

/// Reads and validates the config; no content means defaults.
pub fn load_config<P: ConfigContentProvider>(provider: &P) -> Result<GameConfig, String> {
    let Some(content) = provider.get_config_content()? else {
        return Ok(GameConfig::default());
    };
    let config = GameConfig::from_yaml(&content)?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}
