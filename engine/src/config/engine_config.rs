use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::games::tictactoe::Difficulty;
use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const DEFAULT_BOT_DELAY_MS: u64 = 500;
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

pub fn get_config_manager(
    path: impl AsRef<Path>,
) -> ConfigManager<FileContentConfigProvider, EngineConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Pause before the automated player answers a human move.
    pub bot_delay_ms: u64,
    /// Fixed RNG seed; a random one is drawn per session when absent.
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
    pub log_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            seed: None,
            log_prefix: None,
            log_enabled: true,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "Bot delay must be at most {} ms, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        if let Some(ref prefix) = self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}
