use std::time::Duration;

use crate::config::EngineConfig;
use super::types::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    pub bot_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for TicTacToeSessionSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
        }
    }
}
