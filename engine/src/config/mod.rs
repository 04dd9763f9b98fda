mod config_content_provider;
mod config_manager;
mod config_serializer;
mod engine_config;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, StaticContentConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use engine_config::{DEFAULT_BOT_DELAY_MS, EngineConfig, MAX_BOT_DELAY_MS, get_config_manager};
pub use validate::Validate;
