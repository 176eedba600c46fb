pub mod config_service;
pub mod paths;
pub mod storage;
pub mod toml_flag_store;

pub use crate::config_service::ConfigService;
pub use crate::paths::MomoPaths;
pub use crate::toml_flag_store::TomlFlagStore;
