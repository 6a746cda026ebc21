mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{Config, DEFAULT_HEADER_PATTERN, DEFAULT_LOG_PATTERN};
pub use validation::{compile_pattern, validate_config_semantics};
