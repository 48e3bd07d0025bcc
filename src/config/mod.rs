mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, DEFAULT_LINE_LENGTH_THRESHOLD, HarnessConfig, HashConfig, LinesConfig, MirrorGroup,
    ScanConfig, TestSuite,
};
pub use validation::validate_config_semantics;
