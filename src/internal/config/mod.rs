pub mod config;

pub use self::config::{
    get_version_info, AppConfig, EndpointConfig, Fixtures, LoggingConfig, RunnerConfig,
    SchemaConfig, VERSION,
};
