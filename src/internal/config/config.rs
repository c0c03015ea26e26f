use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";
pub const DEFAULT_SCHEMAS_DIR: &str = "json_schemas";

/// Get version information
pub fn get_version_info() -> String {
    let git_describe = option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");

    format!(
        "reqres-suite version {} ({})\n\
         Rust: {}",
        VERSION, git_describe, rustc_semver
    )
}

/// Where requests go and what every request carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Headers added to every request unless the case sets its own value
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            headers: HashMap::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default = "default_schemas_dir")]
    pub dir: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            dir: default_schemas_dir(),
        }
    }
}

fn default_schemas_dir() -> String {
    DEFAULT_SCHEMAS_DIR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of cases allowed in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Only cases whose name contains this text are run
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            filter: None,
        }
    }
}

fn default_concurrency() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub append_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            color: true,
            output_path: None,
            append_to_file: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

/// Literal values pinned to the reqres mock dataset.
///
/// Defaults match the public service; point the suite at another deployment
/// by overriding them in the config file or environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default = "default_user_ids")]
    pub user_ids: Vec<u64>,
    #[serde(default = "default_missing_user_id")]
    pub missing_user_id: u64,
    #[serde(default = "default_put_user_id")]
    pub put_user_id: u64,
    #[serde(default = "default_patch_user_id")]
    pub patch_user_id: u64,
    /// Page used by the list and delete cases
    #[serde(default = "default_list_page")]
    pub list_page: u64,
    /// Page the pagination case asks for and expects echoed back
    #[serde(default = "default_pagination_page")]
    pub pagination_page: u64,
    #[serde(default = "default_person_name")]
    pub person_name: String,
    #[serde(default = "default_create_job")]
    pub create_job: String,
    #[serde(default = "default_update_job")]
    pub update_job: String,
    #[serde(default = "default_register_email")]
    pub register_email: String,
    #[serde(default = "default_register_password")]
    pub register_password: String,
    #[serde(default = "default_register_id")]
    pub register_id: u64,
    #[serde(default = "default_register_token")]
    pub register_token: String,
    #[serde(default = "default_unregistered_email")]
    pub unregistered_email: String,
    #[serde(default = "default_per_page")]
    pub default_per_page: u64,
    #[serde(default = "default_total")]
    pub total_users: u64,
    #[serde(default = "default_delay")]
    pub delay_secs: u64,
    #[serde(default = "default_paging_page")]
    pub paging_page: u64,
    #[serde(default = "default_paging_per_page")]
    pub paging_per_page: u64,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            user_ids: default_user_ids(),
            missing_user_id: default_missing_user_id(),
            put_user_id: default_put_user_id(),
            patch_user_id: default_patch_user_id(),
            list_page: default_list_page(),
            pagination_page: default_pagination_page(),
            person_name: default_person_name(),
            create_job: default_create_job(),
            update_job: default_update_job(),
            register_email: default_register_email(),
            register_password: default_register_password(),
            register_id: default_register_id(),
            register_token: default_register_token(),
            unregistered_email: default_unregistered_email(),
            default_per_page: default_per_page(),
            total_users: default_total(),
            delay_secs: default_delay(),
            paging_page: default_paging_page(),
            paging_per_page: default_paging_per_page(),
        }
    }
}

fn default_user_ids() -> Vec<u64> {
    vec![1, 2, 3]
}
fn default_missing_user_id() -> u64 {
    13
}
fn default_put_user_id() -> u64 {
    3
}
fn default_patch_user_id() -> u64 {
    2
}
fn default_list_page() -> u64 {
    2
}
fn default_pagination_page() -> u64 {
    1
}
fn default_person_name() -> String {
    "Mariya Zhurova".to_string()
}
fn default_create_job() -> String {
    "QA Engineer".to_string()
}
fn default_update_job() -> String {
    "QA Automation Engineer".to_string()
}
fn default_register_email() -> String {
    "eve.holt@reqres.in".to_string()
}
fn default_register_password() -> String {
    "pistol".to_string()
}
fn default_register_id() -> u64 {
    4
}
fn default_register_token() -> String {
    "QpwL5tke4Pnpja7X4".to_string()
}
fn default_unregistered_email() -> String {
    "sydney@fife".to_string()
}
fn default_per_page() -> u64 {
    6
}
fn default_total() -> u64 {
    12
}
fn default_delay() -> u64 {
    3
}
fn default_paging_page() -> u64 {
    4
}
fn default_paging_per_page() -> u64 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub schemas: SchemaConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub fixtures: Fixtures,
}

impl AppConfig {
    /// Load from the default locations plus `REQRES_SUITE__*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load like [`AppConfig::load`], with `extra` (when given) as a required
    /// file taking precedence over the default locations
    pub fn load_with(extra: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("reqres-suite").required(false))
            .add_source(File::with_name("/etc/reqres-suite/config").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("REQRES_SUITE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("fixtures.user_ids"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.base_url.is_empty() {
            return Err(ConfigError::Message("endpoint.base_url is required".to_string()));
        }
        if self.endpoint.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "endpoint.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.runner.concurrency == 0 {
            return Err(ConfigError::Message(
                "runner.concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
