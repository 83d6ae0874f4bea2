use crate::error::ServerError;
use promptsearch::{DirectorySource, QuestionMatch};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on a single catalog load, in seconds
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// Root directory holding the prompt and question groups
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Prompt group directory, relative to `data_dir`
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: String,

    /// Question group directory, relative to `data_dir`
    #[serde(default = "default_questions_dir")]
    pub questions_dir: String,

    /// How multi-word queries are applied to questions
    #[serde(default)]
    pub question_match: QuestionMatch,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            load_timeout_secs: default_load_timeout_secs(),
            data_dir: default_data_dir(),
            prompts_dir: default_prompts_dir(),
            questions_dir: default_questions_dir(),
            question_match: QuestionMatch::default(),
            enable_cors: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("PROMPT_SEARCH").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        if !config.data_dir.is_dir() {
            tracing::warn!(
                data_dir = %config.data_dir.display(),
                "data directory does not exist, catalog loads will fail"
            );
        }

        Ok(config)
    }

    /// Reject settings that would make every request or reload time out
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.timeout_secs == 0 {
            return Err(ServerError::Config("timeout_secs must be at least 1".into()));
        }
        if self.load_timeout_secs == 0 {
            return Err(ServerError::Config(
                "load_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get catalog load timeout as Duration
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    /// Resource source described by the data directory settings
    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.data_dir)
            .with_prompts_dir(&self.prompts_dir)
            .with_questions_dir(&self.questions_dir)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_load_timeout_secs() -> u64 {
    10
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_prompts_dir() -> String {
    "roles".to_string()
}

fn default_questions_dir() -> String {
    "questions".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
