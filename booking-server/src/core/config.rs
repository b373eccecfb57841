use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden via environment variable:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/booking-server | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | NOTIFY_ENDPOINT | (unset) | Email notification function base URL |
/// | PAYMENT_ENDPOINT | (unset) | Payment checkout function base URL |
/// | SERVICE_KEY | (unset) | Bearer key sent to the external functions |
///
/// NOTIFY_ENDPOINT and PAYMENT_ENDPOINT are optional: when unset the
/// corresponding side effect is skipped (notifications) or rejected
/// (checkout), which is the normal setup for local development.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Base URL of the notification (email) function
    pub notify_endpoint: Option<String>,
    /// Base URL of the payment checkout function
    pub payment_endpoint: Option<String>,
    /// Service key for the external functions
    pub service_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/booking-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            notify_endpoint: std::env::var("NOTIFY_ENDPOINT").ok(),
            payment_endpoint: std::env::var("PAYMENT_ENDPOINT").ok(),
            service_key: std::env::var("SERVICE_KEY").ok(),
        }
    }

    /// Override the paths and port, keeping the rest from the environment.
    ///
    /// Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory for rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the working directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
