use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment Variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/marmita | Working directory (database, logs) |
/// | HTTP_PORT | 8000 | HTTP API port |
/// | DELIVERY_FEE_CENTS | 1000 | Fixed delivery fee, in cents |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/marmita HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Fixed surcharge applied to DELIVERY orders, in cents
    pub delivery_fee_cents: i64,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Falls back to defaults for unset variables.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/marmita".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            delivery_fee_cents: std::env::var("DELIVERY_FEE_CENTS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override selected settings, typically for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("database")
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
