/// Storefront configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_NAME | Cafe Storefront | Store display name |
/// | CURRENCY_SYMBOL | ₱ | Symbol shown next to amounts |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (unset) | Directory for daily rotated log files |
///
/// # Example
///
/// ```ignore
/// STORE_NAME="Joe's" LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Store display name
    pub store_name: String,
    /// Symbol shown next to amounts
    pub currency_symbol: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Tracing level filter
    pub log_level: String,
    /// Directory for rotated log files; stderr only when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "Cafe Storefront".into()),
            currency_symbol: std::env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "₱".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_present() {
        let config = Config::from_env();
        assert!(!config.store_name.is_empty());
        assert!(!config.currency_symbol.is_empty());
        assert!(!config.log_level.is_empty());
    }
}
