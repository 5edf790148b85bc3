use crate::auth::JwtConfig;

/// Payment provider credentials (key id is public, secret signs callbacks)
#[derive(Debug, Clone)]
pub struct PaymentProviderConfig {
    pub key_id: String,
    pub key_secret: String,
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | DATA_DIR | ./data | Embedded database directory |
/// | DB_NAMESPACE | atelier | Store namespace |
/// | DB_NAME | store | Store database name |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | JWT_SECRET | (generated) | Token signing secret |
/// | JWT_EXPIRATION_MINUTES | 30 | Token lifetime |
/// | PAYMENT_KEY_ID | (empty) | Provider public key id |
/// | PAYMENT_KEY_SECRET | (empty) | Provider shared secret |
#[derive(Debug, Clone)]
pub struct Config {
    /// Embedded database directory
    pub data_dir: String,
    /// Store namespace
    pub db_namespace: String,
    /// Store database name
    pub db_name: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Payment provider credentials
    pub payment: PaymentProviderConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let payment = PaymentProviderConfig {
            key_id: std::env::var("PAYMENT_KEY_ID").unwrap_or_default(),
            key_secret: std::env::var("PAYMENT_KEY_SECRET").unwrap_or_default(),
        };
        if payment.key_secret.is_empty() {
            tracing::warn!("PAYMENT_KEY_SECRET not set; payment callbacks cannot verify");
        }

        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "atelier".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "store".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            payment,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
