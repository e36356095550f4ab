use std::{net::SocketAddr, time::Duration};

const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    /// Raw `DF_JWT_SECRET`. A per-process secret is generated when unset.
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
    /// Seeds demo data randomness for reproducible runs.
    pub random_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("Invalid DF_LISTEN_ADDR");
        let cors_allow = std::env::var("DF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("DF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("DF_STATIC_DIR").unwrap_or_else(|_| "client".into());
        let jwt_secret = std::env::var("DF_JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let token_ttl_secs: u64 = std::env::var("DF_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);
        let random_seed = std::env::var("DF_RANDOM_SEED")
            .ok()
            .and_then(|v| v.trim().parse().ok());
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            random_seed,
        }
    }
}
