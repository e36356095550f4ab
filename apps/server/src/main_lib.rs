use std::sync::Arc;

use argon2::password_hash::rand_core::{OsRng, RngCore};
use deedflow_core::{
    markets::{MarketService, MarketServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    properties::{PropertyService, PropertyServiceTrait},
    users::{UserService, UserServiceTrait},
    utils::{time_utils::current_month, RandomSource, SeededRandomSource, ThreadRandomSource},
};
use deedflow_storage_memory::{
    markets::MarketRepository, portfolio::PortfolioRepository, properties::PropertyRepository,
    seed::seed_demo_data, users::UserRepository, MemoryStore,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::{decode_secret_key, Argon2PasswordHasher, AuthManager};
use crate::config::Config;

pub struct AppState {
    pub property_service: Arc<dyn PropertyServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub market_service: Arc<dyn MarketServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("DF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn resolve_jwt_secret(config: &Config) -> anyhow::Result<Vec<u8>> {
    match &config.jwt_secret {
        Some(raw) => decode_secret_key(raw),
        None => {
            tracing::warn!(
                "DF_JWT_SECRET is not set; using a per-process secret. Tokens will not survive a restart."
            );
            let mut secret = vec![0u8; 32];
            OsRng.fill_bytes(&mut secret);
            Ok(secret)
        }
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let random: Arc<dyn RandomSource> = match config.random_seed {
        Some(seed) => {
            tracing::info!("Using seeded randomness (seed {})", seed);
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRandomSource),
    };

    let store = Arc::new(MemoryStore::new());
    seed_demo_data(&store, current_month(), random.as_ref())?;

    let property_repository = Arc::new(PropertyRepository::new(store.clone()));
    let portfolio_repository = Arc::new(PortfolioRepository::new(store.clone()));
    let market_repository = Arc::new(MarketRepository::new(store.clone()));
    let user_repository = Arc::new(UserRepository::new(store));

    let property_service = Arc::new(PropertyService::new(
        property_repository.clone(),
        random.clone(),
    ));
    let portfolio_service = Arc::new(PortfolioService::new(
        portfolio_repository,
        property_repository.clone(),
        random,
    ));
    let market_service = Arc::new(MarketService::new(market_repository));
    let user_service = Arc::new(UserService::new(
        user_repository,
        property_repository,
        Arc::new(Argon2PasswordHasher),
    ));

    let jwt_secret = resolve_jwt_secret(config)?;
    let auth = Arc::new(AuthManager::new(&jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        property_service,
        portfolio_service,
        market_service,
        user_service,
        auth,
    }))
}
