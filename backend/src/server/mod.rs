//! Server bootstrap: dependency wiring and the HTTP listener.

pub mod config;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::{
    CachingCatalogueService, CatalogueService, LocalCatalogueService,
    StaticGatewaySelectionStrategy, StubCatalogueService,
};
use crate::inbound::http::{self, HttpState};
use crate::outbound::cache::InMemoryProductCache;
use crate::outbound::fakestore::FakeStoreCatalogueService;
use crate::outbound::payment::{RazorpayGateway, StripeGateway};
use crate::outbound::persistence::{
    DbPool, PoolConfig, PoolError, SqliteCategoryRepository, SqliteProductRepository,
};

pub use config::{CatalogueBackend, ConfigError, ServerConfig};

/// Failures while wiring the server's dependencies.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

fn outbound_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
}

/// Wire the configured backend, cache, and payment gateways into the HTTP
/// state.
///
/// # Errors
///
/// Returns [`ServerError`] when the database pool, migrations, or the HTTP
/// client fail to initialise.
pub fn build_state(config: &ServerConfig) -> Result<HttpState, ServerError> {
    let client = outbound_client()?;

    let backend: Arc<dyn CatalogueService> = match config.backend {
        CatalogueBackend::Local => {
            let pool = DbPool::new(PoolConfig::new(&config.database_url))?;
            pool.run_migrations()?;
            let products = Arc::new(SqliteProductRepository::new(pool.clone()));
            let categories = Arc::new(SqliteCategoryRepository::new(pool));
            Arc::new(LocalCatalogueService::new(products, categories))
        }
        CatalogueBackend::Remote => Arc::new(FakeStoreCatalogueService::new(
            client.clone(),
            &config.fakestore_base_url,
        )),
        CatalogueBackend::Stub => Arc::new(StubCatalogueService),
    };

    let cached = Arc::new(CachingCatalogueService::new(
        backend,
        Arc::new(InMemoryProductCache::new()),
    ));

    Ok(HttpState {
        catalogue: cached,
        razorpay: Arc::new(RazorpayGateway::new(
            client,
            config.razorpay_key_id.clone(),
            config.razorpay_key_secret.clone(),
            config.payment_callback_url.clone(),
        )),
        stripe: Arc::new(StripeGateway),
        gateway_selection: Arc::new(StaticGatewaySelectionStrategy::default()),
    })
}

/// Build the state and serve HTTP until shutdown.
///
/// # Errors
///
/// Returns an error when wiring fails or the listener cannot bind.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = build_state(&config).map_err(std::io::Error::other)?;
    let data = web::Data::new(state);
    let ServerConfig {
        bind_addr, backend, ..
    } = config;

    info!(addr = %bind_addr, backend = ?backend, "starting catalogue server");
    HttpServer::new(move || App::new().app_data(data.clone()).configure(http::configure))
        .bind(&bind_addr)?
        .run()
        .await
}
