use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use customers::application::ports::customer_repository::CustomerRepository;
use customers::bootstrap::app_context::{AppContext, AppServices};
use customers::bootstrap::config::{Config, StoreBackend};
use customers::infrastructure::db;
use customers::infrastructure::db::repositories::customer_repository_memory::InMemoryCustomerRepository;
use customers::infrastructure::db::repositories::customer_repository_sqlx::SqlxCustomerRepository;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "customers=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        store_backend = ?cfg.store_backend,
        api_port = cfg.api_port,
        "Starting customers backend"
    );

    let customer_repo: Arc<dyn CustomerRepository> = match cfg.store_backend {
        StoreBackend::Postgres => {
            let pool = db::connect_pool(&cfg.database_url, cfg.db_max_connections).await?;
            db::migrate(&pool).await?;
            Arc::new(SqlxCustomerRepository::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory customer store; data is lost on exit");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    let ctx = AppContext::new(cfg.clone(), AppServices::new(customer_repo));
    let app = customers::presentation::http::router(ctx);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    info!(%api_addr, "HTTP API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
