//! Task API server binary.
//!
//! Configuration comes from the environment:
//!
//! - `TASKS_ADDR`: listen address, defaulting to `127.0.0.1:5000`.
//! - `DATABASE_URL`: `PostgreSQL` connection string; when unset the server
//!   falls back to a process-local in-memory store.
//!
//! A store connection failure aborts startup with a non-zero exit status.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tasklane::api::{AppState, create_router, serve};
use tasklane::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Errors that abort server startup.
#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("database connection failed: {0}")]
    Database(#[from] diesel::r2d2::PoolError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr_raw = env::var("TASKS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let addr: SocketAddr = addr_raw.parse().map_err(|source| ServerError::InvalidAddr {
        addr: addr_raw.clone(),
        source,
    })?;

    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = Pool::builder().build(ConnectionManager::<PgConnection>::new(database_url))?;
            info!("connected to PostgreSQL store");
            run(PostgresTaskRepository::new(pool), addr).await
        }
        Err(_) => {
            warn!("DATABASE_URL not set; tasks will not survive a restart");
            run(InMemoryTaskRepository::new(), addr).await
        }
    }
}

async fn run<R>(repository: R, addr: SocketAddr) -> Result<(), ServerError>
where
    R: TaskRepository + 'static,
{
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    let router = create_router(AppState::new(service));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    Ok(serve(listener, router).await?)
}
