use bytestash::StashError;
use bytestash::config::Config;
use bytestash::db::{SnippetStore, connect_lazy};
use bytestash::server::router::{StashState, stash_router};
use bytestash::utils::logging::{init_tracing, redact};
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::info;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), StashError> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    init_tracing(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.basic.database_url,
        max_connections = cfg.basic.max_connections,
        loglevel = %cfg.basic.loglevel,
        api_key = %redact(&cfg.basic.api_key),
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        cors_origins = ?cfg.cors.allow_origins,
    );

    let pool = connect_lazy(&cfg.basic.database_url, cfg.basic.max_connections)?;
    let state = StashState::new(
        SnippetStore::new(pool.clone()),
        Arc::from(cfg.basic.api_key.as_str()),
    );
    let app = stash_router(state, &cfg.cors);

    let addr = SocketAddr::from((cfg.basic.listen_addr, cfg.basic.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
