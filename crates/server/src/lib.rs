pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod services;
pub mod state;

use std::net::SocketAddr;

use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config);
    let (router, api) = create_router(state);

    let app = router.merge(Scalar::with_url("/docs", api));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
