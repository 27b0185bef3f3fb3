mod config;
mod routes;

use config::HostConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default port");
        HostConfig { port: config::DEFAULT_PORT }
    });

    let app = match routes::app() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "cannot build router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "sleepr-web listening");
    axum::serve(listener, app).await.expect("server failed");
}
