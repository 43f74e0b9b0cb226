mod config;
mod routes;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = config::Config::from_env()?;
    if config.auth.userinfo_url.is_none() {
        tracing::warn!("AUTH_USERINFO_URL not set; every visitor is treated as signed out");
    }
    if config.auth.sign_in_url.is_none() {
        tracing::warn!("AUTH_SIGN_IN_URL not set; /sign-in answers 503");
    }
    let port = config.port;
    tracing::info!(protected = ?config.protected_paths, "configuration loaded");

    let state = state::AppState::new(config);
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "nyaya listening");
    axum::serve(listener, app).await?;
    Ok(())
}
