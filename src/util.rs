use tracing_subscriber::{fmt, EnvFilter};

/// Load dotenv and initialize structured tracing based on RUST_LOG.
///
/// - An explicit env file path may be given via ENV_FILE
/// - Otherwise the default `.env` discovery in the working directory applies
/// - Existing variables are never overwritten
///
/// Logs go to stderr so stdout carries only the answer. The default filter
/// is `warn`.
pub fn init_tracing() {
    let mut env_source: String = "none".into();
    if let Ok(p) = std::env::var("ENV_FILE") {
        let p = p.trim();
        if !p.is_empty() && std::path::Path::new(p).is_file() && dotenvy::from_filename(p).is_ok()
        {
            env_source = format!("{p} (ENV_FILE)");
        }
    }

    if env_source == "none" && dotenvy::dotenv().is_ok() {
        env_source = ".env".into();
    }

    // Initialize tracing (respects RUST_LOG potentially provided by the env file)
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let subscriber = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::debug!("Environment loaded from: {}", env_source);
}

/// Build the HTTP client used for the API call.
///
/// Timeouts and proxies are left at reqwest's defaults (reqwest already
/// honors HTTP_PROXY / HTTPS_PROXY).
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(format!("shellbot/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
