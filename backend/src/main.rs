use number_classifier_backend::{api, config, fun_fact::NumbersApi, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (dev convenience)
    let _ = dotenvy::dotenv();

    let cfg = config::Config::from_env()?;

    // Tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    if cfg.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let fun_facts = NumbersApi::new(&cfg.fun_fact_base_url, cfg.fun_fact_timeout)?;
    tracing::info!(
        "Fun facts from {} (timeout {:?})",
        cfg.fun_fact_base_url,
        cfg.fun_fact_timeout
    );

    let app = api::router(AppState::new(fun_facts), &cfg.cors);

    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr).await?;
    tracing::info!("Listening on {}", cfg.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
