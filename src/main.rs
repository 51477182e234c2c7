use tracing::info;
use tracing_subscriber::EnvFilter;

use parish::{config::Config, model::app::AppState, router, service::pdf::RendererClient, startup};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to set up database");
    let renderer = RendererClient::new(&config.renderer_url);

    let state = AppState {
        db,
        renderer,
        storage_bucket_url: config.storage_bucket_url.clone(),
    };

    let app = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .expect("Failed to bind listen address");

    info!("Listening on {}", config.listen_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .expect("Server error");
}
