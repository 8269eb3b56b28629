use dioxus_logger::tracing::{self, Level};
use tokio::net::TcpListener;

use lectern::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;
    startup::seed_admin(&db, &config).await?;

    let state = AppState {
        db,
        hotmart_hottok: config.hotmart_hottok,
    };
    let app = router::routes().with_state(state).layer(session);

    let listener = TcpListener::bind(&config.server_address).await?;
    tracing::info!("Starting server on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
