mod api_doc;
mod backend;
mod error;
mod handlers;
mod setup;
mod state;
mod telemetry;
mod validation;

use enhancer_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    telemetry::init_telemetry();

    let config = Config::from_env()?;

    let state = state::AppState::new(config.clone())?;
    let router = setup::routes::setup_routes(&config, state)?;

    setup::server::start_server(&config, router).await?;

    Ok(())
}
