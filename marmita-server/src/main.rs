use marmita_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv + logging)
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Marmita order server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (database + services)
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
