use web_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration, logging
    let config = setup_environment();

    tracing::info!(environment = %config.environment, "GoodFoods web server starting...");

    // 2. Backend gateway
    let state = ServerState::initialize(&config)?;

    // 3. Serve until Ctrl-C
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
