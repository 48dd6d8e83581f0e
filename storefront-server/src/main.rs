use storefront_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // dotenv, config, logging
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        environment = %config.environment,
        "Storefront server starting..."
    );

    // Refuses to start on an invalid fulfillment schedule
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
