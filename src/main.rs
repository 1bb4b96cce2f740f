use hr_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config.log_level);

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "HR server starting"
    );

    let state = ServerState::new(config.clone());
    Server::with_state(config, state).run().await
}
