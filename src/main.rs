use dotenv::dotenv;
use token_amount_mcp::{config, server, tokens::TokenRegistry, tools};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting token amount MCP server...");

    let config = config::Config::from_env()?;
    if !config.token_decimals.is_empty() {
        info!(overrides = config.token_decimals.len(), "Loaded token decimals from TOKEN_DECIMALS");
    }

    let ctx = tools::ToolContext {
        tokens: TokenRegistry::with_overrides(config.token_decimals),
    };

    server::run(ctx, tools::default_tools()).await?;

    Ok(())
}
