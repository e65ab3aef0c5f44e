use anyhow::Result;
use openapi_route_catalog::{init_logging, serve, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(config.log_format);

    serve(&config).await?;
    Ok(())
}
