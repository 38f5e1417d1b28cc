use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use veronese_server::{AppConfig, start_server};

#[derive(Parser, Debug)]
#[command(author, version, about = "Veronese content API server", long_about = None)]
struct Args {
    /// Address to bind (e.g. "0.0.0.0:8787")
    #[arg(short, long, default_value = "0.0.0.0:8787")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env()?.with_bind(args.bind);

    info!(
        bind = %config.bind,
        site = %config.public_site_url,
        remote_store = config.store.is_some(),
        "Starting Veronese API server"
    );

    start_server(config).await?;
    Ok(())
}
