use citations::config::{self, ServiceKind};
use citations::server;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Users, quotes and search HTTP services over a shared Redis store.
#[derive(Parser)]
#[command(name = "citations")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service to mount; overrides the SERVICE environment variable
    #[arg(short, long, value_enum)]
    service: Option<ServiceKind>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(service) = cli.service {
        config.service = service;
    }

    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level).or_else(|_| EnvFilter::try_new("info"))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().with_current_span(false).init();
    } else {
        builder.init();
    }

    Ok(())
}
