use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use nestrank_api::RestApi;
use nestrank_source::{JsonDataset, ListingSource};

/// A housing listing service that ranks by amenity proximity
#[derive(Parser, Debug)]
#[command(name = "nestrank")]
#[command(about = "Serves housing listings ranked by amenity proximity", long_about = None)]
struct Args {
    /// Path to the JSON listings dataset
    #[arg(short, long, default_value = "./data/listings.json")]
    data_file: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting nestrank v{}", env!("CARGO_PKG_VERSION"));
    info!("Listings dataset: {:?}", args.data_file);
    info!("HTTP API port: {}", args.http_port);

    let source: Arc<dyn ListingSource> = Arc::new(JsonDataset::new(&args.data_file));

    info!("HTTP API: http://localhost:{}/houses", args.http_port);
    RestApi::start(source, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
