use goessync::store::{anonymous_client, S3Store};
use goessync::{run_sync, SyncConfig};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("goessync=info")
        .init();

    // One fixed run; the bucket, product, and date range are compiled in.
    let config = SyncConfig::default();

    info!("GoesSync - GOES-17 observation file mirror");
    info!("Bucket: {}", config.bucket);
    info!("Product: {}", config.base_prefix);
    info!(
        "Range: {} to {} (exclusive)",
        config.range.start, config.range.end
    );
    info!("Local root: {:?}", config.local_root);

    let store = S3Store::new(anonymous_client().await);

    match run_sync(&store, &config).await {
        Ok(()) => {
            info!("Mirror run completed");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
