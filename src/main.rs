//! Replay Cache demo
//!
//! Stores a handful of values through the instrumented cache, reads them
//! back, and prints the recorded call transcript.

use replay_cache::cache::STORE_OP;
use replay_cache::{Cache, Config};

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the replay cache demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load size limits from environment variables
/// 3. Create the cache over a fresh in-memory backend
/// 4. Store one value of each supported type
/// 5. Read the values back through the typed accessors
/// 6. Print the recorded call transcript to stdout
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting replay cache demo");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: max_key_length={}, max_value_size={}",
        config.max_key_length, config.max_value_size
    );

    let cache = Cache::with_config(&config)?;

    // Every store call below is counted and history-recorded
    let text_key = cache.store("foo").await?;
    let int_key = cache.store(42i64).await?;
    let float_key = cache.store(3.14).await?;
    let bytes_key = cache.store(vec![0xdeu8, 0xad, 0xbe, 0xef]).await?;

    info!("get_string({}) = {:?}", text_key, cache.get_string(&text_key).await?);
    info!("get_integer({}) = {}", int_key, cache.get_integer(&int_key).await?);
    info!("get_string({}) = {:?}", float_key, cache.get_string(&float_key).await?);
    info!(
        "get({}) = {:?}",
        bytes_key,
        cache.get(&bytes_key).await?
    );

    let record = cache.operation_record(STORE_OP).await?;
    debug!("Operation record: {}", serde_json::to_string(&record)?);

    cache.replay(STORE_OP).await?;

    info!("Demo complete");
    Ok(())
}
