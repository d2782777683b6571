//! Unit tests for the signal cache

use ictscan::cache::SignalCache;
use ictscan::models::signal::{Signal, SignalReason};

fn flat(symbol: &str, tf: &str, entry: f64) -> Signal {
    Signal::flat(symbol, tf, entry, SignalReason::NoSetup)
}

#[tokio::test]
async fn test_absent_key_means_never_scanned() {
    let cache = SignalCache::new();
    assert!(cache.get("BTCUSDT", "1h").await.is_none());
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_insert_replaces_same_key_only() {
    let cache = SignalCache::new();
    cache.insert(flat("BTCUSDT", "1h", 1.0)).await;
    cache.insert(flat("BTCUSDT", "4h", 2.0)).await;

    let previous = cache.insert(flat("BTCUSDT", "1h", 3.0)).await;
    assert_eq!(previous.map(|s| s.entry), Some(1.0));

    assert_eq!(cache.get("BTCUSDT", "1h").await.unwrap().entry, 3.0);
    assert_eq!(cache.get("BTCUSDT", "4h").await.unwrap().entry, 2.0);
    assert_eq!(cache.len().await, 2);
    assert_eq!(cache.for_symbol("BTCUSDT").await.len(), 2);
}

#[tokio::test]
async fn test_clones_share_the_same_store() {
    let cache = SignalCache::new();
    let reader = cache.clone();
    cache.insert(flat("ETHUSDT", "5m", 9.0)).await;
    assert!(reader.get("ETHUSDT", "5m").await.is_some());
    assert_eq!(reader.snapshot().await["ETHUSDT"]["5m"].entry, 9.0);
}
