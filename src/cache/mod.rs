//! In-memory store of the latest signal per (symbol, timeframe)

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::signal::Signal;

pub type SignalMap = HashMap<String, HashMap<String, Signal>>;

/// Latest signal per symbol and timeframe.
///
/// Cloning yields another handle onto the same store. Each write replaces one
/// entry under the write lock, so readers never see a partially written
/// signal. No history is kept; a missing key means the pair was never scored.
#[derive(Clone, Default)]
pub struct SignalCache {
    inner: Arc<RwLock<SignalMap>>,
}

impl SignalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `signal` under its own (symbol, timeframe), replacing any prior entry.
    pub async fn insert(&self, signal: Signal) -> Option<Signal> {
        let mut map = self.inner.write().await;
        map.entry(signal.symbol.clone())
            .or_default()
            .insert(signal.timeframe.clone(), signal)
    }

    pub async fn get(&self, symbol: &str, timeframe: &str) -> Option<Signal> {
        let map = self.inner.read().await;
        map.get(symbol).and_then(|by_tf| by_tf.get(timeframe)).cloned()
    }

    /// All timeframes cached for one symbol
    pub async fn for_symbol(&self, symbol: &str) -> HashMap<String, Signal> {
        let map = self.inner.read().await;
        map.get(symbol).cloned().unwrap_or_default()
    }

    pub async fn snapshot(&self) -> SignalMap {
        self.inner.read().await.clone()
    }

    /// Number of cached (symbol, timeframe) entries
    pub async fn len(&self) -> usize {
        let map = self.inner.read().await;
        map.values().map(HashMap::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
