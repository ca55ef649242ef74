use std::sync::Arc;

use solwatch::application::{MarketDataResolver, Tracker};
use solwatch::domain::ClassifierConfig;
use solwatch::port::outbound::market::MarketDataSource;

use super::chain::MemoryChain;
use super::feed::ScriptedFeed;
use super::market::{meta, StaticSource};
use super::notifier::RecordingNotifier;

/// A tracker wired to in-memory doubles.
pub struct Harness {
    pub tracker: Arc<Tracker>,
    pub chain: Arc<MemoryChain>,
    pub feed: Arc<ScriptedFeed>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_chain(MemoryChain::new())
    }

    pub fn with_chain(chain: MemoryChain) -> Self {
        let chain = Arc::new(chain);
        let feed = Arc::new(ScriptedFeed::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let sources: Vec<Arc<dyn MarketDataSource>> = vec![Arc::new(StaticSource::found(
            "static",
            meta("Bonk", "BONK", "1500000", Some("0.00002")),
        ))];

        let tracker = Arc::new(Tracker::new(
            chain.clone(),
            feed.clone(),
            MarketDataResolver::new(sources),
            notifier.clone(),
            ClassifierConfig::default(),
        ));

        Self {
            tracker,
            chain,
            feed,
            notifier,
        }
    }
}
