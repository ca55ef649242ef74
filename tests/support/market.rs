use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use solwatch::domain::MarketMeta;
use solwatch::error::{Error, Result};
use solwatch::port::outbound::market::MarketDataSource;

enum Answer {
    Found(MarketMeta),
    Empty,
    Failure,
}

/// Market data source with a fixed answer.
pub struct StaticSource {
    name: &'static str,
    answer: Answer,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn found(name: &'static str, meta: MarketMeta) -> Self {
        Self::with(name, Answer::Found(meta))
    }

    pub fn empty(name: &'static str) -> Self {
        Self::with(name, Answer::Empty)
    }

    pub fn failing(name: &'static str) -> Self {
        Self::with(name, Answer::Failure)
    }

    fn with(name: &'static str, answer: Answer) -> Self {
        Self {
            name,
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataSource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn lookup(&self, _mint: &str) -> Result<Option<MarketMeta>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Answer::Found(meta) => Ok(Some(meta.clone())),
            Answer::Empty => Ok(None),
            Answer::Failure => Err(Error::Connection("source down".into())),
        }
    }
}

pub fn meta(name: &str, symbol: &str, market_cap: &str, price: Option<&str>) -> MarketMeta {
    MarketMeta {
        name: Some(name.into()),
        symbol: Some(symbol.into()),
        market_cap_usd: Some(market_cap.into()),
        price_usd: price.map(Into::into),
    }
}
