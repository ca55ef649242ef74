mod support;

use std::sync::Arc;

use solwatch::application::MarketDataResolver;
use solwatch::domain::{MarketMeta, UNAVAILABLE};
use solwatch::port::outbound::market::MarketDataSource;

use support::market::{meta, StaticSource};

fn resolver(sources: &[Arc<StaticSource>]) -> MarketDataResolver {
    MarketDataResolver::new(
        sources
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn MarketDataSource>)
            .collect(),
    )
}

#[tokio::test]
async fn primary_answer_is_returned_verbatim() {
    let primary = Arc::new(StaticSource::found(
        "primary",
        meta("Bonk", "BONK", "1234567.89", Some("0.0000213")),
    ));
    let secondary = Arc::new(StaticSource::found(
        "secondary",
        meta("Other", "OTH", "1", None),
    ));

    let result = resolver(&[primary.clone(), secondary.clone()])
        .resolve("mint")
        .await;

    assert_eq!(result, meta("Bonk", "BONK", "1234567.89", Some("0.0000213")));
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 0);
}

#[tokio::test]
async fn empty_primary_falls_back_to_secondary() {
    let primary = Arc::new(StaticSource::empty("primary"));
    let secondary = Arc::new(StaticSource::found(
        "secondary",
        meta("Pumped", "PMP", "42000", None),
    ));

    let result = resolver(&[primary, secondary]).resolve("mint").await;

    assert_eq!(result.symbol(), "PMP");
    assert_eq!(result.market_cap_usd(), "42000");
    assert_eq!(result.price_usd(), UNAVAILABLE);
}

#[tokio::test]
async fn failing_primary_falls_back_to_secondary() {
    let primary = Arc::new(StaticSource::failing("primary"));
    let secondary = Arc::new(StaticSource::found(
        "secondary",
        meta("Pumped", "PMP", "42000", None),
    ));

    let result = resolver(&[primary, secondary]).resolve("mint").await;

    assert_eq!(result.name(), "Pumped");
}

#[tokio::test]
async fn all_sources_failing_yields_placeholders() {
    let result = resolver(&[
        Arc::new(StaticSource::failing("primary")),
        Arc::new(StaticSource::empty("secondary")),
    ])
    .resolve("mint")
    .await;

    assert_eq!(result, MarketMeta::unavailable());
    assert_eq!(result.name(), UNAVAILABLE);
    assert_eq!(result.symbol(), UNAVAILABLE);
    assert_eq!(result.market_cap_usd(), UNAVAILABLE);
    assert_eq!(result.price_usd(), UNAVAILABLE);
}

#[tokio::test]
async fn no_sources_yields_placeholders() {
    let result = MarketDataResolver::new(vec![]).resolve("mint").await;
    assert!(result.is_unavailable());
}
