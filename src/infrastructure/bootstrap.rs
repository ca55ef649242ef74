//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{
    spawn_command_listener, TelegramConfig, TelegramNotifier,
};
use crate::adapter::outbound::market::{DexScreener, PumpFun};
use crate::application::{MarketDataResolver, Tracker};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
#[cfg(feature = "telegram")]
use crate::port::inbound::tracking::WalletTracking;
use crate::port::outbound::chain::{ChainClient, LogFeed};
use crate::port::outbound::market::MarketDataSource;
use crate::port::outbound::notifier::{LogNotifier, NotifierRegistry};

/// Install the ring crypto provider for rustls. Safe to call more than once.
pub(crate) fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Market data sources in lookup order: DexScreener, then pump.fun.
pub(crate) fn build_resolver(config: &Config) -> MarketDataResolver {
    let sources: Vec<Arc<dyn MarketDataSource>> = vec![
        Arc::new(DexScreener::new(&config.market_data)),
        Arc::new(PumpFun::new(&config.market_data)),
    ];
    let resolver = MarketDataResolver::new(sources);
    info!(sources = ?resolver.source_names(), "Market data sources initialized");
    resolver
}

/// Telegram settings from `[telegram]` and its environment overrides.
#[cfg(feature = "telegram")]
fn telegram_config(config: &Config) -> Option<TelegramConfig> {
    if !config.telegram.enabled {
        return None;
    }
    let Some(bot_token) = config.telegram.bot_token.clone() else {
        warn!("Telegram enabled but TELEGRAM_BOT_TOKEN missing");
        return None;
    };
    Some(TelegramConfig {
        bot_token,
        allowed_chats: config.telegram.allowed_chats.clone(),
    })
}

/// Build notifier registry from configuration.
///
/// Also returns the Telegram settings so the command listener can be
/// started once the tracker exists.
#[cfg(feature = "telegram")]
pub(crate) fn build_notifier_registry(
    config: &Config,
) -> (NotifierRegistry, Option<TelegramConfig>) {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    let telegram = telegram_config(config);
    if let Some(tg) = &telegram {
        registry.register(Box::new(TelegramNotifier::new(tg.clone())));
        info!("Telegram notifier enabled");
    }

    (registry, telegram)
}

/// Build notifier registry from configuration (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub(crate) fn build_notifier_registry(config: &Config) -> (NotifierRegistry, Option<()>) {
    if config.telegram.enabled {
        warn!("Telegram enabled but the binary was built without the telegram feature");
    }
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));
    (registry, None)
}

/// Build the tracker and put startup wallets in its registry.
pub(crate) fn build_tracker(
    config: &Config,
    chain: Arc<dyn ChainClient>,
    feed: Arc<dyn LogFeed>,
    notifiers: NotifierRegistry,
) -> Result<Arc<Tracker>> {
    info!(notifiers = notifiers.len(), "Notifiers initialized");

    let tracker = Arc::new(Tracker::new(
        chain,
        feed,
        build_resolver(config),
        Arc::new(notifiers),
        config.classifier.clone(),
    ));

    for wallet in config.seed_wallets()? {
        tracker.seed(wallet);
    }

    Ok(tracker)
}

/// Start answering chat commands against `tracker`.
#[cfg(feature = "telegram")]
pub(crate) fn start_command_listener(telegram: Option<TelegramConfig>, tracker: &Arc<Tracker>) {
    if let Some(tg) = telegram {
        let tracking: Arc<dyn WalletTracking> = Arc::<Tracker>::clone(tracker);
        spawn_command_listener(tg, tracking);
        info!("Telegram command listener enabled");
    }
}

/// Start answering chat commands (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub(crate) fn start_command_listener(_telegram: Option<()>, _tracker: &Arc<Tracker>) {}
