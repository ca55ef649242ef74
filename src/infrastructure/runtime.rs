//! Runtime lifecycle.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::adapter::outbound::solana::{SolanaLogFeed, SolanaRpc};
use crate::error::Result;
use crate::infrastructure::bootstrap::{
    build_notifier_registry, build_tracker, install_crypto_provider, start_command_listener,
};
use crate::infrastructure::config::settings::Config;

/// Run until ctrl-c.
///
/// # Errors
///
/// Returns an error if the WebSocket endpoint cannot be derived or a
/// startup wallet is invalid.
pub async fn run(config: Config) -> Result<()> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    run_with_shutdown(config, shutdown_rx).await
}

/// Run with an externally controlled shutdown signal.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with_shutdown(config: Config, mut shutdown: watch::Receiver<bool>) -> Result<()> {
    install_crypto_provider();

    info!(
        rpc_url = %config.solana.rpc_url,
        commitment = %config.solana.commitment,
        pairing = ?config.classifier.pairing,
        selection = ?config.classifier.selection,
        "Starting solwatch"
    );

    let chain = Arc::new(SolanaRpc::new(&config.solana));
    let (feed, events) = SolanaLogFeed::spawn(&config.solana)?;
    let feed = Arc::new(feed);

    let (notifiers, telegram) = build_notifier_registry(&config);
    let tracker = build_tracker(&config, chain, feed, notifiers)?;
    start_command_listener(telegram, &tracker);

    let subscribed = tracker.resubscribe_all().await;
    info!(
        wallets = tracker.wallet_count(),
        subscribed, "Listening for wallet transactions..."
    );

    let mut event_loop = tokio::spawn(Arc::clone(&tracker).run(events));

    loop {
        tokio::select! {
            result = shutdown.changed() => {
                match result {
                    Ok(()) => {
                        if *shutdown.borrow() {
                            info!("Shutdown signal received");
                            break;
                        }
                    }
                    Err(_) => {
                        info!("Shutdown channel closed");
                        break;
                    }
                }
            }
            _ = &mut event_loop => {
                warn!("Tracker event loop ended");
                break;
            }
        }
    }

    event_loop.abort();
    info!("solwatch stopped");
    Ok(())
}
