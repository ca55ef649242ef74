//! Handler for the `classify` diagnostic.

use crate::adapter::outbound::solana::SolanaRpc;
use crate::cli::{output, ClassifyArgs};
use crate::domain::{classify, ClassifierConfig};
use crate::error::Result;
use crate::infrastructure::bootstrap::install_crypto_provider;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::chain::ChainClient;

fn classifier_config(base: &ClassifierConfig, args: &ClassifyArgs) -> ClassifierConfig {
    let mut config = base.clone();
    if let Some(pairing) = args.pairing {
        config.pairing = pairing;
    }
    if let Some(selection) = args.selection {
        config.selection = selection;
    }
    if let Some(dust) = args.dust {
        config.dust_threshold = dust;
    }
    config
}

/// Fetch one transaction and print its classification.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the RPC call
/// fails.
pub async fn execute(args: &ClassifyArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    install_crypto_provider();

    let classifier = classifier_config(&config.classifier, args);
    let rpc = SolanaRpc::new(&config.solana);

    output::section("Transaction");
    output::key_value("Signature", &args.signature);

    let Some(tx) = rpc.fetch_transaction(&args.signature).await? else {
        output::warn("Transaction not found or not confirmed");
        return Ok(());
    };
    output::key_value("SOL spent", tx.native_spent().normalize());
    output::key_value(
        "Token entries",
        format!(
            "{} pre / {} post",
            tx.pre_token_balances.len(),
            tx.post_token_balances.len()
        ),
    );

    output::section("Classification");
    output::key_value("Pairing", format!("{:?}", classifier.pairing));
    output::key_value("Selection", format!("{:?}", classifier.selection));

    match classify(&tx, &classifier) {
        Some(c) => {
            output::ok(&format!("{} detected", c.side));
            output::key_value("Token", &c.token_mint);
            output::key_value("Token amount", c.token_amount.normalize());
            output::key_value("SOL amount", c.native_amount.normalize());
            output::key_value("Holding", c.holding.normalize());
        }
        None => output::warn("Transaction not relevant or significant"),
    }

    Ok(())
}
