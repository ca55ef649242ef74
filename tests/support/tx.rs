use rust_decimal::Decimal;

use solwatch::domain::{TokenBalanceEntry, TransactionRecord, LAMPORTS_PER_SOL};

pub const WALLET: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const OTHER_WALLET: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
pub const MINT: &str = "So11111111111111111111111111111111111111112";

/// Record with SOL moving from `pre_sol` to `post_sol` on the fee payer.
pub fn record(
    signature: &str,
    pre_sol: u64,
    post_sol: u64,
    pre: Vec<TokenBalanceEntry>,
    post: Vec<TokenBalanceEntry>,
) -> TransactionRecord {
    TransactionRecord {
        signature: signature.into(),
        pre_balances: vec![pre_sol * LAMPORTS_PER_SOL],
        post_balances: vec![post_sol * LAMPORTS_PER_SOL],
        pre_token_balances: pre,
        post_token_balances: post,
    }
}

/// Spend 1 SOL for `amount` of [`MINT`] into an empty account.
pub fn buy(signature: &str, amount: Decimal) -> TransactionRecord {
    record(
        signature,
        10,
        9,
        vec![],
        vec![TokenBalanceEntry::new(MINT, amount)],
    )
}

/// Sell all of `amount` of [`MINT`] for 1 SOL.
pub fn sell(signature: &str, amount: Decimal) -> TransactionRecord {
    record(
        signature,
        9,
        10,
        vec![TokenBalanceEntry::new(MINT, amount)],
        vec![TokenBalanceEntry::new(MINT, Decimal::ZERO)],
    )
}
