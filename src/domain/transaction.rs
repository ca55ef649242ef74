//! Raw transaction balance snapshots as delivered by the chain.

use rust_decimal::Decimal;

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a lamport amount to whole SOL without rounding.
#[must_use]
pub fn lamports_to_sol(lamports: u64) -> Decimal {
    Decimal::from(lamports) / Decimal::from(LAMPORTS_PER_SOL)
}

/// One token-account balance inside a transaction snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalanceEntry {
    /// Index of the token account in the transaction's account list.
    pub account_index: Option<u32>,
    /// Mint of the token held by the account.
    pub mint: String,
    /// Owner of the token account, when reported.
    pub owner: Option<String>,
    /// Balance already scaled by the mint's decimals.
    pub ui_amount: Option<Decimal>,
}

impl TokenBalanceEntry {
    /// Entry with only a mint and a ui-scaled amount.
    pub fn new(mint: impl Into<String>, ui_amount: Decimal) -> Self {
        Self {
            account_index: None,
            mint: mint.into(),
            owner: None,
            ui_amount: Some(ui_amount),
        }
    }

    #[must_use]
    pub const fn with_account_index(mut self, index: u32) -> Self {
        self.account_index = Some(index);
        self
    }

    /// The ui amount, with a missing value read as zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.ui_amount.unwrap_or(Decimal::ZERO)
    }
}

/// Pre/post balance snapshots for a confirmed transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRecord {
    pub signature: String,
    /// Native balances in lamports, ordered by account index (0 = fee payer).
    pub pre_balances: Vec<u64>,
    pub post_balances: Vec<u64>,
    pub pre_token_balances: Vec<TokenBalanceEntry>,
    pub post_token_balances: Vec<TokenBalanceEntry>,
}

impl TransactionRecord {
    /// SOL that left account 0 during the transaction (negative when SOL arrived).
    ///
    /// Zero when either snapshot is missing.
    #[must_use]
    pub fn native_spent(&self) -> Decimal {
        match (self.pre_balances.first(), self.post_balances.first()) {
            (Some(&pre), Some(&post)) => lamports_to_sol(pre) - lamports_to_sol(post),
            _ => Decimal::ZERO,
        }
    }
}
