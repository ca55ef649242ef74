//! Buy/sell classification from transaction balance deltas.
//!
//! A transaction is a **buy** when the tracked wallet spent SOL and a token
//! balance grew, and a **sell** when the wallet received SOL and a token
//! balance shrank. Token moves at or below the dust threshold are ignored so
//! fee-only account adjustments do not produce alerts.
//!
//! Two choices are configurable:
//!
//! - [`Pairing`] decides which pre-balance a post-balance is compared with.
//! - [`Selection`] decides which pair wins when several qualify.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::transaction::{TokenBalanceEntry, TransactionRecord};

/// How pre and post token balances are matched up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// Entry `i` of the post list against entry `i` of the pre list.
    Positional,
    /// Entries with the same mint (and account index, when both carry one).
    #[default]
    ByMint,
}

/// Which qualifying pair determines the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// The last qualifying pair in iteration order.
    #[default]
    Last,
    /// The first qualifying pair in iteration order.
    First,
    /// The pair with the largest token movement.
    Largest,
}

impl FromStr for Pairing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "positional" => Ok(Self::Positional),
            "by_mint" | "mint" => Ok(Self::ByMint),
            other => Err(format!("unknown pairing '{other}' (use: positional, by_mint)")),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "first" => Ok(Self::First),
            "largest" => Ok(Self::Largest),
            other => Err(format!("unknown selection '{other}' (use: last, first, largest)")),
        }
    }
}

/// Classifier settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Token moves must exceed this ui amount to count.
    #[serde(default = "default_dust_threshold")]
    pub dust_threshold: Decimal,
    #[serde(default)]
    pub pairing: Pairing,
    #[serde(default)]
    pub selection: Selection,
}

fn default_dust_threshold() -> Decimal {
    Decimal::new(1, 3) // 0.001
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            dust_threshold: default_dust_threshold(),
            pairing: Pairing::default(),
            selection: Selection::default(),
        }
    }
}

/// Direction of a classified trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Result of classifying one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub side: TradeSide,
    /// Mint of the token that moved.
    pub token_mint: String,
    /// Tokens bought or sold (always positive).
    pub token_amount: Decimal,
    /// SOL spent on a buy or received on a sell (always positive).
    pub native_amount: Decimal,
    /// Token balance after the transaction.
    pub holding: Decimal,
}

/// Classify a transaction, or `None` when it is not a relevant trade.
#[must_use]
pub fn classify(tx: &TransactionRecord, config: &ClassifierConfig) -> Option<Classification> {
    let native_spent = tx.native_spent();
    let native_received = -native_spent;

    let mut winner: Option<Classification> = None;

    for pair in pair_balances(tx, config.pairing) {
        let candidate = if pair.pre > pair.post && native_received > Decimal::ZERO {
            Classification {
                side: TradeSide::Sell,
                token_mint: pair.mint.to_string(),
                token_amount: pair.pre - pair.post,
                native_amount: native_received,
                holding: pair.post,
            }
        } else if pair.post > pair.pre && native_spent > Decimal::ZERO {
            Classification {
                side: TradeSide::Buy,
                token_mint: pair.mint.to_string(),
                token_amount: pair.post - pair.pre,
                native_amount: native_spent,
                holding: pair.post,
            }
        } else {
            continue;
        };

        if candidate.token_amount <= config.dust_threshold {
            continue;
        }

        winner = match (config.selection, winner) {
            (_, None) | (Selection::Last, Some(_)) => Some(candidate),
            (Selection::First, current) => current,
            (Selection::Largest, Some(current)) => {
                if candidate.token_amount > current.token_amount {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }

    winner
}

/// A pre/post balance of one token account.
#[derive(Debug, PartialEq)]
struct BalancePair<'a> {
    mint: &'a str,
    pre: Decimal,
    post: Decimal,
}

fn pair_balances(tx: &TransactionRecord, pairing: Pairing) -> Vec<BalancePair<'_>> {
    match pairing {
        Pairing::Positional => tx
            .post_token_balances
            .iter()
            .enumerate()
            .map(|(i, post)| BalancePair {
                mint: &post.mint,
                pre: tx
                    .pre_token_balances
                    .get(i)
                    .map_or(Decimal::ZERO, TokenBalanceEntry::amount),
                post: post.amount(),
            })
            .collect(),
        Pairing::ByMint => {
            let mut matched = vec![false; tx.pre_token_balances.len()];
            let mut pairs = Vec::with_capacity(tx.post_token_balances.len());

            for post in &tx.post_token_balances {
                let pre = tx
                    .pre_token_balances
                    .iter()
                    .enumerate()
                    .find(|(i, pre)| !matched[*i] && same_account(pre, post));

                let pre_amount = match pre {
                    Some((i, pre)) => {
                        matched[i] = true;
                        pre.amount()
                    }
                    None => Decimal::ZERO,
                };

                pairs.push(BalancePair {
                    mint: &post.mint,
                    pre: pre_amount,
                    post: post.amount(),
                });
            }

            // Accounts closed during the transaction only appear in the pre list.
            for (pre, _) in tx
                .pre_token_balances
                .iter()
                .zip(matched)
                .filter(|(_, seen)| !seen)
            {
                pairs.push(BalancePair {
                    mint: &pre.mint,
                    pre: pre.amount(),
                    post: Decimal::ZERO,
                });
            }

            pairs
        }
    }
}

fn same_account(a: &TokenBalanceEntry, b: &TokenBalanceEntry) -> bool {
    if a.mint != b.mint {
        return false;
    }
    match (a.account_index, b.account_index) {
        (Some(x), Some(y)) => x == y,
        _ => true,
    }
}
