//! Message formatting for Telegram trade alerts.

use crate::domain::TradeSide;
use crate::port::outbound::notifier::TradeAlert;

const GMGN_URL: &str = "https://t.me/GMGN_sol02_bot?start=i_ihAxNciQ";
const TROJAN_URL: &str = "https://t.me/achilles_trojanbot?start=r-typeewrite-";

/// Render a trade alert as Telegram HTML.
pub fn format_trade_alert(alert: &TradeAlert) -> String {
    let c = &alert.classification;
    let meta = &alert.meta;
    let mint = escape_html(&c.token_mint);
    let symbol = escape_html(meta.symbol());

    let (headline, sol_line, token_line) = match c.side {
        TradeSide::Buy => (
            "🟢 BUY",
            format!("💸 SOL: -{}", c.native_amount.normalize()),
            format!("💰 {symbol}: +{}", c.token_amount.normalize()),
        ),
        TradeSide::Sell => (
            "🔴 SELL",
            format!("💸 SOL: +{}", c.native_amount.normalize()),
            format!("💰 {symbol}: -{}", c.token_amount.normalize()),
        ),
    };

    format!(
        "{headline} - {label}\n\
        \n\
        🪙 Token Info:\n\
        ✨ ${symbol} ({name})\n\
        💰 MCAP: ${mcap}\n\
        💵 Price: ${price}\n\
        💡 CA: {mint}\n\
        \n\
        📊 Transaction Info:\n\
        {sol_line}\n\
        {token_line}\n\
        ✊ Current Hold: {holding}\n\
        \n\
        🔗 Links:\n\
        • {solscan}\n\
        • {dexscreener}\n\
        • {pumpfun}\n\
        \n\
        Buy on:\n\
        • {gmgn}\n\
        • {trojan}",
        label = escape_html(&alert.label),
        name = escape_html(meta.name()),
        mcap = escape_html(meta.market_cap_usd()),
        price = escape_html(meta.price_usd()),
        holding = c.holding.normalize(),
        solscan = link(
            &format!("https://solscan.io/tx/{}", escape_html(&alert.signature)),
            "Solscan"
        ),
        dexscreener = link(&format!("https://dexscreener.com/solana/{mint}"), "DexScreener"),
        pumpfun = link(&format!("https://pump.fun/{mint}"), "PumpFun"),
        gmgn = link(GMGN_URL, "GMGN"),
        trojan = link(&format!("{TROJAN_URL}{mint}"), "Trojan"),
    )
}

fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{href}\">{text}</a>")
}

/// Escape text for Telegram's HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatId, Classification, MarketMeta, WalletAddress};
    use rust_decimal_macros::dec;

    const MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

    fn alert(side: TradeSide, meta: MarketMeta) -> TradeAlert {
        TradeAlert {
            owner: ChatId(42),
            address: WalletAddress::parse("11111111111111111111111111111111").unwrap(),
            label: "whale <1>".into(),
            classification: Classification {
                side,
                token_mint: MINT.into(),
                token_amount: dec!(5.000),
                native_amount: dec!(1.000000000),
                holding: dec!(5),
            },
            meta,
            signature: "5sig".into(),
        }
    }

    fn bonk() -> MarketMeta {
        MarketMeta {
            name: Some("Bonk".into()),
            symbol: Some("BONK".into()),
            market_cap_usd: Some("1500000".into()),
            price_usd: Some("0.00002".into()),
        }
    }

    #[test]
    fn buy_alert_layout() {
        let text = format_trade_alert(&alert(TradeSide::Buy, bonk()));

        assert!(text.starts_with("🟢 BUY - whale &lt;1&gt;\n"));
        assert!(text.contains("✨ $BONK (Bonk)"));
        assert!(text.contains("💰 MCAP: $1500000"));
        assert!(text.contains("💵 Price: $0.00002"));
        assert!(text.contains(&format!("💡 CA: {MINT}")));
        assert!(text.contains("💸 SOL: -1\n"));
        assert!(text.contains("💰 BONK: +5\n"));
        assert!(text.contains("✊ Current Hold: 5"));
    }

    #[test]
    fn sell_alert_signs() {
        let text = format_trade_alert(&alert(TradeSide::Sell, bonk()));

        assert!(text.starts_with("🔴 SELL"));
        assert!(text.contains("💸 SOL: +1\n"));
        assert!(text.contains("💰 BONK: -5\n"));
    }

    #[test]
    fn links_are_anchors() {
        let text = format_trade_alert(&alert(TradeSide::Buy, bonk()));

        assert!(text.contains("<a href=\"https://solscan.io/tx/5sig\">Solscan</a>"));
        assert!(text.contains(&format!(
            "<a href=\"https://dexscreener.com/solana/{MINT}\">DexScreener</a>"
        )));
        assert!(text.contains(&format!("<a href=\"https://pump.fun/{MINT}\">PumpFun</a>")));
        assert!(text.contains(&format!("<a href=\"{GMGN_URL}\">GMGN</a>")));
        assert!(text.contains(&format!("<a href=\"{TROJAN_URL}{MINT}\">Trojan</a>")));
    }

    #[test]
    fn unavailable_meta_renders_placeholders() {
        let text = format_trade_alert(&alert(TradeSide::Buy, MarketMeta::unavailable()));

        assert!(text.contains("✨ $N/A (N/A)"));
        assert!(text.contains("💰 MCAP: $N/A"));
        assert!(text.contains("💵 Price: $N/A"));
        assert!(text.contains("💰 N/A: +5"));
    }

    #[test]
    fn escape_html_covers_specials() {
        assert_eq!(escape_html("a & <b> \"c\""), "a &amp; &lt;b&gt; &quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
