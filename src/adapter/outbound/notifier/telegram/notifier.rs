//! Telegram alert delivery and command handling.
//!
//! Provides the [`TelegramNotifier`] for sending trade alerts and
//! [`spawn_command_listener`] for answering wallet commands. Both run as
//! background workers.
//!
//! Requires the `telegram` feature to be enabled.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand, LinkPreviewOptions, ParseMode};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::domain;
use crate::port::inbound::tracking::WalletTracking;
use crate::port::{outbound::notifier::Event, outbound::notifier::Notifier};

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::TelegramControl;
use super::format::format_trade_alert;

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Chats allowed to send commands. Empty admits every chat.
    pub allowed_chats: Vec<i64>,
}

/// Telegram notifier that sends alerts to the owning chat.
///
/// Implements the [`Notifier`] trait and spawns background workers for
/// message delivery and command handling.
pub struct TelegramNotifier {
    /// Channel sender for queuing outbound notifications.
    sender: mpsc::UnboundedSender<Event>,
}

impl TelegramNotifier {
    /// Create a new notifier and spawn the delivery worker.
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        // Spawn background task to handle outbound notifications.
        tokio::spawn(telegram_worker(config, receiver));

        Self { sender }
    }
}

/// Spawn the long-polling listener that answers wallet commands.
pub fn spawn_command_listener(config: TelegramConfig, tracking: Arc<dyn WalletTracking>) {
    tokio::spawn(telegram_command_worker(
        config,
        TelegramControl::new(tracking),
    ));
}

impl Notifier for TelegramNotifier {
    fn notify(&self, event: Event) {
        if self.sender.send(event).is_err() {
            warn!("Telegram notifier channel closed");
        }
    }
}

fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Background worker that sends Telegram messages.
async fn telegram_worker(config: TelegramConfig, mut receiver: mpsc::UnboundedReceiver<Event>) {
    let bot = Bot::new(&config.bot_token);

    info!("Telegram notifier started");

    while let Some(event) = receiver.recv().await {
        match event {
            Event::TradeDetected(alert) => {
                let text = format_trade_alert(&alert);

                if let Err(e) = bot
                    .send_message(ChatId(alert.owner.0), text)
                    .parse_mode(ParseMode::Html)
                    .link_preview_options(no_link_preview())
                    .await
                {
                    error!(
                        error = %e,
                        chat_id = alert.owner.0,
                        signature = %alert.signature,
                        "Failed to send Telegram alert"
                    );
                }
            }
        }
    }

    warn!("Telegram notifier worker shutting down");
}

/// Background worker that handles inbound Telegram commands.
async fn telegram_command_worker(config: TelegramConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let allowed: Arc<[domain::ChatId]> = config
        .allowed_chats
        .iter()
        .copied()
        .map(domain::ChatId)
        .collect();

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(
        allowed_chats = allowed.len(),
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        let allowed = Arc::clone(&allowed);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };
            let chat = domain::ChatId(msg.chat.id.0);

            if let Some(response) =
                command_response_for_message(text, chat, &allowed, &control).await
            {
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
