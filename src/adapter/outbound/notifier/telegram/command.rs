//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand {
    Start,
    Help,
    Add { address: String, label: String },
    Remove { address: String },
    Delete { address: String },
    List,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    /// Required arguments missing; carries the usage line.
    Usage(&'static str),
}

pub const ADD_USAGE: &str = "Usage: /add <wallet_address> <label>";
pub const REMOVE_USAGE: &str = "Usage: /remove <wallet_address>";
pub const DELETE_USAGE: &str = "Usage: /delete <wallet_address>";

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand | Self::UnknownCommand(_) => {
                write!(f, "Unknown command. Use /help to see available commands.")
            }
            Self::Usage(usage) => write!(f, "{usage}"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Command names are case-insensitive and may carry an `@botname` suffix.
/// Everything after the address of `/add` is the label.
pub fn parse_command(text: &str) -> Result<WalletCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head)
        .to_lowercase();

    match command.as_str() {
        "/start" => Ok(WalletCommand::Start),
        "/help" => Ok(WalletCommand::Help),
        "/list" => Ok(WalletCommand::List),
        "/add" => {
            let address = parts.next().ok_or(CommandParseError::Usage(ADD_USAGE))?;
            let label = parts.collect::<Vec<_>>().join(" ");
            if label.is_empty() {
                return Err(CommandParseError::Usage(ADD_USAGE));
            }
            Ok(WalletCommand::Add {
                address: address.to_string(),
                label,
            })
        }
        "/remove" => {
            let address = parts.next().ok_or(CommandParseError::Usage(REMOVE_USAGE))?;
            Ok(WalletCommand::Remove {
                address: address.to_string(),
            })
        }
        "/delete" => {
            let address = parts.next().ok_or(CommandParseError::Usage(DELETE_USAGE))?;
            Ok(WalletCommand::Delete {
                address: address.to_string(),
            })
        }
        _ => Err(CommandParseError::UnknownCommand(command)),
    }
}

/// Help text returned by `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "Available commands:\n\
    /add <wallet_address> <label> - Add a wallet to track\n\
    /remove <wallet_address> - Stop tracking a wallet\n\
    /list - Show all tracked wallets\n\
    /delete <wallet_address> - Delete a wallet from tracking\n\
    /help - Show this help message"
}

/// Greeting returned by `/start`.
#[must_use]
pub fn welcome_text() -> String {
    format!("Welcome to Solana Wallet Tracker Bot!\n\n{}", command_help())
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("add", "Add a wallet to track"),
        ("remove", "Stop tracking a wallet"),
        ("list", "Show all tracked wallets"),
        ("delete", "Delete a wallet from tracking"),
        ("help", "Show all commands"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("/start").unwrap(), WalletCommand::Start);
        assert_eq!(parse_command("/help").unwrap(), WalletCommand::Help);
        assert_eq!(parse_command("/list").unwrap(), WalletCommand::List);
    }

    #[test]
    fn parse_add_joins_label() {
        assert_eq!(
            parse_command(&format!("/add {WALLET} big   whale wallet")).unwrap(),
            WalletCommand::Add {
                address: WALLET.into(),
                label: "big whale wallet".into(),
            }
        );
    }

    #[test]
    fn parse_add_requires_label() {
        assert_eq!(
            parse_command(&format!("/add {WALLET}")).unwrap_err(),
            CommandParseError::Usage(ADD_USAGE)
        );
        assert_eq!(
            parse_command("/add").unwrap_err(),
            CommandParseError::Usage(ADD_USAGE)
        );
    }

    #[test]
    fn parse_remove_and_delete() {
        assert_eq!(
            parse_command(&format!("/remove {WALLET}")).unwrap(),
            WalletCommand::Remove {
                address: WALLET.into()
            }
        );
        assert_eq!(
            parse_command(&format!("/delete {WALLET} extra")).unwrap(),
            WalletCommand::Delete {
                address: WALLET.into()
            }
        );
        assert_eq!(
            parse_command("/remove").unwrap_err(),
            CommandParseError::Usage(REMOVE_USAGE)
        );
        assert_eq!(
            parse_command("/delete").unwrap_err(),
            CommandParseError::Usage(DELETE_USAGE)
        );
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_command("/LIST").unwrap(), WalletCommand::List);
        assert_eq!(parse_command("/Help").unwrap(), WalletCommand::Help);
    }

    #[test]
    fn parse_command_with_bot_mention() {
        assert_eq!(
            parse_command("/list@wallet_tracker_bot").unwrap(),
            WalletCommand::List
        );
    }

    #[test]
    fn non_commands() {
        assert_eq!(
            parse_command("hello").unwrap_err(),
            CommandParseError::NotACommand
        );
        assert_eq!(parse_command("   ").unwrap_err(), CommandParseError::NotACommand);
        assert!(matches!(
            parse_command("/status").unwrap_err(),
            CommandParseError::UnknownCommand(cmd) if cmd == "/status"
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CommandParseError::NotACommand.to_string(),
            "Unknown command. Use /help to see available commands."
        );
        assert_eq!(
            CommandParseError::Usage(REMOVE_USAGE).to_string(),
            "Usage: /remove <wallet_address>"
        );
    }

    #[test]
    fn welcome_includes_help() {
        let text = welcome_text();
        assert!(text.starts_with("Welcome to Solana Wallet Tracker Bot!\n\nAvailable commands:"));
        assert!(text.ends_with("/help - Show this help message"));
    }

    #[test]
    fn menu_lists_every_argument_command() {
        let names: Vec<_> = bot_commands().into_iter().map(|(name, _)| name).collect();
        for name in ["add", "remove", "list", "delete", "help"] {
            assert!(names.contains(&name));
        }
    }
}
