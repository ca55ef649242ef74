use std::io::Write;
use std::sync::Mutex;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use solwatch::adapter::outbound::solana::Commitment;
use solwatch::domain::Pairing;
use solwatch::error::{ConfigError, Error};
use solwatch::infrastructure::config::settings::Config;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

fn clear_env() {
    std::env::remove_var("TELEGRAM_BOT_TOKEN");
    std::env::remove_var("SOLANA_RPC_URL");
    std::env::remove_var("SOLANA_WS_URL");
}

#[test]
fn example_config_loads() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example"))
        .expect("example config is valid");
    assert!(!config.telegram.enabled);
    assert_eq!(config.classifier.pairing, Pairing::ByMint);
}

#[test]
fn load_reads_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_config(
        r#"
[solana]
rpc_url = "http://localhost:8899"
commitment = "processed"

[classifier]
dust_threshold = "0.01"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.solana.commitment, Commitment::Processed);
    assert_eq!(
        config.solana.websocket_url().unwrap(),
        "ws://localhost:8899/"
    );
    assert_eq!(config.classifier.dust_threshold, dec!(0.01));
}

#[test]
fn missing_file_is_read_error() {
    let result = Config::load("/definitely/not/here/config.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn rejects_unsupported_rpc_scheme() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_config("[solana]\nrpc_url = \"ftp://example.com\"\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
            assert_eq!(field, "solana.rpc_url");
        }
        Err(err) => panic!("Expected invalid rpc_url, got {err}"),
        Ok(_) => panic!("Expected ftp scheme to be rejected"),
    }
}

#[test]
fn rejects_http_ws_url() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_config("[solana]\nws_url = \"https://example.com\"\n");
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn rejects_unknown_pairing() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_config("[classifier]\npairing = \"sideways\"\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
