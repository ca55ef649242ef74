//! Wallet log subscriptions over the Solana PubSub WebSocket.
//!
//! One background worker owns the socket. [`SolanaLogFeed`] talks to it
//! through a command channel and every subscription delivers into the same
//! [`LogEvent`] channel.
//!
//! # Connection Lifecycle
//!
//! 1. **Connect** to the PubSub endpoint
//! 2. **Resubscribe** every active address (after a reconnect)
//! 3. **Message Loop**: commands out, acknowledgements and notifications in;
//!    rejected resubscribes are retried every `reconnect_delay`
//! 4. **Disconnect**: server ids are forgotten, the worker waits
//!    `reconnect_delay` and starts over
//!
//! Subscription ids handed to callers are assigned locally, so they stay
//! valid across reconnects even though the server assigns new ones.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, trace, warn};

use super::dto::{NotificationParams, PubSubMessage, RpcErrorBody};
use super::settings::{Commitment, SolanaConfig};
use crate::domain::{SubscriptionId, WalletAddress};
use crate::error::{Error, Result};
use crate::port::outbound::chain::{LogEvent, LogFeed};

type Reply = oneshot::Sender<Result<()>>;

enum FeedCommand {
    Subscribe {
        id: SubscriptionId,
        address: WalletAddress,
        reply: Reply,
    },
    Unsubscribe {
        id: SubscriptionId,
        reply: Reply,
    },
}

/// Handle to the PubSub worker.
pub struct SolanaLogFeed {
    commands: mpsc::UnboundedSender<FeedCommand>,
    next_id: AtomicU64,
    timeout: Duration,
}

impl SolanaLogFeed {
    /// Spawn the socket worker and return the handle plus the event stream.
    ///
    /// # Errors
    ///
    /// Returns a config error when no WebSocket URL can be determined.
    pub fn spawn(config: &SolanaConfig) -> Result<(Self, mpsc::UnboundedReceiver<LogEvent>)> {
        let url = config.websocket_url()?;
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let worker = FeedWorker {
            url,
            reconnect_delay: config.reconnect_delay(),
            commands: commands_rx,
            state: FeedState::new(config.commitment, events_tx),
        };
        tokio::spawn(worker.run());

        let feed = Self {
            commands: commands_tx,
            next_id: AtomicU64::new(1),
            timeout: config.request_timeout(),
        };
        Ok((feed, events_rx))
    }

    async fn request(&self, command: FeedCommand, reply: oneshot::Receiver<Result<()>>) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::Connection("log feed worker stopped".into()))?;

        match tokio::time::timeout(self.timeout, reply).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => Err(Error::Connection("log feed dropped the request".into())),
            Err(_) => Err(Error::Connection(
                "timed out waiting for subscription acknowledgement".into(),
            )),
        }
    }
}

#[async_trait]
impl LogFeed for SolanaLogFeed {
    async fn subscribe(&self, address: &WalletAddress) -> Result<SubscriptionId> {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (reply, rx) = oneshot::channel();
        let command = FeedCommand::Subscribe {
            id,
            address: address.clone(),
            reply,
        };

        if let Err(e) = self.request(command, rx).await {
            // Make sure a late acknowledgement does not leave it running.
            let (reply, _) = oneshot::channel();
            let _ = self.commands.send(FeedCommand::Unsubscribe { id, reply });
            return Err(e);
        }
        Ok(id)
    }

    async fn unsubscribe(&self, id: SubscriptionId) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.request(FeedCommand::Unsubscribe { id, reply }, rx).await
    }
}

enum SessionEnd {
    Disconnected,
    Shutdown,
}

struct FeedWorker {
    url: String,
    reconnect_delay: Duration,
    commands: mpsc::UnboundedReceiver<FeedCommand>,
    state: FeedState,
}

impl FeedWorker {
    async fn run(mut self) {
        loop {
            info!(url = %self.url, "Connecting to Solana PubSub");

            match connect_async(self.url.as_str()).await {
                Ok((ws, response)) => {
                    info!(status = %response.status(), "PubSub connected");
                    if let SessionEnd::Shutdown = self.session(ws).await {
                        break;
                    }
                    self.state.on_disconnect();
                }
                Err(e) => error!(error = %e, "PubSub connection failed"),
            }

            info!(
                delay_ms = self.reconnect_delay.as_millis() as u64,
                subscriptions = self.state.active.len(),
                "Reconnecting PubSub after delay"
            );
            if let SessionEnd::Shutdown = self.wait_offline().await {
                break;
            }
        }

        info!("Log feed worker shutting down");
    }

    /// Accept commands while disconnected until the reconnect delay passes.
    async fn wait_offline(&mut self) -> SessionEnd {
        let delay = tokio::time::sleep(self.reconnect_delay);
        tokio::pin!(delay);

        loop {
            tokio::select! {
                () = &mut delay => return SessionEnd::Disconnected,
                command = self.commands.recv() => match command {
                    Some(command) => self.state.on_command_offline(command),
                    None => return SessionEnd::Shutdown,
                },
            }
        }
    }

    async fn session(&mut self, ws: WebSocketStream<MaybeTlsStream<TcpStream>>) -> SessionEnd {
        let (mut sink, mut stream) = ws.split();

        for frame in self.state.resubscribe_all() {
            if let Err(e) = sink.send(Message::Text(frame)).await {
                error!(error = %e, "Failed to resubscribe");
                return SessionEnd::Disconnected;
            }
        }

        debug!("Entering PubSub message loop");

        let mut retry = tokio::time::interval_at(
            tokio::time::Instant::now() + self.reconnect_delay,
            self.reconnect_delay,
        );

        loop {
            let outgoing = tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.state.on_command(command),
                    None => return SessionEnd::Shutdown,
                },
                _ = retry.tick() => {
                    for frame in self.state.retry_rejected() {
                        if let Err(e) = sink.send(Message::Text(frame)).await {
                            error!(error = %e, "Failed to resubscribe");
                            return SessionEnd::Disconnected;
                        }
                    }
                    None
                }
                message = stream.next() => match message {
                    Some(Ok(Message::Text(text))) => {
                        trace!(bytes = text.len(), "Received PubSub text frame");
                        self.state.on_text(&text)
                    }
                    Some(Ok(Message::Ping(data))) => {
                        trace!("Received PubSub ping");
                        if let Err(e) = sink.send(Message::Pong(data)).await {
                            error!(error = %e, "Failed to answer ping");
                            return SessionEnd::Disconnected;
                        }
                        None
                    }
                    Some(Ok(Message::Close(frame))) => {
                        info!(frame = ?frame, "PubSub closed by server");
                        return SessionEnd::Disconnected;
                    }
                    Some(Ok(_)) => None,
                    Some(Err(e)) => {
                        error!(error = %e, "PubSub error");
                        return SessionEnd::Disconnected;
                    }
                    None => {
                        warn!("PubSub stream ended");
                        return SessionEnd::Disconnected;
                    }
                },
            };

            if let Some(frame) = outgoing {
                if let Err(e) = sink.send(Message::Text(frame)).await {
                    error!(error = %e, "Failed to send PubSub request");
                    return SessionEnd::Disconnected;
                }
            }
        }
    }
}

enum Pending {
    Subscribe {
        id: SubscriptionId,
        reply: Option<Reply>,
    },
    Unsubscribe {
        reply: Option<Reply>,
    },
}

/// Subscription bookkeeping, independent of the socket.
struct FeedState {
    commitment: Commitment,
    events: mpsc::UnboundedSender<LogEvent>,
    /// Subscriptions callers want, keyed by local id.
    active: HashMap<SubscriptionId, WalletAddress>,
    server_to_local: HashMap<u64, SubscriptionId>,
    local_to_server: HashMap<SubscriptionId, u64>,
    /// Requests awaiting a response, keyed by JSON-RPC request id.
    pending: HashMap<u64, Pending>,
    /// Active subscriptions whose resubscribe the server refused.
    rejected: Vec<SubscriptionId>,
    next_request: u64,
}

impl FeedState {
    fn new(commitment: Commitment, events: mpsc::UnboundedSender<LogEvent>) -> Self {
        Self {
            commitment,
            events,
            active: HashMap::new(),
            server_to_local: HashMap::new(),
            local_to_server: HashMap::new(),
            pending: HashMap::new(),
            rejected: Vec::new(),
            next_request: 1,
        }
    }

    fn next_request_id(&mut self) -> u64 {
        let id = self.next_request;
        self.next_request += 1;
        id
    }

    fn subscribe_frame(&mut self, id: SubscriptionId, reply: Option<Reply>) -> Option<String> {
        let address = self.active.get(&id)?.as_str().to_string();
        let request_id = self.next_request_id();
        self.pending
            .insert(request_id, Pending::Subscribe { id, reply });

        Some(request_frame(
            request_id,
            "logsSubscribe",
            json!([{ "mentions": [address] }, { "commitment": self.commitment.as_str() }]),
        ))
    }

    fn unsubscribe_frame(&mut self, server_id: u64, reply: Option<Reply>) -> String {
        let request_id = self.next_request_id();
        self.pending
            .insert(request_id, Pending::Unsubscribe { reply });
        request_frame(request_id, "logsUnsubscribe", json!([server_id]))
    }

    fn on_command(&mut self, command: FeedCommand) -> Option<String> {
        match command {
            FeedCommand::Subscribe { id, address, reply } => {
                info!(wallet = %address, subscription = %id, "Subscribing to wallet logs");
                self.active.insert(id, address);
                self.subscribe_frame(id, Some(reply))
            }
            FeedCommand::Unsubscribe { id, reply } => {
                self.active.remove(&id);
                match self.local_to_server.remove(&id) {
                    Some(server_id) => {
                        info!(subscription = %id, "Unsubscribing from wallet logs");
                        self.server_to_local.remove(&server_id);
                        Some(self.unsubscribe_frame(server_id, Some(reply)))
                    }
                    None => {
                        // Not acknowledged yet; the acknowledgement handler cleans up.
                        let _ = reply.send(Ok(()));
                        None
                    }
                }
            }
        }
    }

    fn on_command_offline(&mut self, command: FeedCommand) {
        match command {
            FeedCommand::Subscribe { id, address, reply } => {
                info!(wallet = %address, subscription = %id, "Queued subscription until reconnect");
                self.active.insert(id, address);
                let _ = reply.send(Ok(()));
            }
            FeedCommand::Unsubscribe { id, reply } => {
                self.active.remove(&id);
                let _ = reply.send(Ok(()));
            }
        }
    }

    fn resubscribe_all(&mut self) -> Vec<String> {
        let ids: Vec<_> = self.active.keys().copied().collect();
        if !ids.is_empty() {
            info!(count = ids.len(), "Resubscribing wallets");
        }
        ids.into_iter()
            .filter_map(|id| self.subscribe_frame(id, None))
            .collect()
    }

    /// Re-send subscriptions refused since the last attempt.
    fn retry_rejected(&mut self) -> Vec<String> {
        let ids = std::mem::take(&mut self.rejected);
        if !ids.is_empty() {
            info!(count = ids.len(), "Retrying rejected subscriptions");
        }
        ids.into_iter()
            .filter_map(|id| self.subscribe_frame(id, None))
            .collect()
    }

    /// A caller's subscribe is dropped and the error handed back. A
    /// resubscribe has no caller, so the address stays active for a retry.
    fn on_subscribe_failed(&mut self, id: SubscriptionId, reply: Option<Reply>, err: Error) {
        match reply {
            Some(reply) => {
                self.active.remove(&id);
                let _ = reply.send(Err(err));
            }
            None if self.active.contains_key(&id) => {
                warn!(subscription = %id, error = %err, "Resubscribe failed, will retry");
                self.rejected.push(id);
            }
            None => {}
        }
    }

    fn on_disconnect(&mut self) {
        self.server_to_local.clear();
        self.local_to_server.clear();
        // Covered by the resubscribe on reconnect.
        self.rejected.clear();

        // Active subscriptions survive and are re-sent on reconnect.
        for (_, pending) in self.pending.drain() {
            match pending {
                Pending::Subscribe {
                    reply: Some(reply), ..
                }
                | Pending::Unsubscribe { reply: Some(reply) } => {
                    let _ = reply.send(Ok(()));
                }
                _ => {}
            }
        }
    }

    fn on_text(&mut self, text: &str) -> Option<String> {
        match serde_json::from_str::<PubSubMessage>(text) {
            Ok(PubSubMessage::Notification { method, params }) => {
                self.on_notification(&method, params);
                None
            }
            Ok(PubSubMessage::Response { id, result, error }) => {
                self.on_response(id, result, error)
            }
            Ok(PubSubMessage::Unknown(value)) => {
                debug!(message = %value, "Ignoring unrecognised PubSub message");
                None
            }
            Err(e) => {
                warn!(error = %e, bytes = text.len(), "Failed to parse PubSub message");
                None
            }
        }
    }

    fn on_notification(&mut self, method: &str, params: NotificationParams) {
        if method != "logsNotification" {
            debug!(method, "Ignoring notification");
            return;
        }

        let Some(address) = self
            .server_to_local
            .get(&params.subscription)
            .and_then(|id| self.active.get(id))
        else {
            debug!(
                subscription = params.subscription,
                "Notification for unknown subscription"
            );
            return;
        };

        let value = params.result.value;
        let event = LogEvent {
            address: address.clone(),
            signature: value.signature,
            failed: value.err.is_some(),
        };

        if self.events.send(event).is_err() {
            warn!("Log event receiver dropped");
        }
    }

    fn on_response(
        &mut self,
        request_id: u64,
        result: Option<Value>,
        error: Option<RpcErrorBody>,
    ) -> Option<String> {
        let Some(pending) = self.pending.remove(&request_id) else {
            debug!(request = request_id, "Response for unknown request");
            return None;
        };

        match pending {
            Pending::Subscribe { id, reply } => {
                let server_id = match (error, result.as_ref().and_then(Value::as_u64)) {
                    (Some(error), _) => {
                        warn!(
                            subscription = %id,
                            code = error.code,
                            message = %error.message,
                            "logsSubscribe rejected"
                        );
                        self.on_subscribe_failed(
                            id,
                            reply,
                            Error::Rpc {
                                code: error.code,
                                message: error.message,
                            },
                        );
                        return None;
                    }
                    (None, None) => {
                        warn!(subscription = %id, "logsSubscribe returned no subscription id");
                        self.on_subscribe_failed(
                            id,
                            reply,
                            Error::Connection("missing subscription id".into()),
                        );
                        return None;
                    }
                    (None, Some(server_id)) => server_id,
                };

                send_reply(reply, Ok(()));

                if !self.active.contains_key(&id) {
                    debug!(subscription = %id, "Dropping subscription cancelled before ack");
                    return Some(self.unsubscribe_frame(server_id, None));
                }

                debug!(subscription = %id, server_id, "Subscription acknowledged");
                self.server_to_local.insert(server_id, id);
                self.local_to_server.insert(id, server_id);
                None
            }
            Pending::Unsubscribe { reply } => {
                let outcome = match error {
                    Some(error) => {
                        warn!(code = error.code, message = %error.message, "logsUnsubscribe rejected");
                        Err(Error::Rpc {
                            code: error.code,
                            message: error.message,
                        })
                    }
                    None => Ok(()),
                };
                send_reply(reply, outcome);
                None
            }
        }
    }
}

fn send_reply(reply: Option<Reply>, outcome: Result<()>) {
    if let Some(reply) = reply {
        let _ = reply.send(outcome);
    }
}

fn request_frame(id: u64, method: &str, params: Value) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    fn state() -> (FeedState, mpsc::UnboundedReceiver<LogEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (FeedState::new(Commitment::Confirmed, tx), rx)
    }

    fn subscribe(
        state: &mut FeedState,
        id: u64,
    ) -> (Value, oneshot::Receiver<Result<()>>) {
        let (reply, rx) = oneshot::channel();
        let frame = state
            .on_command(FeedCommand::Subscribe {
                id: SubscriptionId(id),
                address: WalletAddress::parse(WALLET).unwrap(),
                reply,
            })
            .unwrap();
        (serde_json::from_str(&frame).unwrap(), rx)
    }

    fn ack(request_id: &Value, server_id: u64) -> String {
        format!(r#"{{"jsonrpc":"2.0","result":{server_id},"id":{request_id}}}"#)
    }

    fn notification(server_id: u64, signature: &str, err: &str) -> String {
        format!(
            r#"{{"jsonrpc":"2.0","method":"logsNotification","params":{{"result":{{"context":{{"slot":1}},"value":{{"signature":"{signature}","err":{err},"logs":[]}}}},"subscription":{server_id}}}}}"#
        )
    }

    #[test]
    fn subscribe_frame_mentions_address() {
        let (mut state, _events) = state();
        let (frame, _) = subscribe(&mut state, 1);

        assert_eq!(frame["method"], "logsSubscribe");
        assert_eq!(frame["params"][0]["mentions"][0], WALLET);
        assert_eq!(frame["params"][1]["commitment"], "confirmed");
    }

    #[test]
    fn ack_then_notification_is_routed() {
        let (mut state, mut events) = state();
        let (frame, mut reply) = subscribe(&mut state, 1);

        assert!(state.on_text(&ack(&frame["id"], 77)).is_none());
        assert!(reply.try_recv().unwrap().is_ok());

        state.on_text(&notification(77, "sig-1", "null"));
        let event = events.try_recv().unwrap();
        assert_eq!(event.address.as_str(), WALLET);
        assert_eq!(event.signature, "sig-1");
        assert!(!event.failed);

        state.on_text(&notification(77, "sig-2", r#"{"InstructionError":[0,"Custom"]}"#));
        assert!(events.try_recv().unwrap().failed);
    }

    #[test]
    fn unknown_subscription_is_ignored() {
        let (mut state, mut events) = state();
        state.on_text(&notification(5, "sig", "null"));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn rejected_subscribe_reports_error() {
        let (mut state, _events) = state();
        let (frame, mut reply) = subscribe(&mut state, 1);

        let text = format!(
            r#"{{"jsonrpc":"2.0","error":{{"code":-32602,"message":"Invalid Request"}},"id":{}}}"#,
            frame["id"]
        );
        state.on_text(&text);

        assert!(matches!(
            reply.try_recv().unwrap(),
            Err(Error::Rpc { code: -32602, .. })
        ));
        assert!(state.active.is_empty());
    }

    #[test]
    fn unsubscribe_sends_server_id() {
        let (mut state, _events) = state();
        let (frame, _) = subscribe(&mut state, 1);
        state.on_text(&ack(&frame["id"], 77));

        let (reply, mut rx) = oneshot::channel();
        let out = state
            .on_command(FeedCommand::Unsubscribe {
                id: SubscriptionId(1),
                reply,
            })
            .unwrap();
        let out: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(out["method"], "logsUnsubscribe");
        assert_eq!(out["params"][0], 77);

        state.on_text(&format!(r#"{{"jsonrpc":"2.0","result":true,"id":{}}}"#, out["id"]));
        assert!(rx.try_recv().unwrap().is_ok());
        assert!(state.active.is_empty());
    }

    #[test]
    fn cancel_before_ack_unsubscribes_late_ack() {
        let (mut state, _events) = state();
        let (frame, _) = subscribe(&mut state, 1);

        let (reply, mut rx) = oneshot::channel();
        assert!(state
            .on_command(FeedCommand::Unsubscribe {
                id: SubscriptionId(1),
                reply,
            })
            .is_none());
        assert!(rx.try_recv().unwrap().is_ok());

        let out = state.on_text(&ack(&frame["id"], 77)).unwrap();
        let out: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(out["method"], "logsUnsubscribe");
        assert_eq!(out["params"][0], 77);
    }

    #[test]
    fn reconnect_resubscribes_active() {
        let (mut state, mut events) = state();
        let (frame, _) = subscribe(&mut state, 1);
        state.on_text(&ack(&frame["id"], 77));

        state.on_disconnect();
        state.on_text(&notification(77, "stale", "null"));
        assert!(events.try_recv().is_err());

        let frames = state.resubscribe_all();
        assert_eq!(frames.len(), 1);
        let frame: Value = serde_json::from_str(&frames[0]).unwrap();
        assert_eq!(frame["params"][0]["mentions"][0], WALLET);

        state.on_text(&ack(&frame["id"], 91));
        state.on_text(&notification(91, "fresh", "null"));
        assert_eq!(events.try_recv().unwrap().signature, "fresh");
    }

    fn reject(request_id: &Value) -> String {
        format!(
            r#"{{"jsonrpc":"2.0","error":{{"code":-32005,"message":"Node is behind"}},"id":{request_id}}}"#
        )
    }

    #[test]
    fn rejected_resubscribe_is_retried() {
        let (mut state, mut events) = state();
        let (frame, _) = subscribe(&mut state, 1);
        state.on_text(&ack(&frame["id"], 77));

        state.on_disconnect();
        let frames = state.resubscribe_all();
        let frame: Value = serde_json::from_str(&frames[0]).unwrap();
        state.on_text(&reject(&frame["id"]));
        assert!(state.active.contains_key(&SubscriptionId(1)));

        let retried = state.retry_rejected();
        assert_eq!(retried.len(), 1);
        assert!(state.retry_rejected().is_empty());

        let frame: Value = serde_json::from_str(&retried[0]).unwrap();
        assert_eq!(frame["params"][0]["mentions"][0], WALLET);
        state.on_text(&ack(&frame["id"], 91));
        state.on_text(&notification(91, "after-retry", "null"));
        assert_eq!(events.try_recv().unwrap().signature, "after-retry");
    }

    #[test]
    fn rejected_resubscribe_survives_next_reconnect() {
        let (mut state, _events) = state();
        let (frame, _) = subscribe(&mut state, 1);
        state.on_text(&ack(&frame["id"], 77));

        state.on_disconnect();
        let frames = state.resubscribe_all();
        let frame: Value = serde_json::from_str(&frames[0]).unwrap();
        state.on_text(&format!(r#"{{"jsonrpc":"2.0","result":null,"id":{}}}"#, frame["id"]));

        state.on_disconnect();
        assert!(state.retry_rejected().is_empty());
        assert_eq!(state.resubscribe_all().len(), 1);
    }

    #[test]
    fn unsubscribe_cancels_pending_retry() {
        let (mut state, _events) = state();
        let (frame, _) = subscribe(&mut state, 1);
        state.on_text(&ack(&frame["id"], 77));

        state.on_disconnect();
        let frames = state.resubscribe_all();
        let frame: Value = serde_json::from_str(&frames[0]).unwrap();
        state.on_text(&reject(&frame["id"]));

        let (reply, mut rx) = oneshot::channel();
        assert!(state
            .on_command(FeedCommand::Unsubscribe {
                id: SubscriptionId(1),
                reply,
            })
            .is_none());
        assert!(rx.try_recv().unwrap().is_ok());
        assert!(state.retry_rejected().is_empty());
    }

    #[test]
    fn offline_commands_are_queued() {
        let (mut state, _events) = state();
        let (reply, mut rx) = oneshot::channel();
        state.on_command_offline(FeedCommand::Subscribe {
            id: SubscriptionId(3),
            address: WalletAddress::parse(WALLET).unwrap(),
            reply,
        });
        assert!(rx.try_recv().unwrap().is_ok());
        assert_eq!(state.resubscribe_all().len(), 1);
    }

    #[test]
    fn garbage_is_ignored() {
        let (mut state, _events) = state();
        assert!(state.on_text("not json").is_none());
        assert!(state.on_text(r#"{"hello":"world"}"#).is_none());
    }
}
