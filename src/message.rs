use tokio::sync::oneshot;

use crate::snapshot::Snapshot;

#[derive(Debug)]
pub enum SelfMessage {
    Tick,
}

#[derive(Debug)]
pub enum ClientMessage {
    GetSnapshot {
        reply_to: oneshot::Sender<Snapshot>,
    },
}

#[derive(Debug)]
pub enum Message {
    SelfTimer(SelfMessage),
    Client(ClientMessage),
}
