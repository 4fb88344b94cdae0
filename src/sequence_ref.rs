use async_trait::async_trait;
use tokio::sync::{mpsc::UnboundedSender, oneshot};

use crate::{
    message::{ClientMessage, Message},
    snapshot::Snapshot,
};

/// Handle to the running sequence actor. Clones share the same mailbox.
#[derive(Clone, Debug)]
pub struct SequenceRef {
    mailbox: UnboundedSender<Message>,
}

impl SequenceRef {
    pub fn new(mailbox: UnboundedSender<Message>) -> Self {
        Self { mailbox }
    }

    pub fn offer(&self, message: Message) {
        self.mailbox.send(message).unwrap()
    }
}

/// Read access to the latest value of a running sequence.
#[async_trait]
pub trait CurrentSource {
    async fn snapshot(&self) -> Option<Snapshot>;
}

#[async_trait]
impl CurrentSource for SequenceRef {
    async fn snapshot(&self) -> Option<Snapshot> {
        let (reply_to, reply) = oneshot::channel();
        self.offer(Message::Client(ClientMessage::GetSnapshot { reply_to }));
        reply.await.ok()
    }
}
