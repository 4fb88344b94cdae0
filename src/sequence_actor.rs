use tokio::{
    sync::{
        mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
        watch,
    },
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{
    config::Config,
    generator::SequenceGenerator,
    message::{ClientMessage, Message, SelfMessage},
    sequence_ref::SequenceRef,
    snapshot::Snapshot,
};

/// Owns the generator and advances it on a fixed cadence.
///
/// All access to the generator goes through the actor's mailbox, so calls are
/// serialized by construction. New values are published on a watch channel:
/// readers only ever see the latest snapshot.
pub struct SequenceActor {
    config: Config,
    generator: SequenceGenerator,
    mailbox: UnboundedReceiver<Message>,
    // Sender to own mailbox.
    self_ref: UnboundedSender<Message>,
    // Join handle to the pending tick timer.
    timer: JoinHandle<()>,
    updates: watch::Sender<Snapshot>,
}

impl SequenceActor {
    pub fn make(config: Config) -> (SequenceRef, watch::Receiver<Snapshot>) {
        let (sender, receiver) = unbounded_channel();
        let timer = Self::tick_timer(&config, sender.clone());

        let generator = SequenceGenerator::new();
        let (updates, update_reader) = watch::channel(Snapshot::new(0, generator.current().clone()));

        let actor = Self {
            config,
            generator,
            mailbox: receiver,
            self_ref: sender.clone(),
            timer,
            updates,
        };

        tokio::spawn(actor.start());

        (SequenceRef::new(sender), update_reader)
    }

    fn tick_timer(config: &Config, self_sender: UnboundedSender<Message>) -> JoinHandle<()> {
        let delay = config.advance_interval;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            self_sender
                .send(Message::SelfTimer(SelfMessage::Tick))
                .unwrap()
        })
    }

    fn reset_tick_timer(&mut self) {
        self.timer.abort();
        let self_ref = self.self_ref.clone();
        self.timer = Self::tick_timer(&self.config, self_ref);
    }

    async fn start(mut self) {
        while let Some(message) = self.mailbox.recv().await {
            self.process_message(message);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.generator.step(), self.generator.current().clone())
    }

    fn process_message(&mut self, message: Message) {
        match message {
            Message::SelfTimer(SelfMessage::Tick) => {
                // The next tick is armed before anything else happens in this
                // iteration: the sequence must never stop advancing.
                self.reset_tick_timer();

                let next = self.generator.next();
                debug!("step {} advanced to {}", self.generator.step(), next);

                let snapshot = Snapshot::new(self.generator.step(), next);
                if let Err(error) = self.updates.send(snapshot) {
                    warn!("no reader for step {}: {}", self.generator.step(), error);
                }
            }
            Message::Client(ClientMessage::GetSnapshot { reply_to }) => {
                let _ = reply_to.send(self.snapshot());
            }
        }
    }
}
