//! History Store: the append-only chat log.

use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::domain::{ChatMessage, HistoryLog, Subscriber};

use super::ActorError;

const COMPONENT: &str = "History store";

/// Commands accepted by the history store.
#[derive(Debug)]
pub enum HistoryCommand {
    /// Append a message to the end of the log
    Append(ChatMessage),
    /// Deliver every logged message, oldest first, to the destination
    GetRecent(Subscriber),
    /// Reply with a copy of the full log
    Snapshot(oneshot::Sender<Vec<ChatMessage>>),
}

/// Owner of the message log.
///
/// The log is unbounded and never compacted. `Append` is the only mutator.
#[derive(Debug, Default)]
pub struct HistoryStore {
    messages: Vec<ChatMessage>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Apply one command to the log.
    pub fn handle(&mut self, command: HistoryCommand) {
        match command {
            HistoryCommand::Append(message) => {
                self.messages.push(message);
                tracing::debug!(len = self.messages.len(), "Appended message to history");
            }
            HistoryCommand::GetRecent(destination) => self.replay_to(&destination),
            HistoryCommand::Snapshot(reply) => {
                // the requester may have given up waiting
                let _ = reply.send(self.messages.clone());
            }
        }
    }

    fn replay_to(&self, destination: &Subscriber) {
        let mut replayed = 0;
        for message in &self.messages {
            if let Err(e) = destination.deliver(message.clone()) {
                // every later delivery to a closed inbox fails the same way
                tracing::debug!("Stopped history replay after {} messages: {}", replayed, e);
                return;
            }
            replayed += 1;
        }
        tracing::debug!(
            "Replayed {} messages to subscriber '{}'",
            replayed,
            destination.id()
        );
    }

    /// Move the store onto its own task and return the handle to reach it.
    ///
    /// The task exits once every [`HistoryHandle`] has been dropped.
    pub fn spawn(self) -> (HistoryHandle, JoinHandle<()>) {
        let (mailbox, commands) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(commands));
        (HistoryHandle { mailbox }, task)
    }

    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<HistoryCommand>) {
        tracing::info!("{} started", COMPONENT);
        while let Some(command) = commands.recv().await {
            self.handle(command);
        }
        tracing::info!(
            "{} stopped with {} messages",
            COMPONENT,
            self.messages.len()
        );
    }
}

/// Cloneable handle to a running [`HistoryStore`].
#[derive(Debug, Clone)]
pub struct HistoryHandle {
    mailbox: mpsc::UnboundedSender<HistoryCommand>,
}

impl HistoryHandle {
    fn send(&self, command: HistoryCommand) {
        if self.mailbox.send(command).is_err() {
            tracing::warn!("{} is not running, command dropped", COMPONENT);
        }
    }

    /// Copy of the full log, oldest first.
    ///
    /// The copy reflects every command enqueued before this call.
    pub async fn snapshot(&self) -> Result<Vec<ChatMessage>, ActorError> {
        let (reply, response) = oneshot::channel();
        self.mailbox
            .send(HistoryCommand::Snapshot(reply))
            .map_err(|_| ActorError::Stopped(COMPONENT))?;
        response.await.map_err(|_| ActorError::Stopped(COMPONENT))
    }
}

impl HistoryLog for HistoryHandle {
    fn append(&self, message: ChatMessage) {
        self.send(HistoryCommand::Append(message));
    }

    fn get_recent(&self, destination: Subscriber) {
        self.send(HistoryCommand::GetRecent(destination));
    }
}
