//! Room Broadcaster: live membership and fan-out.

use std::sync::Arc;

use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::domain::{ChatMessage, HistoryLog, Subscriber, SubscriberId};

use super::ActorError;

const COMPONENT: &str = "Room broadcaster";

/// Commands accepted by the room broadcaster.
#[derive(Debug)]
pub enum RoomCommand {
    /// Join the room and receive the history backlog
    Register(Subscriber),
    /// Leave the room; every membership entry with this id is removed
    Unregister(SubscriberId),
    /// Broadcast a message to all members and record it in history
    Publish { sender: String, content: String },
    /// Reply with the ids of current members, in insertion order
    Members(oneshot::Sender<Vec<SubscriberId>>),
}

/// Owner of the room membership.
pub struct RoomBroadcaster {
    members: Vec<Subscriber>,
    history: Arc<dyn HistoryLog>,
}

impl RoomBroadcaster {
    pub fn new(history: Arc<dyn HistoryLog>) -> Self {
        Self {
            members: Vec::new(),
            history,
        }
    }

    pub fn members(&self) -> &[Subscriber] {
        &self.members
    }

    /// Apply one command to the room.
    pub fn handle(&mut self, command: RoomCommand) {
        match command {
            RoomCommand::Register(subscriber) => {
                tracing::debug!("Subscriber '{}' registered", subscriber.id());
                self.members.push(subscriber.clone());
                // the replay is served by the history store, not ordered with later broadcasts
                self.history.get_recent(subscriber);
            }
            RoomCommand::Unregister(id) => {
                let before = self.members.len();
                self.members.retain(|member| member.id() != id);
                if self.members.len() < before {
                    tracing::debug!("Subscriber '{}' unregistered", id);
                } else {
                    tracing::debug!("Subscriber '{}' was not registered, ignoring", id);
                }
            }
            RoomCommand::Publish { sender, content } => {
                self.publish(ChatMessage::new(sender, content));
            }
            RoomCommand::Members(reply) => {
                let _ = reply.send(self.members.iter().map(Subscriber::id).collect());
            }
        }
    }

    fn publish(&self, message: ChatMessage) {
        let mut delivered = 0;
        for member in &self.members {
            // a dead subscriber is cleaned up by its own Unregister
            match member.deliver(message.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::debug!("Skipping subscriber during broadcast: {}", e),
            }
        }
        tracing::debug!(
            "Broadcasted message from '{}' to {}/{} subscribers",
            message.sender(),
            delivered,
            self.members.len()
        );
        self.history.append(message);
    }

    /// Move the broadcaster onto its own task and return the handle to reach it.
    ///
    /// The task exits once every [`RoomHandle`] has been dropped.
    pub fn spawn(self) -> (RoomHandle, JoinHandle<()>) {
        let (mailbox, commands) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(commands));
        (RoomHandle { mailbox }, task)
    }

    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<RoomCommand>) {
        tracing::info!("{} started", COMPONENT);
        while let Some(command) = commands.recv().await {
            self.handle(command);
        }
        tracing::info!("{} stopped", COMPONENT);
    }
}

/// Cloneable handle to a running [`RoomBroadcaster`].
#[derive(Debug, Clone)]
pub struct RoomHandle {
    mailbox: mpsc::UnboundedSender<RoomCommand>,
}

impl RoomHandle {
    fn send(&self, command: RoomCommand) {
        if self.mailbox.send(command).is_err() {
            tracing::warn!("{} is not running, command dropped", COMPONENT);
        }
    }

    pub fn register(&self, subscriber: Subscriber) {
        self.send(RoomCommand::Register(subscriber));
    }

    pub fn unregister(&self, subscriber: &Subscriber) {
        self.send(RoomCommand::Unregister(subscriber.id()));
    }

    pub fn publish(&self, sender: impl Into<String>, content: impl Into<String>) {
        self.send(RoomCommand::Publish {
            sender: sender.into(),
            content: content.into(),
        });
    }

    /// Ids of the current members.
    ///
    /// The answer reflects every command enqueued before this call.
    pub async fn members(&self) -> Result<Vec<SubscriberId>, ActorError> {
        let (reply, response) = oneshot::channel();
        self.mailbox
            .send(RoomCommand::Members(reply))
            .map_err(|_| ActorError::Stopped(COMPONENT))?;
        response.await.map_err(|_| ActorError::Stopped(COMPONENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actor::HistoryStore,
        domain::{MockHistoryLog, SubscriberInbox},
    };

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - RoomBroadcaster のコマンド処理（Register / Unregister / Publish / Members）
    // - 履歴ストアへの転送（Register → GetRecent、Publish → Append）
    // - 実際の HistoryStore と組み合わせたエンドツーエンドの順序
    //
    // 【なぜこのテストが必要か】
    // - 全員への配信（fan-out）の完全性と、退出者の除外を保証する
    // - 切断済み subscriber が他の配信や履歴追加を妨げないことを保証する
    //
    // 【どのようなシナリオをテストするか】
    // 1. Register で GetRecent が 1 回発行される
    // 2. Publish で全員に 1 回ずつ配信され、Append が 1 回発行される
    // 3. Unregister 後の Publish は届かない／未登録の Unregister は no-op
    // 4. 閉じた subscriber があっても他の配信と Append は行われる
    // 5. alice / bob のシナリオ（実際の HistoryStore を使用）
    // ========================================

    fn drain(inbox: &mut SubscriberInbox) -> Vec<ChatMessage> {
        let mut received = Vec::new();
        while let Ok(message) = inbox.try_recv() {
            received.push(message);
        }
        received
    }

    fn ids(room: &RoomBroadcaster) -> Vec<SubscriberId> {
        room.members().iter().map(Subscriber::id).collect()
    }

    #[test]
    fn test_register_requests_history_replay() {
        // テスト項目: Register すると新しい subscriber 宛の GetRecent が 1 回発行される
        // given (前提条件):
        let (subscriber, _inbox) = Subscriber::channel();
        let expected_id = subscriber.id();
        let mut history = MockHistoryLog::new();
        history
            .expect_get_recent()
            .withf(move |destination| destination.id() == expected_id)
            .times(1)
            .return_const(());
        history.expect_append().never();
        let mut room = RoomBroadcaster::new(Arc::new(history));

        // when (操作):
        room.handle(RoomCommand::Register(subscriber));

        // then (期待する結果):
        assert_eq!(ids(&room), vec![expected_id]);
    }

    #[test]
    fn test_publish_fans_out_and_appends_once() {
        // テスト項目: Publish は登録済みの全員に 1 回ずつ届き、Append が 1 回発行される
        // given (前提条件):
        let mut history = MockHistoryLog::new();
        history.expect_get_recent().times(3).return_const(());
        history
            .expect_append()
            .withf(|message| *message == ChatMessage::new("alice", "hi"))
            .times(1)
            .return_const(());
        let mut room = RoomBroadcaster::new(Arc::new(history));
        let mut inboxes = Vec::new();
        for _ in 0..3 {
            let (subscriber, inbox) = Subscriber::channel();
            room.handle(RoomCommand::Register(subscriber));
            inboxes.push(inbox);
        }

        // when (操作):
        room.handle(RoomCommand::Publish {
            sender: "alice".to_string(),
            content: "hi".to_string(),
        });

        // then (期待する結果):
        for inbox in &mut inboxes {
            assert_eq!(drain(inbox), vec![ChatMessage::new("alice", "hi")]);
        }
    }

    #[test]
    fn test_unregistered_subscriber_is_excluded() {
        // テスト項目: Unregister 済みの subscriber にはその後の Publish が届かない
        // given (前提条件):
        let mut history = MockHistoryLog::new();
        history.expect_get_recent().return_const(());
        history.expect_append().times(1).return_const(());
        let mut room = RoomBroadcaster::new(Arc::new(history));
        let (alice, mut alice_inbox) = Subscriber::channel();
        let (bob, mut bob_inbox) = Subscriber::channel();
        room.handle(RoomCommand::Register(alice.clone()));
        room.handle(RoomCommand::Register(bob.clone()));

        // when (操作):
        room.handle(RoomCommand::Unregister(alice.id()));
        room.handle(RoomCommand::Publish {
            sender: "bob".to_string(),
            content: "bye".to_string(),
        });

        // then (期待する結果):
        assert!(drain(&mut alice_inbox).is_empty());
        assert_eq!(drain(&mut bob_inbox), vec![ChatMessage::new("bob", "bye")]);
        assert_eq!(ids(&room), vec![bob.id()]);
    }

    #[test]
    fn test_unregister_unknown_subscriber_is_noop() {
        // テスト項目: 未登録の subscriber の Unregister はメンバーを変えずエラーにもならない
        // given (前提条件):
        let mut history = MockHistoryLog::new();
        history.expect_get_recent().return_const(());
        let mut room = RoomBroadcaster::new(Arc::new(history));
        let (alice, _alice_inbox) = Subscriber::channel();
        let (stranger, _stranger_inbox) = Subscriber::channel();
        room.handle(RoomCommand::Register(alice.clone()));

        // when (操作):
        room.handle(RoomCommand::Unregister(stranger.id()));

        // then (期待する結果):
        assert_eq!(ids(&room), vec![alice.id()]);
    }

    #[test]
    fn test_unregister_removes_every_entry_for_handle() {
        // テスト項目: 同じハンドルが重複登録されていても Unregister で全て除去される
        // given (前提条件):
        let mut history = MockHistoryLog::new();
        history.expect_get_recent().times(2).return_const(());
        let mut room = RoomBroadcaster::new(Arc::new(history));
        let (alice, _inbox) = Subscriber::channel();
        room.handle(RoomCommand::Register(alice.clone()));
        room.handle(RoomCommand::Register(alice.clone()));

        // when (操作):
        room.handle(RoomCommand::Unregister(alice.id()));

        // then (期待する結果):
        assert!(room.members().is_empty());
    }

    #[test]
    fn test_closed_subscriber_does_not_break_fan_out() {
        // テスト項目: 閉じた subscriber がいても他への配信と Append は行われる
        // given (前提条件):
        let mut history = MockHistoryLog::new();
        history.expect_get_recent().return_const(());
        history.expect_append().times(1).return_const(());
        let mut room = RoomBroadcaster::new(Arc::new(history));
        let (closed, closed_inbox) = Subscriber::channel();
        let (open, mut open_inbox) = Subscriber::channel();
        room.handle(RoomCommand::Register(closed.clone()));
        room.handle(RoomCommand::Register(open));
        drop(closed_inbox);

        // when (操作):
        room.handle(RoomCommand::Publish {
            sender: "alice".to_string(),
            content: "hi".to_string(),
        });

        // then (期待する結果): 閉じた subscriber はメンバーに残る（掃除は Unregister の役割）
        assert_eq!(drain(&mut open_inbox), vec![ChatMessage::new("alice", "hi")]);
        assert!(ids(&room).contains(&closed.id()));
    }

    #[tokio::test]
    async fn test_alice_and_bob_scenario() {
        // テスト項目: Register(A), Register(B), Publish(alice,hi), Unregister(A), Publish(bob,bye)
        // given (前提条件):
        let (history, _history_task) = HistoryStore::new().spawn();
        let (room, _room_task) = RoomBroadcaster::new(Arc::new(history.clone())).spawn();
        let (a, mut a_inbox) = Subscriber::channel();
        let (b, mut b_inbox) = Subscriber::channel();

        // when (操作):
        room.register(a.clone());
        room.register(b.clone());
        room.publish("alice", "hi");
        room.unregister(&a);
        room.publish("bob", "bye");
        // Members は先行するコマンド（と、それらが発行した Append）の後に処理される
        let members = room.members().await.unwrap();
        let log = history.snapshot().await.unwrap();

        // then (期待する結果):
        assert_eq!(members, vec![b.id()]);
        assert_eq!(drain(&mut a_inbox), vec![ChatMessage::new("alice", "hi")]);
        assert_eq!(
            drain(&mut b_inbox),
            vec![ChatMessage::new("alice", "hi"), ChatMessage::new("bob", "bye")]
        );
        assert_eq!(
            log,
            vec![ChatMessage::new("alice", "hi"), ChatMessage::new("bob", "bye")]
        );
    }

    #[tokio::test]
    async fn test_late_joiner_receives_backlog_in_order() {
        // テスト項目: 後から参加した subscriber は過去ログを発言順に受け取る
        // given (前提条件):
        let (history, _history_task) = HistoryStore::new().spawn();
        let (room, _room_task) = RoomBroadcaster::new(Arc::new(history.clone())).spawn();
        for i in 0..5 {
            room.publish("alice", format!("message {}", i));
        }

        // when (操作):
        let (late, mut late_inbox) = Subscriber::channel();
        room.register(late);
        room.members().await.unwrap();
        // GetRecent は Members の応答前に履歴ストアへ送られている
        history.snapshot().await.unwrap();

        // then (期待する結果):
        let expected: Vec<ChatMessage> = (0..5)
            .map(|i| ChatMessage::new("alice", format!("message {}", i)))
            .collect();
        assert_eq!(drain(&mut late_inbox), expected);
    }

    #[tokio::test]
    async fn test_members_after_stop_fails() {
        // テスト項目: 停止した broadcaster への問い合わせは Stopped を返す
        // given (前提条件):
        let (history, _history_task) = HistoryStore::new().spawn();
        let (room, task) = RoomBroadcaster::new(Arc::new(history)).spawn();
        task.abort();
        let _ = task.await;

        // when (操作):
        room.publish("alice", "hi");
        let result = room.members().await;

        // then (期待する結果):
        assert_eq!(result, Err(ActorError::Stopped("Room broadcaster")));
    }
}
