use actix::prelude::*;
use std::collections::HashMap;
use actix::MessageResult;
use uuid::Uuid;
use log::{debug, info, warn};
use std::time::Duration;

use crate::config::server::SESSION_IDLE_TIMEOUT_SECS;
use crate::game::schedule::TaskId;
use crate::game::state::GameState;
use crate::server::game_session::messages::{
    ClientCommand, GetSnapshot, ProcessClientMessage, RegisterSession, ServerWsMessage,
    UnregisterSession,
};

/// Connection currently driving a session.
struct AttachedClient {
    connection_id: Uuid,
    addr: Recipient<ServerWsMessage>,
}

/// One player's game. Owns the controller and runs its timers.
pub struct GameSession {
    pub game_id: Uuid,
    pub(super) game_state: GameState,
    pub(super) timers: HashMap<TaskId, SpawnHandle>,
    client: Option<AttachedClient>,
    idle_timer: Option<SpawnHandle>,
    manager: Addr<GameSessionManager>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        // A session nobody attaches to must not live forever.
        self.arm_idle_timer(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession] Session {} stopped", self.game_id);
        self.manager.do_send(RemoveGame { game_id: self.game_id });
    }
}

impl GameSession {
    pub fn new(game_id: Uuid, manager: Addr<GameSessionManager>) -> Self {
        Self {
            game_id,
            game_state: GameState::new(),
            timers: HashMap::new(),
            client: None,
            idle_timer: None,
            manager,
        }
    }

    /// Send a message to the attached client, if any.
    pub(super) fn send_to_client(&self, msg: ServerWsMessage) {
        if let Some(client) = &self.client {
            client.addr.do_send(msg);
        }
    }

    pub fn send_state(&self) {
        let snapshot = self.game_state.snapshot();
        debug!(
            "[GameSession] Broadcast state: game_id={} level={} phase={:?}",
            self.game_id, snapshot.level, snapshot.phase
        );
        self.send_to_client(ServerWsMessage::StateUpdate(snapshot));
    }

    /// Push everything the controller produced since the last sync: timers to
    /// (un)schedule, notifications, then the fresh state.
    pub(super) fn sync(&mut self, ctx: &mut Context<Self>) {
        self.apply_schedule(ctx);
        self.flush_notifications();
        self.send_state();
    }

    /// Notifications stay queued in the controller until a client is attached.
    fn flush_notifications(&mut self) {
        if self.client.is_none() {
            return;
        }
        for notification in self.game_state.drain_notifications() {
            self.send_to_client(ServerWsMessage::notice(notification));
        }
    }

    fn arm_idle_timer(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.idle_timer.take() {
            ctx.cancel_future(handle);
        }
        let handle = ctx.run_later(Duration::from_secs(SESSION_IDLE_TIMEOUT_SECS), |act, ctx| {
            info!("[GameSession] Session {} idle for {}s, stopping", act.game_id, SESSION_IDLE_TIMEOUT_SECS);
            ctx.stop();
        });
        self.idle_timer = Some(handle);
    }

    fn apply_command(&mut self, command: ClientCommand) {
        let applied = match command {
            ClientCommand::Start => self.game_state.start_or_continue_level(),
            ClientCommand::AnswerDistraction => self.game_state.answer_distraction(),
            ClientCommand::ClickCell { row, col } => match self.game_state.click_cell(row, col) {
                Ok(outcome) => {
                    debug!("[GameSession] game_id={} click ({}, {}) -> {:?}", self.game_id, row, col, outcome);
                    true
                }
                Err(e) => {
                    warn!("[GameSession] game_id={} rejected click: {}", self.game_id, e);
                    self.send_to_client(ServerWsMessage::error(
                        e.code(),
                        &e.to_string(),
                        Some(self.game_id.to_string()),
                    ));
                    false
                }
            },
            ClientCommand::Reset => {
                self.game_state.reset();
                true
            }
            ClientCommand::Ping => true,
        };
        if !applied {
            debug!(
                "[GameSession] game_id={} command ignored in phase {:?}",
                self.game_id,
                self.game_state.phase()
            );
        }
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        // Only the attached connection may drive the game.
        if self.client.as_ref().map(|c| c.connection_id) != Some(msg.connection_id) {
            warn!(
                "[GameSession] game_id={} command from detached connection {}",
                self.game_id, msg.connection_id
            );
            return;
        }
        self.apply_command(msg.command);
        self.sync(ctx);
    }
}

impl Handler<RegisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterSession, ctx: &mut Context<Self>) -> Self::Result {
        if let Some(previous) = self.client.take() {
            info!(
                "[GameSession] game_id={} connection {} replaced by {}",
                self.game_id, previous.connection_id, msg.connection_id
            );
            previous.addr.do_send(ServerWsMessage::Kicked { game_id: self.game_id });
        }
        if let Some(handle) = self.idle_timer.take() {
            ctx.cancel_future(handle);
        }
        self.client = Some(AttachedClient {
            connection_id: msg.connection_id,
            addr: msg.client,
        });
        self.send_to_client(ServerWsMessage::session_created(self.game_id));
        self.flush_notifications();
        self.send_state();
    }
}

impl Handler<UnregisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: UnregisterSession, ctx: &mut Context<Self>) -> Self::Result {
        if self.client.as_ref().map(|c| c.connection_id) == Some(msg.connection_id) {
            self.client = None;
            self.arm_idle_timer(ctx);
        }
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game_state.snapshot())
    }
}

/// Creates sessions and resolves game ids to their actor.
pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
}

impl GameSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl Default for GameSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "(Uuid, Addr<GameSession>)")]
pub struct CreateGame;

impl Handler<CreateGame> for GameSessionManager {
    type Result = MessageResult<CreateGame>;

    fn handle(&mut self, _: CreateGame, ctx: &mut Context<Self>) -> Self::Result {
        let game_id = Uuid::new_v4();
        let session = GameSession::new(game_id, ctx.address()).start();
        self.sessions.insert(game_id, session.clone());
        info!("[SessionManager] Created game {} ({} live)", game_id, self.sessions.len());
        MessageResult((game_id, session))
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<GameSession>, String>")]
pub struct GetGameSession {
    pub game_id: Uuid,
}

impl Handler<GetGameSession> for GameSessionManager {
    type Result = Result<Addr<GameSession>, String>;

    fn handle(&mut self, msg: GetGameSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions.get(&msg.game_id)
            .cloned()
            .ok_or_else(|| "Game session not found".to_string())
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RemoveGame {
    pub game_id: Uuid,
}

impl Handler<RemoveGame> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: RemoveGame, _: &mut Context<Self>) -> Self::Result {
        if self.sessions.remove(&msg.game_id).is_some() {
            debug!("[SessionManager] Removed game {} ({} live)", msg.game_id, self.sessions.len());
        }
    }
}
