use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::types::{GameSnapshot, Notification};

/// Commands a client may send over the WebSocket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "action", content = "data")]
pub enum ClientCommand {
    Start,
    /// Yes or no, the answer is not scored.
    AnswerDistraction,
    ClickCell { row: usize, col: usize },
    Reset,
    Ping,
}

// Message serveur -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    SessionCreated {
        game_id: Uuid,
    },
    StateUpdate(GameSnapshot),
    Notice {
        notification: Notification,
        message: String,
    },
    Error {
        code: String,
        message: String,
        context: Option<String>,
    },
    /// Another connection took over this game; the receiver must close.
    Kicked {
        game_id: Uuid,
    },
}

impl ServerWsMessage {
    pub fn session_created(game_id: Uuid) -> Self {
        Self::SessionCreated { game_id }
    }
    pub fn notice(notification: Notification) -> Self {
        let message = notification.message();
        Self::Notice { notification, message }
    }
    pub fn error(code: &str, message: &str, context: Option<String>) -> Self {
        Self::Error { code: code.to_string(), message: message.to_string(), context }
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub connection_id: Uuid,
    pub command: ClientCommand,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterSession {
    pub connection_id: Uuid,
    pub client: Recipient<ServerWsMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterSession {
    pub connection_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "GameSnapshot")]
pub struct GetSnapshot;
