/// WebSocket session handler for a game.
///
/// This actor manages one client connection: it parses client commands, relays
/// them to the owning `GameSession` and serializes server messages back to the client.
use actix::{Addr, Actor, ActorContext, AsyncContext, Handler, StreamHandler};
use actix_web::{HttpRequest, HttpResponse, web, Error, error, http::StatusCode};
use actix_web_actors::ws;
use log::{info, warn};
use uuid::Uuid;

use crate::game::CommandError;
use crate::server::anti_spam::AntiSpamState;
use crate::server::game_session::server::{GameSession, CreateGame, GetGameSession};
use crate::server::game_session::messages::{
    ClientCommand, ProcessClientMessage, RegisterSession, ServerWsMessage, UnregisterSession,
};
use crate::server::ws_error::{http_error_response, ws_error_message, ws_session_kicked_message};

pub struct GameSessionActor {
    pub game_id: Uuid,
    pub connection_id: Uuid,
    pub session_addr: Addr<GameSession>,
    anti_spam: AntiSpamState,
}

impl GameSessionActor {
    pub fn new(game_id: Uuid, session_addr: Addr<GameSession>) -> Self {
        Self {
            game_id,
            connection_id: Uuid::new_v4(),
            session_addr,
            anti_spam: AntiSpamState::new(),
        }
    }

    /// Send an error frame unless anti-spam suppresses it.
    fn send_error(&mut self, ctx: &mut ws::WebsocketContext<Self>, code: &str, message: &str) {
        if self.anti_spam.should_send_error(code, &self.connection_id.to_string()) {
            ctx.text(ws_error_message(code, message, Some(&self.game_id.to_string())));
        }
    }

    fn close_with(ctx: &mut ws::WebsocketContext<Self>, code: ws::CloseCode, description: &str) {
        ctx.close(Some(ws::CloseReason {
            code,
            description: Some(description.to_string()),
        }));
        ctx.stop();
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Attaches this connection to the game session.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[GameSessionActor] connection {} attached to game {}", self.connection_id, self.game_id);
        self.session_addr.do_send(RegisterSession {
            connection_id: self.connection_id,
            client: ctx.address().recipient(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.session_addr.do_send(UnregisterSession {
            connection_id: self.connection_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                if self.anti_spam.record_command(&self.connection_id.to_string()) {
                    ctx.text(ws_error_message(
                        "RATE_LIMITED",
                        "Too many commands per second.",
                        Some(&self.game_id.to_string()),
                    ));
                    Self::close_with(ctx, ws::CloseCode::Policy, "Rate limited");
                    return;
                }
                let command: ClientCommand = match serde_json::from_str(&text) {
                    Ok(command) => command,
                    Err(e) => {
                        let e = CommandError::Malformed(e.to_string());
                        warn!("[GameSessionActor] connection {}: {}", self.connection_id, e);
                        self.send_error(ctx, e.code(), &e.to_string());
                        return;
                    }
                };
                self.anti_spam.reset_error_suppression();
                self.session_addr.do_send(ProcessClientMessage {
                    connection_id: self.connection_id,
                    command,
                });
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[GameSessionActor] connection {} protocol error: {}", self.connection_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) -> Self::Result {
        if let ServerWsMessage::Kicked { game_id } = msg {
            ctx.text(ws_session_kicked_message(Some(&game_id.to_string())));
            Self::close_with(ctx, ws::CloseCode::Policy, "Replaced by another connection");
            return;
        }
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[GameSessionActor] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(ws_error_message("INTERNAL", "Internal server error", None));
                Self::close_with(ctx, ws::CloseCode::Error, "Internal server error");
            }
        }
    }
}

/// WebSocket endpoint opening a fresh game session.
pub async fn ws_new_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let (game_id, session_addr) = data.game_session_manager
        .send(CreateGame)
        .await
        .map_err(error::ErrorInternalServerError)?;

    ws::start(GameSessionActor::new(game_id, session_addr), &req, stream)
}

/// WebSocket endpoint reattaching to a live game session.
pub async fn ws_resume_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let raw_id = req.match_info().get("game_id").unwrap_or_default();
    let game_id = match Uuid::parse_str(raw_id) {
        Ok(id) => id,
        Err(_) => {
            return Ok(http_error_response(
                "INVALID_GAME_ID",
                "Game id is not a valid UUID",
                Some(raw_id),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    let session_addr = match data.game_session_manager
        .send(GetGameSession { game_id })
        .await
        .map_err(error::ErrorInternalServerError)?
    {
        Ok(addr) => addr,
        Err(message) => {
            return Ok(http_error_response(
                "GAME_NOT_FOUND",
                &message,
                Some(&game_id.to_string()),
                StatusCode::NOT_FOUND,
            ));
        }
    };

    ws::start(GameSessionActor::new(game_id, session_addr), &req, stream)
}
