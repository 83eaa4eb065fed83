//! HTTP and WebSocket routing configuration.
//!
//! Defines the endpoints for opening a new game session or reattaching to one.
//! Each connection is handled by a dedicated WebSocket actor.

use actix_web::web;
use crate::server::game_session::session::{ws_new_game, ws_resume_game};

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_new_game)
    )
    .service(
        web::resource("/ws/game/{game_id}")
            .to(ws_resume_game)
    );
}
