//! Main entry point for the backend server.
//!
//! Initializes the actor system, configures application state, and launches the HTTP server
//! with the WebSocket endpoints through which a front-end plays memory-trainer sessions.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;
use server::game_session::server::GameSessionManager;

use crate::config::server::{BIND_HOST, BIND_PORT};

pub mod config;
mod server;
mod game;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    // Start the GameSessionManager actor (creates and tracks one session per player).
    let game_session_manager = GameSessionManager::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_session_manager));

    info!("[Server] Listening on {}:{}", BIND_HOST, BIND_PORT);

    // Start the HTTP server with WebSocket endpoints.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
