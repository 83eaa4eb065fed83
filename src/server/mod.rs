// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (one controller per session, timers, client bridge)
//! - Error frames and per-connection flood protection

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
pub mod anti_spam;
