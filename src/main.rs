//! MCQuiz · English MCQ Generator Backend
//!
//! - Axum HTTP API
//! - Groq chat-completions integration (via environment variables)
//! - Two deployable variants (standard / kids) selected at startup
//!
//! Important env variables:
//!   PORT          : u16 (default 3000)
//!   VARIANT       : "standard" (default) or "kids"
//!   GROQ_API_KEY    : enables MCQ generation if present
//!   GROQ_BASE_URL    : default "https://api.groq.com/openai/v1"
//!   GROQ_MODEL      : default "llama3-70b-8192"
//!   QUIZ_CONFIG_PATH  : path to TOML config (prompt template overrides)
//!   LOG_LEVEL    : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT      : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod topics;
mod prompt;
mod error;
mod protocol;
mod groq;
mod extract;
mod state;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  dotenvy::dotenv().ok();
  telemetry::init_tracing();

  // Build shared application state (variant profile, prompts, Groq client).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "mcquiz_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
