// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use quizcards_core::Fallible;
use quizcards_core::fail;
use quizcards_core::load_deck;
use quizcards_core::to_json;
use tokio::net::TcpListener;
use tokio::signal;

/// The fixed path the viewer fetches its deck from.
pub const DECK_PATH: &str = "/flashcards.json";

pub struct ServerConfig {
    pub path: String,
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
struct ServerState {
    /// The deck after the viewer's load rules, serialized once.
    deck: Arc<String>,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let path = Path::new(&config.path);
    if !path.exists() {
        return fail("deck does not exist.");
    }
    let cards = load_deck(&read_to_string(path)?)?;
    let state = ServerState {
        deck: Arc::new(to_json(&cards)?),
    };

    let app = Router::new();
    let app = app.route(DECK_PATH, get(deck_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    log::debug!("Serving {} flashcard(s) on {bind}", cards.len());
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn deck_handler(
    State(state): State<ServerState>,
) -> (StatusCode, [(HeaderName, &'static str); 1], String) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "application/json")],
        state.deck.as_ref().clone(),
    )
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::debug!("Received Ctrl+C, shutting down gracefully");
}
