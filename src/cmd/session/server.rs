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

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use studpal_core::catalog::Catalog;
use studpal_core::rng::TinyRng;
use studpal_core::rng::shuffle;
use studpal_core::session::Session;
use studpal_core::types::item::StudyItem;
use studpal_core::types::timestamp::Timestamp;
use tokio::net::TcpListener;
use tokio::select;
use tokio::signal;
use tokio::sync::oneshot::Receiver;
use tokio::sync::oneshot::channel;

use crate::cmd::session::get::get_handler;
use crate::cmd::session::post::post_handler;
use crate::cmd::session::state::MutableState;
use crate::cmd::session::state::ServerState;
use crate::error::Fallible;
use crate::error::fail;
use crate::utils::CACHE_CONTROL_IMMUTABLE;

/// Which kind of session the server drives.
#[derive(Clone, Copy, PartialEq)]
pub enum SessionKind {
    /// Flashcards from a deck.
    Study,
    /// Practice questions from a subject.
    Quiz,
}

pub struct ServerConfig {
    pub kind: SessionKind,
    /// Deck or subject title. By default, the first one in the catalog.
    pub title: Option<String>,
    pub host: String,
    pub port: u16,
    pub session_started_at: Timestamp,
    pub item_limit: Option<usize>,
    pub shuffle: bool,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let catalog = Catalog::seed()?;
    let (title, items): (String, Vec<StudyItem>) = match config.kind {
        SessionKind::Study => {
            let deck = catalog.deck(config.title.as_deref())?;
            (deck.title.clone(), deck.cards.clone())
        }
        SessionKind::Quiz => {
            let subject = catalog.subject(config.title.as_deref())?;
            (subject.title.clone(), subject.questions.clone())
        }
    };

    // Apply the item limit.
    let items: Vec<StudyItem> = match config.item_limit {
        Some(limit) => items.into_iter().take(limit).collect(),
        None => items,
    };

    let items: Vec<StudyItem> = if config.shuffle {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        let mut rng = TinyRng::from_seed(seed);
        shuffle(items, &mut rng)
    } else {
        items
    };

    let session = Session::new(items)?;

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = channel();

    let state = ServerState {
        title,
        total_items: session.total(),
        session_started_at: config.session_started_at,
        mutable: Arc::new(Mutex::new(MutableState {
            session,
            outcomes: HashMap::new(),
            finished_at: None,
        })),
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state.clone());
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C or the close button.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    // Check if session was complete when server shut down
    let mutable = state.mutable.lock().unwrap();
    if mutable.finished_at.is_some() {
        Ok(())
    } else {
        fail("Session interrupted before completion")
    }
}

async fn style_handler() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

async fn shutdown_signal(shutdown_rx: Receiver<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let shutdown = async {
        shutdown_rx.await.ok();
    };

    select! {
        _ = ctrl_c => {
            log::debug!("Received Ctrl+C, shutting down gracefully");
        },
        _ = shutdown => {
            log::debug!("Received shutdown signal, shutting down gracefully");
        },
    }
}
