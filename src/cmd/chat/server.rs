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

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use axum::Router;
use axum::extract::Form;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::response::Redirect;
use axum::routing::get;
use axum::routing::post;
use maud::DOCTYPE;
use maud::Markup;
use maud::html;
use serde::Deserialize;
use studpal_core::catalog::Catalog;
use studpal_core::catalog::LOCAL_USER;
use studpal_core::chat::ChatRoom;
use studpal_core::chat::SimulatedFeed;
use studpal_core::types::timestamp::Timestamp;
use tokio::net::TcpListener;
use tokio::select;
use tokio::signal;
use tokio::spawn;
use tokio::sync::oneshot::Receiver;
use tokio::sync::oneshot::Sender;
use tokio::sync::oneshot::channel;
use tokio::time::interval;

use crate::error::Fallible;
use crate::utils::CACHE_CONTROL_IMMUTABLE;

pub struct ChatConfig {
    /// Group name. By default, the first group in the catalog.
    pub group: Option<String>,
    pub host: String,
    pub port: u16,
    /// Seconds between polls for incoming messages.
    pub interval_secs: u64,
}

#[derive(Clone)]
struct ChatState {
    room: Arc<Mutex<ChatRoom>>,
    shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

pub async fn start_chat_server(config: ChatConfig) -> Fallible<()> {
    let catalog = Catalog::seed()?;
    let group = catalog.group(config.group.as_deref())?.clone();
    let transcript = catalog.transcript()?;
    let room = Arc::new(Mutex::new(ChatRoom::new(group, transcript)));

    let (shutdown_tx, shutdown_rx) = channel();
    let state = ChatState {
        room: room.clone(),
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };

    // Poll the message source on a fixed interval. The task is aborted when
    // the server stops; there is no other cancellation.
    let feed_room = room.clone();
    let interval_secs = config.interval_secs.max(1);
    let feed_task = spawn(async move {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        let mut feed = SimulatedFeed::from_seed(seed);
        let mut ticker = interval(Duration::from_secs(interval_secs));
        // The first tick fires immediately; skip it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let arrived = feed_room
                .lock()
                .unwrap()
                .pull(&mut feed, Timestamp::now());
            if arrived {
                log::debug!("Simulated message arrived");
            }
        }
    });

    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    log::debug!("Starting chat server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    feed_task.abort();
    Ok(())
}

#[derive(Deserialize)]
struct ChatForm {
    message: Option<String>,
    action: Option<String>,
}

async fn get_handler(State(state): State<ChatState>) -> Html<String> {
    let room = state.room.lock().unwrap();
    let body = render_room(&room);
    Html(page_template(body).into_string())
}

async fn post_handler(State(state): State<ChatState>, Form(form): Form<ChatForm>) -> Redirect {
    if form.action.as_deref() == Some("Leave") {
        if let Some(tx) = state.shutdown_tx.lock().unwrap().take() {
            let _ = tx.send(());
        }
        return Redirect::to("/");
    }
    if let Some(message) = form.message {
        let mut room = state.room.lock().unwrap();
        room.post(&message, Timestamp::now());
    }
    Redirect::to("/")
}

fn render_room(room: &ChatRoom) -> Markup {
    let group = room.group();
    html! {
        div class="container chat" {
            header {
                h1 { (group.name) }
                span class="members" { (group.member_count()) " members" }
            }
            ul class="messages" {
                @for message in room.messages() {
                    @let mine = message.author == LOCAL_USER;
                    li class=(if mine { "message mine" } else { "message" }) {
                        span class="author" { (message.author) }
                        span class="time" { (message.sent_at.time_of_day()) }
                        p { (message.text) }
                    }
                }
            }
            form method="post" action="/" class="composer" {
                input type="text" name="message" placeholder="Type a message..." autofocus;
                button type="submit" { "Send" }
                button type="submit" name="action" value="Leave" class="leave" { "Leave" }
            }
        }
    }
}

fn page_template(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "studpal" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (body)
            }
        }
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
