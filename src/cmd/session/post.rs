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

use axum::extract::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;
use studpal_core::session::SessionSignal;
use studpal_core::types::item_hash::ItemHash;
use studpal_core::types::timestamp::Timestamp;

use crate::cmd::session::state::ServerState;

#[derive(Deserialize)]
pub struct ActionForm {
    action: String,
    option: Option<usize>,
    /// Hash of the item the form was rendered for.
    item: Option<ItemHash>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<ActionForm>,
) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    if mutable.finished_at.is_some() {
        // Once the session is over, the only action left is closing the
        // server. Everything else redirects back to the completion page.
        if form.action == "Shutdown" {
            if let Some(tx) = state.shutdown_tx.lock().unwrap().take() {
                let _ = tx.send(());
            }
        }
        return Redirect::to("/");
    }
    if let Some(item) = form.item {
        // The form was rendered for a specific item. If a navigation won the
        // race, the submission is stale and must not act on the new item.
        if item != mutable.session.current_item().hash() {
            log::debug!("Ignoring action addressed to a stale item");
            return Redirect::to("/");
        }
    }
    match form.action.as_str() {
        "Flip" => {
            mutable.session.reveal(None);
        }
        "Answer" => {
            if let Some(option) = form.option {
                mutable.session.reveal(Some(option));
                let position = mutable.session.position();
                if let Some(outcome) = mutable.session.outcome() {
                    mutable.outcomes.insert(position, outcome);
                }
            }
        }
        "Next" => {
            if mutable.session.advance() == SessionSignal::Complete {
                mutable.finished_at = Some(Timestamp::now());
            }
        }
        "Previous" => {
            mutable.session.retreat();
        }
        "End" => {
            mutable.finished_at = Some(Timestamp::now());
        }
        other => {
            log::debug!("Ignoring unknown action: {other}");
        }
    }
    Redirect::to("/")
}
