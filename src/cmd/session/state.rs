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

use studpal_core::session::Outcome;
use studpal_core::session::Session;
use studpal_core::types::timestamp::Timestamp;
use tokio::sync::oneshot::Sender;

/// Immutable server state plus a handle to the session.
#[derive(Clone)]
pub struct ServerState {
    /// Title of the deck or subject being drilled.
    pub title: String,
    /// Number of items in the session.
    pub total_items: usize,
    pub session_started_at: Timestamp,
    pub mutable: Arc<Mutex<MutableState>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

pub struct MutableState {
    pub session: Session,
    /// Per-index quiz outcomes, recorded as answers happen. The session
    /// itself keeps no running score; the tally on the completion page
    /// comes from here.
    pub outcomes: HashMap<usize, Outcome>,
    /// Set when the session finishes (last item advanced past, or ended
    /// early). The server process exits successfully only if this is set.
    pub finished_at: Option<Timestamp>,
}
