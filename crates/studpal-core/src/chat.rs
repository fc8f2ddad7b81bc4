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

//! The study group chat model.
//!
//! The message list is append-ordered and carries no guarantee beyond
//! append order. Incoming messages arrive through the [`MessageSource`]
//! interface; the bundled implementation simulates other members posting,
//! since there is no real backend. Timer scheduling lives in the caller.

use crate::catalog::LOCAL_USER;
use crate::rng::TinyRng;
use crate::types::deck::StudyGroup;
use crate::types::timestamp::Timestamp;

/// One chat message.
#[derive(Clone, PartialEq, Debug)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub sent_at: Timestamp,
}

/// A source of incoming messages for a group. Polled on a timer by the
/// hosting screen; a real implementation would sit on a network connection.
pub trait MessageSource {
    /// The next incoming message, if any: `(author, text)`.
    fn poll(&mut self, group: &StudyGroup) -> Option<(String, String)>;
}

const SIMULATED_LINES: [&str; 6] = [
    "Has anyone finished the practice questions yet?",
    "I found a good diagram for this chapter, will share it later.",
    "Can we go over the last topic once more?",
    "I'll be a few minutes late to the session.",
    "That explanation finally made it click for me, thanks!",
    "Should we schedule another review before the exam?",
];

/// Simulates other group members posting. On each poll there is a 30%
/// chance of a message from a random member other than the local user.
pub struct SimulatedFeed {
    rng: TinyRng,
}

impl SimulatedFeed {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: TinyRng::from_seed(seed),
        }
    }
}

impl MessageSource for SimulatedFeed {
    fn poll(&mut self, group: &StudyGroup) -> Option<(String, String)> {
        if self.rng.generate(10) >= 3 {
            return None;
        }
        let others: Vec<&str> = group
            .members
            .iter()
            .filter(|m| m.name != LOCAL_USER)
            .map(|m| m.name.as_str())
            .collect();
        if others.is_empty() {
            return None;
        }
        let author = others[self.rng.generate(others.len() as u32) as usize];
        let line = SIMULATED_LINES[self.rng.generate(SIMULATED_LINES.len() as u32) as usize];
        Some((author.to_string(), line.to_string()))
    }
}

/// One group's chat: the group, plus the transcript so far.
pub struct ChatRoom {
    group: StudyGroup,
    messages: Vec<ChatMessage>,
}

impl ChatRoom {
    pub fn new(group: StudyGroup, transcript: Vec<ChatMessage>) -> Self {
        ChatRoom {
            group,
            messages: transcript,
        }
    }

    pub fn group(&self) -> &StudyGroup {
        &self.group
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Post a message as the local user. Blank messages are dropped.
    pub fn post(&mut self, text: &str, sent_at: Timestamp) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            author: LOCAL_USER.to_string(),
            text: text.to_string(),
            sent_at,
        });
        true
    }

    /// Poll the source once and append whatever arrives. Returns whether a
    /// message arrived.
    pub fn pull(&mut self, source: &mut dyn MessageSource, received_at: Timestamp) -> bool {
        match source.poll(&self.group) {
            Some((author, text)) => {
                self.messages.push(ChatMessage {
                    author,
                    text,
                    sent_at: received_at,
                });
                true
            }
            None => false,
        }
    }
}
