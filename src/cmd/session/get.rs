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

use axum::extract::State;
use axum::response::Html;
use maud::Markup;
use maud::html;
use studpal_core::session::Outcome;
use studpal_core::types::item::StudyItem;

use crate::cmd::session::state::MutableState;
use crate::cmd::session::state::ServerState;
use crate::cmd::session::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> Html<String> {
    let mutable = state.mutable.lock().unwrap();
    let body = if mutable.finished_at.is_some() {
        render_completion(&state, &mutable)
    } else {
        render_item(&state, &mutable)
    };
    Html(page_template(body).into_string())
}

fn render_item(state: &ServerState, mutable: &MutableState) -> Markup {
    let session = &mutable.session;
    let position = session.position() + 1;
    // Every form addresses the item it was rendered for, so the server can
    // drop submissions that raced a navigation.
    let item_hash = session.current_item().hash().to_hex();
    html! {
        div class="container" {
            header {
                h1 { (state.title) }
                span class="counter" { (position) " / " (state.total_items) }
            }
            @match session.current_item() {
                StudyItem::Flashcard { front, back } => {
                    (render_flashcard(front, back, session.revealed(), &item_hash))
                }
                StudyItem::Question { prompt, options, correct_option, explanation } => {
                    (render_question(
                        prompt,
                        options,
                        *correct_option,
                        explanation,
                        session.revealed(),
                        session.selected_option(),
                        session.outcome(),
                        &item_hash,
                    ))
                }
            }
            (render_nav(session.at_first(), session.at_last(), &item_hash))
        }
    }
}

fn render_flashcard(front: &str, back: &str, revealed: bool, item_hash: &str) -> Markup {
    html! {
        div class="item-card" {
            p class="front" { (front) }
            @if revealed {
                p class="back" { (back) }
            } @else {
                form method="post" action="/" {
                    input type="hidden" name="item" value=(item_hash);
                    button type="submit" name="action" value="Flip" class="flip" {
                        "Flip"
                    }
                }
            }
        }
    }
}

fn render_question(
    prompt: &str,
    options: &[String],
    correct_option: usize,
    explanation: &str,
    revealed: bool,
    selected: Option<usize>,
    outcome: Option<Outcome>,
    item_hash: &str,
) -> Markup {
    html! {
        div class="item-card" {
            p class="prompt" { (prompt) }
            form method="post" action="/" class="options" {
                input type="hidden" name="action" value="Answer";
                input type="hidden" name="item" value=(item_hash);
                @for (index, option) in options.iter().enumerate() {
                    button
                        type="submit"
                        name="option"
                        value=(index)
                        class=(option_class(index, correct_option, revealed, selected))
                        disabled[revealed]
                    {
                        (option)
                    }
                }
            }
            @if revealed {
                @match outcome {
                    Some(Outcome::Correct) => { p class="outcome correct" { "Correct!" } }
                    Some(Outcome::Incorrect) => { p class="outcome incorrect" { "Incorrect." } }
                    None => {}
                }
                div class="explanation" {
                    h2 { "Explanation" }
                    p { (explanation) }
                }
            }
        }
    }
}

fn option_class(
    index: usize,
    correct_option: usize,
    revealed: bool,
    selected: Option<usize>,
) -> String {
    let mut class = "option".to_string();
    if selected == Some(index) {
        class.push_str(" selected");
    }
    if revealed && index == correct_option {
        class.push_str(" correct");
    }
    class
}

fn render_nav(at_first: bool, at_last: bool, item_hash: &str) -> Markup {
    html! {
        form method="post" action="/" class="nav" {
            input type="hidden" name="item" value=(item_hash);
            button type="submit" name="action" value="Previous" disabled[at_first] {
                "Previous"
            }
            button type="submit" name="action" value="Next" {
                @if at_last { "Finish" } @else { "Next" }
            }
            button type="submit" name="action" value="End" class="end" {
                "End session"
            }
        }
    }
}

fn render_completion(state: &ServerState, mutable: &MutableState) -> Markup {
    let correct = mutable
        .outcomes
        .values()
        .filter(|o| **o == Outcome::Correct)
        .count();
    let answered = mutable.outcomes.len();
    html! {
        div class="container completion" {
            h1 { "Session Completed" }
            p { "You have completed all items in this session!" }
            @if answered > 0 {
                p class="score" { "Score: " (correct) " / " (answered) " correct." }
            }
            p class="meta" { "Session started at " (state.session_started_at) "." }
            form method="post" action="/" {
                button type="submit" name="action" value="Shutdown" { "Close" }
            }
        }
    }
}
