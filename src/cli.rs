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

use std::process::exit;

use clap::Parser;
use clap::Subcommand;
use studpal_core::types::timestamp::Timestamp;
use tokio::spawn;

use crate::cmd::ask::ask_assistant;
use crate::cmd::chat::server::ChatConfig;
use crate::cmd::chat::server::start_chat_server;
use crate::cmd::generate::generate_flashcards;
use crate::cmd::generate::generate_questions;
use crate::cmd::list::list_decks;
use crate::cmd::list::list_groups;
use crate::cmd::list::list_materials;
use crate::cmd::list::list_subjects;
use crate::cmd::session::server::ServerConfig;
use crate::cmd::session::server::SessionKind;
use crate::cmd::session::server::start_server;
use crate::error::Fallible;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Study a flashcard deck through a web interface.
    Study {
        /// Title of the deck. By default, the first deck in the catalog.
        #[arg(long)]
        deck: Option<String>,
        /// Maximum number of cards in the session. By default, the whole deck.
        #[arg(long)]
        card_limit: Option<usize>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Shuffle the cards before the session starts.
        #[arg(long)]
        shuffle: bool,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Practice an exam subject through a web interface.
    Quiz {
        /// Title of the subject. By default, the first subject in the catalog.
        #[arg(long)]
        subject: Option<String>,
        /// Maximum number of questions in the session.
        #[arg(long)]
        question_limit: Option<usize>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Shuffle the questions before the session starts.
        #[arg(long)]
        shuffle: bool,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Join a study group chat (with simulated group activity).
    Chat {
        /// Name of the group. By default, the first group in the catalog.
        #[arg(long)]
        group: Option<String>,
        /// Seconds between polls for incoming messages. Default is 10.
        #[arg(long, default_value_t = 10)]
        interval_secs: u64,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Ask the study assistant a question.
    Ask {
        /// The question to ask.
        question: String,
    },
    /// Request generated study content from the assistant.
    Generate {
        #[command(subcommand)]
        command: GenerateCommand,
    },
    /// List the contents of the catalog.
    List {
        #[command(subcommand)]
        command: ListCommand,
    },
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate flashcards for a deck.
    Flashcards {
        /// Title of the deck. By default, the first deck in the catalog.
        #[arg(long)]
        deck: Option<String>,
    },
    /// Generate practice questions for a subject.
    Questions {
        /// Title of the subject. By default, the first subject in the catalog.
        #[arg(long)]
        subject: Option<String>,
        /// Difficulty of the generated questions: easy, medium, or hard.
        #[arg(long, default_value = "medium")]
        difficulty: String,
        /// How many questions to generate. Default is 10.
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

#[derive(Subcommand)]
enum ListCommand {
    /// List the flashcard decks.
    Decks,
    /// List the exam prep subjects.
    Subjects,
    /// List the study materials.
    Materials,
    /// List the study groups.
    Groups,
}

/// Open the browser once the server accepts connections.
fn open_browser_when_up(host: &str, port: u16) {
    let browser_host = host.to_string();
    spawn(async move {
        match wait_for_server(&browser_host, port).await {
            Ok(_) => {
                let _ = open::that(format!("http://{browser_host}:{port}/"));
            }
            Err(e) => {
                eprintln!("Failed to connect to server: {e}");
                exit(-1)
            }
        }
    });
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Study {
            deck,
            card_limit,
            host,
            port,
            shuffle,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                open_browser_when_up(&host, port);
            }
            let config = ServerConfig {
                kind: SessionKind::Study,
                title: deck,
                host,
                port,
                session_started_at: Timestamp::now(),
                item_limit: card_limit,
                shuffle,
            };
            start_server(config).await
        }
        Command::Quiz {
            subject,
            question_limit,
            host,
            port,
            shuffle,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                open_browser_when_up(&host, port);
            }
            let config = ServerConfig {
                kind: SessionKind::Quiz,
                title: subject,
                host,
                port,
                session_started_at: Timestamp::now(),
                item_limit: question_limit,
                shuffle,
            };
            start_server(config).await
        }
        Command::Chat {
            group,
            interval_secs,
            host,
            port,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                open_browser_when_up(&host, port);
            }
            let config = ChatConfig {
                group,
                host,
                port,
                interval_secs,
            };
            start_chat_server(config).await
        }
        Command::Ask { question } => ask_assistant(&question),
        Command::Generate { command } => match command {
            GenerateCommand::Flashcards { deck } => generate_flashcards(deck),
            GenerateCommand::Questions {
                subject,
                difficulty,
                count,
            } => generate_questions(subject, difficulty, count),
        },
        Command::List { command } => match command {
            ListCommand::Decks => list_decks(),
            ListCommand::Subjects => list_subjects(),
            ListCommand::Materials => list_materials(),
            ListCommand::Groups => list_groups(),
        },
    }
}
