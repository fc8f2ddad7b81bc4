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

use studpal_core::assistant::Assistant;
use studpal_core::assistant::CannedAssistant;

use crate::error::Fallible;

/// Ask the assistant a question and print its reply.
pub fn ask_assistant(question: &str) -> Fallible<()> {
    let assistant = CannedAssistant;
    let reply = assistant.reply(question)?;
    println!("{reply}");
    Ok(())
}
