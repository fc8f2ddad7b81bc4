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

use studpal_core::catalog::Catalog;

use crate::error::Fallible;

pub fn list_decks() -> Fallible<()> {
    let catalog = Catalog::seed()?;
    for deck in catalog.decks() {
        println!(
            "{} ({} cards, last studied {})",
            deck.title,
            deck.card_count(),
            deck.last_studied
        );
        println!("    {}", deck.description);
    }
    Ok(())
}

pub fn list_subjects() -> Fallible<()> {
    let catalog = Catalog::seed()?;
    for subject in catalog.subjects() {
        println!(
            "{} ({} questions, last practiced {})",
            subject.title,
            subject.question_count(),
            subject.last_practiced
        );
        println!("    {}", subject.description);
    }
    Ok(())
}

pub fn list_materials() -> Fallible<()> {
    let catalog = Catalog::seed()?;
    for material in catalog.materials() {
        let visibility = if material.public { "public" } else { "private" };
        println!(
            "{} [{}] ({}, created {} by {})",
            material.title, material.category, visibility, material.created_at, material.author
        );
        println!("    {}", material.description);
    }
    Ok(())
}

pub fn list_groups() -> Fallible<()> {
    let catalog = Catalog::seed()?;
    for group in catalog.groups() {
        println!(
            "{} ({}, {} members, last active {})",
            group.name,
            group.subject,
            group.member_count(),
            group.last_active
        );
    }
    Ok(())
}
