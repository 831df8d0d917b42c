// Pure query engine over a loaded talk catalog.
//
// Purpose
// - Keep every lookup a single-pass, side-effect-free scan in load order.
//
// Responsibilities
// - Exact and case-insensitive matching rules per operation.
// - Derived aggregates (distinct categories, distinct speakers).

use std::collections::{BTreeSet, HashSet};

use crate::modules::talks::core::model::{Speaker, Talk};

/// First talk whose id matches exactly (case-sensitive, load order wins).
pub fn find_by_id(talks: &[Talk], talk_id: &str) -> Option<Talk> {
    talks.iter().find(|talk| talk.id == talk_id).cloned()
}

/// Talks tagged with `category`, compared case-insensitively per token
/// (an exact token match, not a substring one).
pub fn by_category(talks: &[Talk], category: &str) -> Vec<Talk> {
    let wanted = category.to_lowercase();
    talks
        .iter()
        .filter(|talk| {
            talk.categories
                .iter()
                .any(|tag| tag.to_lowercase() == wanted)
        })
        .cloned()
        .collect()
}

/// Talks where `query` (lowercased) is a substring of any speaker's first
/// name, last name, or "first last" concatenation. The first matching
/// speaker claims the talk, so a talk appears at most once.
pub fn by_speaker(talks: &[Talk], query: &str) -> Vec<Talk> {
    let query = query.to_lowercase();
    talks
        .iter()
        .filter(|talk| talk.speakers.iter().any(|s| speaker_matches(s, &query)))
        .cloned()
        .collect()
}

/// Talks whose lowercased title contains the lowercased `query`.
pub fn by_title(talks: &[Talk], query: &str) -> Vec<Talk> {
    let query = query.to_lowercase();
    talks
        .iter()
        .filter(|talk| talk.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Set union of every category string, original casing preserved ("AI" and
/// "ai" stay distinct here), sorted ascending.
pub fn distinct_categories(talks: &[Talk]) -> Vec<String> {
    talks
        .iter()
        .flat_map(|talk| talk.categories.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Speakers deduplicated on the case-insensitive name pair, keeping the
/// first-encountered casing, sorted by (last name, first name) compared
/// case-insensitively. The sort is stable, so equal keys keep store order.
pub fn distinct_speakers(talks: &[Talk]) -> Vec<Speaker> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut speakers: Vec<Speaker> = Vec::new();
    for talk in talks {
        for speaker in &talk.speakers {
            if seen.insert(speaker.identity()) {
                speakers.push(speaker.clone());
            }
        }
    }
    speakers.sort_by(|a, b| {
        let (a_first, a_last) = a.identity();
        let (b_first, b_last) = b.identity();
        (a_last, a_first).cmp(&(b_last, b_first))
    });
    speakers
}

fn speaker_matches(speaker: &Speaker, query: &str) -> bool {
    let first = speaker.first_name.to_lowercase();
    let last = speaker.last_name.to_lowercase();
    first.contains(query) || last.contains(query) || format!("{first} {last}").contains(query)
}
