//! Demo suggestion source
//!
//! Stands in for the browser's suggestion generator. Candidates loaded at
//! startup are fuzzy-ranked against the URL bar text, and each one gets a
//! click handler that records where the user chose to go.

use std::cell::RefCell;
use std::rc::Rc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;

use crate::intent::ClickIntent;
use crate::panel::suggestion_at;
use crate::suggestion::{Suggestion, SuggestionList};

pub const MAX_SUGGESTIONS: usize = 20;

/// Navigation chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub location: String,
    #[serde(flatten)]
    pub intent: ClickIntent,
}

/// Shared slot the click handlers write into
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    target: Rc<RefCell<Option<Outcome>>>,
}

impl Navigation {
    pub fn navigate(&self, location: &str, intent: ClickIntent) {
        log::debug!("Navigate to {} with {:?}", location, intent);
        *self.target.borrow_mut() = Some(Outcome {
            location: location.to_string(),
            intent,
        });
    }

    pub fn take(&self) -> Option<Outcome> {
        self.target.borrow_mut().take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.target.borrow().is_some()
    }
}

/// Ranked list for one input, plus the inline completion of its first row
#[derive(Debug, Default)]
pub struct SourceResult {
    pub list: Option<SuggestionList>,
    pub location_suffix: Option<String>,
}

pub struct SuggestionSource {
    candidates: Vec<Suggestion>,
    matcher: SkimMatcherV2,
}

impl SuggestionSource {
    pub fn new(candidates: Vec<Suggestion>, navigation: &Navigation) -> Self {
        let candidates = candidates
            .into_iter()
            .map(|suggestion| attach_handler(suggestion, navigation))
            .collect();

        Self {
            candidates,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn suggest(&self, input: &str) -> SourceResult {
        let input = input.trim();

        let ranked: Vec<Suggestion> = if input.is_empty() {
            self.candidates.iter().take(MAX_SUGGESTIONS).cloned().collect()
        } else {
            let mut scored: Vec<(i64, &Suggestion)> = self
                .candidates
                .iter()
                .filter_map(|s| self.score(s, input).map(|score| (score, s)))
                .collect();
            // Stable sort keeps candidate order on equal scores
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            scored
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .map(|(_, s)| s.clone())
                .collect()
        };

        if ranked.is_empty() {
            return SourceResult::default();
        }

        let list: SuggestionList = Rc::from(ranked);
        let location_suffix = if input.is_empty() {
            None
        } else {
            suggestion_at(&list, 0).and_then(|first| location_suffix(&first.location, input))
        };

        SourceResult {
            list: Some(list),
            location_suffix,
        }
    }

    fn score(&self, suggestion: &Suggestion, input: &str) -> Option<i64> {
        let location = self.matcher.fuzzy_match(&suggestion.location, input);
        let title = suggestion
            .title
            .as_deref()
            .and_then(|title| self.matcher.fuzzy_match(title, input));
        location.max(title)
    }
}

fn attach_handler(suggestion: Suggestion, navigation: &Navigation) -> Suggestion {
    let navigation = navigation.clone();
    let location = suggestion.location.clone();
    suggestion.with_on_click(move |intent| navigation.navigate(&location, intent))
}

/// Text that would complete `input` to `location`
///
/// The scheme and a leading `www.` may be omitted from the input.
pub fn location_suffix(location: &str, input: &str) -> Option<String> {
    let without_scheme = location
        .strip_prefix("https://")
        .or_else(|| location.strip_prefix("http://"))
        .unwrap_or(location);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);

    [location, without_scheme, without_www]
        .into_iter()
        .find_map(|candidate| completion(candidate, input))
}

fn completion(candidate: &str, input: &str) -> Option<String> {
    if candidate.len() <= input.len() || !candidate.is_char_boundary(input.len()) {
        return None;
    }
    let (head, tail) = candidate.split_at(input.len());
    head.eq_ignore_ascii_case(input).then(|| tail.to_string())
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
