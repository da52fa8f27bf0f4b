//! Category grouping for the suggestion panel
//!
//! Partitions a ranked list into fixed categories and assigns the global
//! indices used for selection. Indices run across the grouped output, so
//! they are only meaningful for the render pass that produced them.

use super::labels::section_key;
use crate::suggestion::{Suggestion, SuggestionType};

/// Display order of the category sections
pub const CATEGORY_ORDER: [SuggestionType; 6] = [
    SuggestionType::History,
    SuggestionType::Bookmark,
    SuggestionType::AboutPages,
    SuggestionType::Tab,
    SuggestionType::Search,
    SuggestionType::TopSite,
];

/// One non-empty category with its items in input order
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub category: SuggestionType,
    /// Global index of the first item
    pub start_index: usize,
    pub items: Vec<&'a Suggestion>,
}

/// A single line of grouped output
#[derive(Debug, Clone, Copy)]
pub enum PanelRow<'a> {
    Header(SuggestionType),
    Item {
        global_index: usize,
        suggestion: &'a Suggestion,
    },
}

impl PanelRow<'_> {
    pub fn global_index(&self) -> Option<usize> {
        match self {
            PanelRow::Header(_) => None,
            PanelRow::Item { global_index, .. } => Some(*global_index),
        }
    }

    /// Identity of the row: section key for headers, item key for items
    pub fn key(&self) -> String {
        match self {
            PanelRow::Header(category) => section_key(*category).to_string(),
            PanelRow::Item {
                global_index,
                suggestion,
            } => item_key(suggestion, *global_index),
        }
    }
}

pub fn group_suggestions(suggestions: &[Suggestion]) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut index = 0;

    for category in CATEGORY_ORDER {
        let items: Vec<&Suggestion> = suggestions
            .iter()
            .filter(|s| s.suggestion_type == category)
            .collect();
        if items.is_empty() {
            continue;
        }
        let len = items.len();
        sections.push(Section {
            category,
            start_index: index,
            items,
        });
        index += len;
    }

    sections
}

/// Flatten sections into header and item rows
pub fn flatten<'a>(sections: &[Section<'a>]) -> Vec<PanelRow<'a>> {
    let mut rows = Vec::new();
    for section in sections {
        rows.push(PanelRow::Header(section.category));
        rows.extend(
            section
                .items
                .iter()
                .copied()
                .enumerate()
                .map(|(i, suggestion)| PanelRow::Item {
                    global_index: section.start_index + i,
                    suggestion,
                }),
        );
    }
    rows
}

/// Suggestion shown at a global index of the grouped output
pub fn suggestion_at(suggestions: &[Suggestion], global_index: usize) -> Option<&Suggestion> {
    group_suggestions(suggestions).into_iter().find_map(|section| {
        global_index
            .checked_sub(section.start_index)
            .and_then(|offset| section.items.get(offset).copied())
    })
}

/// Stable key for a rendered item within one pass
pub fn item_key(suggestion: &Suggestion, global_index: usize) -> String {
    format!("{}|{}", suggestion.location, global_index)
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod grouping_tests;
