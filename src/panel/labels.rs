//! Section header labels and icons

use crate::suggestion::SuggestionType;

/// Localized string lookup
pub trait Translate {
    fn translation(&self, key: &str) -> String;
}

/// Translation key of a category header
pub fn label_key(category: SuggestionType) -> &'static str {
    match category {
        SuggestionType::History => "historySuggestionTitle",
        SuggestionType::Bookmark => "bookmarksSuggestionTitle",
        SuggestionType::AboutPages => "aboutPagesSuggestionTitle",
        SuggestionType::Tab => "tabsSuggestionTitle",
        SuggestionType::Search => "searchSuggestionTitle",
        SuggestionType::TopSite => "topSiteSuggestionTitle",
    }
}

/// Style key of a category header
pub fn section_key(category: SuggestionType) -> &'static str {
    match category {
        SuggestionType::History => "historyTitle",
        SuggestionType::Bookmark => "bookmarksTitle",
        SuggestionType::AboutPages => "aboutPagesTitle",
        SuggestionType::Tab => "tabsTitle",
        SuggestionType::Search => "searchTitle",
        SuggestionType::TopSite => "topSiteTitle",
    }
}

pub fn icon(category: SuggestionType) -> Option<&'static str> {
    match category {
        SuggestionType::History => Some("◷"),
        SuggestionType::Bookmark => Some("☆"),
        SuggestionType::AboutPages => None,
        SuggestionType::Tab => Some("⧉"),
        SuggestionType::Search => Some("⌕"),
        SuggestionType::TopSite => Some("↗"),
    }
}

/// English header labels
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl Translate for DefaultLabels {
    fn translation(&self, key: &str) -> String {
        let label = match key {
            "historySuggestionTitle" => "History",
            "bookmarksSuggestionTitle" => "Bookmarks",
            "aboutPagesSuggestionTitle" => "About pages",
            "tabsSuggestionTitle" => "Tabs",
            "searchSuggestionTitle" => "Search",
            "topSiteSuggestionTitle" => "Top sites",
            other => other,
        };
        label.to_string()
    }
}
