//! Suggestion candidates
//!
//! Suggestions are produced and ranked by an external generator. The panel
//! only reads them; nothing here mutates a list once it has been built.

use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::SuggestError;
use crate::intent::ClickIntent;

/// Category a suggestion is grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Bookmark,
    History,
    AboutPages,
    Tab,
    Search,
    TopSite,
}

impl SuggestionType {
    /// Top sites are shown by destination only
    pub fn shows_title(self) -> bool {
        !matches!(self, SuggestionType::TopSite)
    }

    /// Search and about-page entries read as phrases, not URLs
    pub fn shows_location(self) -> bool {
        !matches!(self, SuggestionType::Search | SuggestionType::AboutPages)
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuggestionType::Bookmark => "bookmark",
            SuggestionType::History => "history",
            SuggestionType::AboutPages => "about_pages",
            SuggestionType::Tab => "tab",
            SuggestionType::Search => "search",
            SuggestionType::TopSite => "top_site",
        };
        write!(f, "{}", name)
    }
}

/// Handler supplied by the generator, invoked when its item is clicked
pub type ClickHandler = Rc<dyn Fn(ClickIntent)>;

/// Ordered suggestion list shared between the panel and the dispatch sink
pub type SuggestionList = Rc<[Suggestion]>;

#[derive(Clone, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    #[serde(default)]
    pub title: Option<String>,
    pub location: String,
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
}

impl Suggestion {
    pub fn new(suggestion_type: SuggestionType, location: &str) -> Self {
        Self {
            suggestion_type,
            title: None,
            location: location.to_string(),
            on_click: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_on_click(mut self, handler: impl Fn(ClickIntent) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Title line, if this row shows one
    pub fn display_title(&self) -> Option<&str> {
        if !self.suggestion_type.shows_title() {
            return None;
        }
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// Location line, if this row shows one
    pub fn display_location(&self) -> Option<&str> {
        self.suggestion_type
            .shows_location()
            .then_some(self.location.as_str())
    }
}

impl fmt::Debug for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suggestion")
            .field("suggestion_type", &self.suggestion_type)
            .field("title", &self.title)
            .field("location", &self.location)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Parse a JSON array of suggestion candidates
pub fn parse_suggestions(json: &str) -> Result<Vec<Suggestion>, SuggestError> {
    serde_json::from_str(json).map_err(|e| SuggestError::InvalidSuggestions(e.to_string()))
}

pub fn load_suggestions(path: &Path) -> Result<Vec<Suggestion>, SuggestError> {
    let content = fs::read_to_string(path)?;
    parse_suggestions(&content)
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
