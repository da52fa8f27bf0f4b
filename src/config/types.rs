// Configuration type definitions

use serde::Deserialize;

use crate::panel::{DefaultLabels, Translate};

const DEFAULT_NAVBAR_HEIGHT: u16 = 3;

fn default_navbar_height() -> u16 {
    DEFAULT_NAVBAR_HEIGHT
}

fn default_true() -> bool {
    true
}

/// Layout configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    /// Rows taken by the URL bar
    #[serde(default = "default_navbar_height")]
    pub navbar_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            navbar_height: DEFAULT_NAVBAR_HEIGHT,
        }
    }
}

/// Panel configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_true")]
    pub icons: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig { icons: true }
    }
}

/// Header label overrides, English defaults when unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LabelsConfig {
    pub history: Option<String>,
    pub bookmarks: Option<String>,
    pub about_pages: Option<String>,
    pub tabs: Option<String>,
    pub search: Option<String>,
    pub top_sites: Option<String>,
}

impl Translate for LabelsConfig {
    fn translation(&self, key: &str) -> String {
        let custom = match key {
            "historySuggestionTitle" => self.history.as_ref(),
            "bookmarksSuggestionTitle" => self.bookmarks.as_ref(),
            "aboutPagesSuggestionTitle" => self.about_pages.as_ref(),
            "tabsSuggestionTitle" => self.tabs.as_ref(),
            "searchSuggestionTitle" => self.search.as_ref(),
            "topSiteSuggestionTitle" => self.top_sites.as_ref(),
            _ => None,
        };
        custom
            .cloned()
            .unwrap_or_else(|| DefaultLabels.translation(key))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub labels: LabelsConfig,
}
