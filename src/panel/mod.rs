//! Address-bar suggestion panel
//!
//! Groups an externally ranked suggestion list by category, tracks the
//! highlighted row and reports selection changes to a [`SelectionSink`].

mod grouping;
mod labels;
mod layout;
mod listeners;
mod panel_render;
mod panel_state;
mod scroll;
mod selection;
mod sink;

pub use grouping::{CATEGORY_ORDER, PanelRow, Section, flatten, group_suggestions, item_key, suggestion_at};
pub use labels::{DefaultLabels, Translate, icon, label_key, section_key};
pub use layout::{MENUBAR_HEIGHT, PANEL_MARGIN, PanelLayout, max_height};
pub use listeners::{DocumentListeners, ListenerId, Subscription};
pub use panel_render::RenderContext;
pub use panel_state::{PanelProps, SuggestionPanel};
pub use selection::{Selection, normalize_index};
pub use sink::SelectionSink;
