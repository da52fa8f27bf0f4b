mod actions;
mod events;
mod mouse_click;
mod mouse_hover;
mod render;
mod source;
mod state;

// Re-export public types
pub use actions::{ActionQueue, WindowAction};
pub use source::{MAX_SUGGESTIONS, Navigation, Outcome, SourceResult, SuggestionSource, location_suffix};
pub use state::App;
