use crate::intent::ClickIntent;
use crate::suggestion::SuggestionList;

/// Receiver for the panel's outgoing actions
///
/// The panel never applies a selection itself. It reports to the sink and
/// waits for new props.
pub trait SelectionSink {
    /// Report a highlighted suggestion, or clear the list when `list` is `None`
    fn set_selection(&mut self, list: Option<SuggestionList>, index: Option<usize>);

    /// Report that the active suggestion was confirmed
    fn confirm_selection(&mut self, intent: ClickIntent);
}
