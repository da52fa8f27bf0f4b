//! Selection state for the suggestion panel
//!
//! The highlighted row is derived from props on every render rather than
//! stored per item.

/// Which rendered row is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// First row stands in for an active inline autocomplete match
    ImplicitFirst,
    Explicit(usize),
}

impl Selection {
    pub fn from_props(selected_index: Option<usize>, has_location_value_suffix: bool) -> Self {
        match selected_index {
            Some(index) => Selection::Explicit(index),
            None if has_location_value_suffix => Selection::ImplicitFirst,
            None => Selection::None,
        }
    }

    /// Global index of the highlighted row, if any
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::ImplicitFirst => Some(0),
            Selection::Explicit(index) => Some(index),
        }
    }

    pub fn is_selected(self, global_index: usize) -> bool {
        self.index() == Some(global_index)
    }
}

/// Normalize a requested index before reporting it
///
/// Index 0 collapses to "no selection" because the first row is already
/// covered by the implicit autocomplete highlight. Indices past the end of
/// the list clear the selection as well.
pub fn normalize_index(new_index: usize, list_len: usize) -> Option<usize> {
    if new_index == 0 || new_index > list_len {
        None
    } else {
        Some(new_index)
    }
}

/// Next row for keyboard navigation, wrapping to the first
pub fn next_index(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        Some(index) => Some((index + 1) % count),
        None => Some(0),
    }
}

/// Previous row for keyboard navigation, wrapping to the last
pub fn previous_index(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        Some(0) | None => Some(count - 1),
        Some(index) => Some(index.min(count) - 1),
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
