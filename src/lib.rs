//! Browser-style address bar suggestions for the terminal
//!
//! The [`panel`] module holds the suggestion dropdown itself. The [`app`]
//! module hosts it under a URL bar for the `urlbar` binary.

pub mod app;
pub mod config;
pub mod error;
pub mod intent;
pub mod panel;
pub mod suggestion;
pub mod widgets;

#[cfg(test)]
mod test_utils;
