//! jobdash-tui - Terminal UI for jobdash
//!
//! Drives an [`Engine`](jobdash_app::Engine) from jobdash-app: polls terminal
//! events, drains background messages and renders the mounted screen.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
