//! jobdash-app - Application state and orchestration for jobdash
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard: the URL router, the per-resource collection caches, the screen
//! states, the pure `update` function, the action dispatcher that talks to the
//! backend, the live-follow poller and configuration loading.

pub mod actions;
pub mod collection;
pub mod config;
pub mod engine;
pub mod follow;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod router;
pub mod screen;
pub mod state;

// Re-export primary types
pub use actions::Services;
pub use collection::{Collection, CollectionView};
pub use engine::Engine;
pub use follow::{FollowPoller, FollowState};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use router::{NavigateOptions, Route, Router};
pub use screen::{Screen, ScreenId};
pub use state::{AppState, UiMode};
