//! Colors and style builders shared by the widgets
//!
//! - `palette` - raw color constants
//! - `styles` - semantic style and block builders

pub mod palette;
pub mod styles;
