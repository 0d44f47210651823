//! Reusable UI components
//!
//! Building blocks shared by the config, tool, history and deployment views.

pub mod blocks;
pub mod editor;
pub mod empty_state;
pub mod message;

pub use blocks::*;
pub use empty_state::*;
pub use message::*;
