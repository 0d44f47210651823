//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `tick`: Timer-driven updates from the change tracker and deployment
//! - `render`: UI rendering

mod input;
mod render;
mod state;
mod tick;

pub use state::{App, View};
