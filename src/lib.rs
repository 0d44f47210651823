//! agentdeck - terminal editor for voice agent configurations
//!
//! Edits are tracked with a debounced save indicator and summarized into an
//! edit history; deployments replay a scripted build log.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: User settings file and environment overrides
//! - [`engine`]: Timer-driven change tracking and log playback
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File logging setup
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod engine;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
