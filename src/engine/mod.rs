//! Timer-driven state machines behind the editor
//!
//! Nothing here spawns threads or reads the clock for scheduling: callers
//! pass `Instant`s in and poll `next_deadline()` to know when to tick again.

mod changes;
mod playback;
pub mod timer;

pub use changes::{ChangeEvent, ChangeTracker, DebounceSettings, SaveStatus};
pub use playback::{LogPlayback, PlaybackEvent, PlaybackPhase, PlaybackSettings};
pub use timer::Timer;
