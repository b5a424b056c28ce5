//! Browser adapters for the assistant core.

pub mod timer;

pub use timer::BrowserDelay;
