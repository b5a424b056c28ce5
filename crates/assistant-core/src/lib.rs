//! Portfolio assistant core: intent classifier, conversation session and
//! event bus. No platform dependencies.

pub mod classifier;
pub mod event_bus;
pub mod ports;
pub mod session;

#[cfg(test)]
mod tests;
