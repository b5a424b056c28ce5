//! Port traits: the boundary between core logic and the platform.
//!
//! Defined here in `assistant-core` (pure Rust); browser implementations
//! live in `assistant-platform`.

use async_trait::async_trait;

// ─── Delay Port ──────────────────────────────────────────────

/// Non-blocking timer used to simulate the assistant composing a reply.
#[async_trait(?Send)]
pub trait DelayPort {
    /// Resolve after `ms` milliseconds without blocking the UI thread
    async fn sleep(&self, ms: u32);
}
