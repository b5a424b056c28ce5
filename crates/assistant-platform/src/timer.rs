//! Delay adapter backed by `setTimeout` through gloo-timers.
//! Yields to the browser event loop, so the UI keeps rendering the
//! typing indicator while the reply is "composed".

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use assistant_core::ports::DelayPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDelay;

impl BrowserDelay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl DelayPort for BrowserDelay {
    async fn sleep(&self, ms: u32) {
        log::trace!("Sleeping {}ms", ms);
        TimeoutFuture::new(ms).await;
    }
}
