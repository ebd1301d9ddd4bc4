//! Server-side course lookup with artificial latency and cancellation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::catalog;
use crate::common::CatalogError;
use crate::config::{SiteConfig, DEFAULT_LOOKUP_DELAY};
use crate::models::Course;

/// Cloneable cancellation signal. Every clone observes the same cancel.
#[derive(Clone, Debug)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once [`CancelToken::cancel`] has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // The sender lives as long as `self`, so this only returns on cancel.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// Looks courses up after a fixed delay, stand-in for a catalog backend.
#[derive(Clone, Debug)]
pub struct CourseLookup {
    delay: Duration,
    shutdown: CancelToken,
}

impl Default for CourseLookup {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_DELAY, CancelToken::new())
    }
}

impl CourseLookup {
    pub fn new(delay: Duration, shutdown: CancelToken) -> Self {
        Self { delay, shutdown }
    }

    pub fn from_config(config: &SiteConfig, shutdown: CancelToken) -> Self {
        Self::new(config.lookup_delay, shutdown)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Lookup that is abandoned when the service shuts down.
    pub async fn fetch(&self, id: &str) -> Result<Course, CatalogError> {
        self.fetch_with(id, &self.shutdown).await
    }

    /// Lookup that is abandoned when either `cancel` or the service's shutdown
    /// token fires during the delay.
    pub async fn fetch_with(&self, id: &str, cancel: &CancelToken) -> Result<Course, CatalogError> {
        tracing::debug!(%id, delay_ms = self.delay.as_millis() as u64, "course lookup started");

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(%id, "course lookup cancelled");
                Err(CatalogError::Cancelled)
            }
            _ = self.shutdown.cancelled() => {
                tracing::debug!(%id, "course lookup abandoned on shutdown");
                Err(CatalogError::Cancelled)
            }
            _ = tokio::time::sleep(self.delay) => {
                let result = catalog::find_course(id).cloned();
                if result.is_ok() {
                    tracing::info!(%id, "course lookup resolved");
                }
                result
            }
        }
    }
}
