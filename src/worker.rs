//! Bounded render pool.
//!
//! Renders are CPU-bound, so they run on tokio's blocking threads. A
//! semaphore caps how many run at once, and each render gets a deadline;
//! when the deadline passes the render's cancel flag is tripped and the
//! caller gets [`ArtError::Timeout`].

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::Semaphore;

use crate::config::EngineConfig;
use crate::engine::{ArtEngine, ArtRequest, GeneratedArtwork};
use crate::error::{ArtError, Result};
use crate::render::{CancelFlag, Canvas};

/// Runs engine work off the async path.
#[derive(Clone)]
pub struct RenderPool {
    engine: Arc<ArtEngine>,
    permits: Arc<Semaphore>,
    timeout: Duration,
}

impl RenderPool {
    pub fn new(engine: ArtEngine, workers: usize, timeout: Duration) -> Self {
        Self {
            engine: Arc::new(engine),
            permits: Arc::new(Semaphore::new(workers.max(1))),
            timeout,
        }
    }

    /// Pool over an engine built from `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let engine = ArtEngine::from_config(config)?;
        Ok(Self::new(engine, config.workers, config.timeout()))
    }

    pub fn engine(&self) -> &ArtEngine {
        &self.engine
    }

    /// Render and persist one request.
    pub async fn generate(&self, request: ArtRequest) -> Result<GeneratedArtwork> {
        self.run(move |engine, cancel| engine.generate_with_cancel(&request, cancel))
            .await
    }

    /// Render one request without persisting it.
    pub async fn render(&self, request: ArtRequest) -> Result<Canvas> {
        self.run(move |engine, cancel| engine.render_with_cancel(&request, cancel))
            .await
    }

    /// Generate several requests concurrently; results keep request order.
    pub async fn generate_many(&self, requests: Vec<ArtRequest>) -> Vec<Result<GeneratedArtwork>> {
        let handles: Vec<_> = requests
            .into_iter()
            .map(|request| {
                let pool = self.clone();
                tokio::spawn(async move { pool.generate(request).await })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await.unwrap_or_else(|e| {
                Err(ArtError::Worker {
                    message: e.to_string(),
                })
            }));
        }
        results
    }

    async fn run<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&ArtEngine, CancelFlag) -> Result<T> + Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|e| ArtError::Worker {
                message: e.to_string(),
            })?;

        debug!("Render started ({} permits left)", self.permits.available_permits());
        let cancel = CancelFlag::new();
        let engine = Arc::clone(&self.engine);
        let flag = cancel.clone();
        let handle = tokio::task::spawn_blocking(move || {
            // Held until the render actually returns, even after a timeout.
            let _permit = permit;
            job(&engine, flag)
        });

        match tokio::time::timeout(self.timeout, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(ArtError::Worker {
                message: e.to_string(),
            }),
            Err(_) => {
                cancel.cancel();
                warn!("Render timed out after {}ms", self.timeout.as_millis());
                Err(ArtError::Timeout {
                    after: self.timeout,
                })
            }
        }
    }
}
