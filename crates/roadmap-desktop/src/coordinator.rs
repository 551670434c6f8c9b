//! Single-flight roadmap request coordination.
//!
//! At most one generation request is outstanding at a time. The request
//! state is an atomic owned by the coordinator:
//!
//! ```text
//!   Idle ──submit──▶ InFlight ──cancel──▶ Cancelled
//!    ▲                  │                     │
//!    └──── settle ──────┴─────── settle ──────┘
//! ```
//!
//! `submit` moves Idle → InFlight before the worker is spawned; the worker
//! settles back to Idle exactly once, whether it delivered, failed, was
//! cancelled, or panicked. Cancelling drops the generation future, which
//! aborts the in-flight HTTP call. Delivery itself is the InFlight → Idle
//! compare-exchange, so a result that finishes after `cancel` won is
//! discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::time::Duration;

use roadmap_bedrock::generate::RoadmapGenerator;
use roadmap_core::error::CoreError;
use roadmap_core::models::request::RoadmapRequest;
use thiserror::Error;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RequestState {
    Idle = 0,
    InFlight = 1,
    Cancelled = 2,
}

impl RequestState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => RequestState::InFlight,
            2 => RequestState::Cancelled,
            _ => RequestState::Idle,
        }
    }
}

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error(transparent)]
    InputValidation(#[from] CoreError),

    #[error("Please wait, a roadmap is already being generated.")]
    Busy,

    #[error("Failed to generate roadmap: {0}")]
    RequestFailure(String),

    #[error("roadmap worker failed: {0}")]
    Worker(String),
}

/// How a finished request ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadmapOutcome {
    /// Raw roadmap text for the display path.
    Delivered(String),
    Cancelled,
}

struct Shared {
    state: AtomicU8,
    completed: AtomicU64,
    cancel: Notify,
}

impl Shared {
    fn state(&self) -> RequestState {
        RequestState::from_u8(self.state.load(Ordering::Acquire))
    }

    async fn cancelled(&self) {
        // A stale permit from an earlier request can wake us; only a
        // Cancelled state counts.
        loop {
            self.cancel.notified().await;
            if self.state() == RequestState::Cancelled {
                return;
            }
        }
    }
}

/// Owns the request slot for the lifetime of a worker.
///
/// The worker hands the slot back with [`SettleGuard::release`]; if it
/// never gets there (panic), `Drop` does it instead.
struct SettleGuard {
    shared: Arc<Shared>,
    request_id: Uuid,
    armed: bool,
}

impl SettleGuard {
    /// Return to Idle. Returns true when the request was still InFlight,
    /// false when `cancel` got there first.
    fn release(mut self) -> bool {
        self.armed = false;
        self.shared.completed.fetch_add(1, Ordering::AcqRel);
        let live = self
            .shared
            .state
            .compare_exchange(
                RequestState::InFlight as u8,
                RequestState::Idle as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if !live {
            self.shared
                .state
                .store(RequestState::Idle as u8, Ordering::Release);
        }
        info!(request_id = %self.request_id, live, "roadmap request settled");
        live
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.shared.completed.fetch_add(1, Ordering::AcqRel);
        self.shared
            .state
            .store(RequestState::Idle as u8, Ordering::Release);
        warn!(request_id = %self.request_id, "roadmap worker ended abnormally");
    }
}

/// Cancels whatever request is in flight on the coordinator it came from.
#[derive(Clone)]
pub struct CancelHandle {
    shared: Arc<Shared>,
}

impl CancelHandle {
    /// Ask the in-flight request to stop. Returns false when nothing was
    /// in flight.
    pub fn cancel(&self) -> bool {
        self.cancel_handle().cancel()
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

pub struct RoadmapCoordinator<G> {
    generator: Arc<G>,
    shared: Arc<Shared>,
    timeout: Duration,
}

/// Handle to a submitted request.
pub struct PendingRoadmap {
    pub request_id: Uuid,
    handle: JoinHandle<Result<RoadmapOutcome, CoordinatorError>>,
}

impl PendingRoadmap {
    /// Wait for the worker to settle.
    pub async fn wait(self) -> Result<RoadmapOutcome, CoordinatorError> {
        self.handle
            .await
            .map_err(|e| CoordinatorError::Worker(e.to_string()))?
    }
}

impl<G: RoadmapGenerator + 'static> RoadmapCoordinator<G> {
    pub fn new(generator: G) -> Self {
        Self::with_timeout(generator, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(generator: G, timeout: Duration) -> Self {
        Self {
            generator: Arc::new(generator),
            shared: Arc::new(Shared {
                state: AtomicU8::new(RequestState::Idle as u8),
                completed: AtomicU64::new(0),
                cancel: Notify::new(),
            }),
            timeout,
        }
    }

    pub fn state(&self) -> RequestState {
        self.shared.state()
    }

    /// Number of requests that have settled back to Idle.
    pub fn completed(&self) -> u64 {
        self.shared.completed.load(Ordering::Acquire)
    }

    /// Validate raw form input and start a request.
    ///
    /// Input errors are reported before the busy check. Must be called
    /// from within a Tokio runtime.
    pub fn submit(
        &self,
        topic: &str,
        duration_days: &str,
        level: &str,
    ) -> Result<PendingRoadmap, CoordinatorError> {
        let request = RoadmapRequest::parse(topic, duration_days, level)?;
        self.submit_request(request)
    }

    pub fn submit_request(
        &self,
        request: RoadmapRequest,
    ) -> Result<PendingRoadmap, CoordinatorError> {
        self.shared
            .state
            .compare_exchange(
                RequestState::Idle as u8,
                RequestState::InFlight as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| CoordinatorError::Busy)?;

        let request_id = Uuid::new_v4();
        info!(%request_id, topic = %request.topic, "roadmap request started");

        let guard = SettleGuard {
            shared: Arc::clone(&self.shared),
            request_id,
            armed: true,
        };
        let generator = Arc::clone(&self.generator);
        let shared = Arc::clone(&self.shared);
        let timeout = self.timeout;

        let handle = tokio::spawn(async move {
            let result = tokio::select! {
                _ = shared.cancelled() => None,
                result = tokio::time::timeout(timeout, generator.generate(&request)) => Some(result),
            };

            let outcome = match result {
                None => Ok(RoadmapOutcome::Cancelled),
                Some(Err(_)) => {
                    warn!(%request_id, ?timeout, "roadmap request timed out");
                    Err(CoordinatorError::RequestFailure(format!(
                        "timed out after {timeout:?}"
                    )))
                }
                Some(Ok(Err(e))) => {
                    warn!(%request_id, error = %e, "roadmap request failed");
                    Err(CoordinatorError::RequestFailure(e.to_string()))
                }
                Some(Ok(Ok(text))) if text.trim().is_empty() => {
                    warn!(%request_id, "roadmap request returned no text");
                    Err(CoordinatorError::RequestFailure(
                        "failed to get a valid response from the model".to_string(),
                    ))
                }
                Some(Ok(Ok(text))) => Ok(RoadmapOutcome::Delivered(text)),
            };

            if guard.release() {
                outcome
            } else {
                info!(%request_id, "roadmap request cancelled, result discarded");
                Ok(RoadmapOutcome::Cancelled)
            }
        });

        Ok(PendingRoadmap { request_id, handle })
    }

    /// Ask the in-flight request to stop. Returns false when nothing was
    /// in flight.
    pub fn cancel(&self) -> bool {
        self.cancel_handle().cancel()
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}
