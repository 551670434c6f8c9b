use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use roadmap_bedrock::error::BedrockError;
use roadmap_bedrock::generate::{BoxFuture, RoadmapGenerator};
use roadmap_core::models::request::RoadmapRequest;
use roadmap_desktop::coordinator::CancelHandle;
use tokio::sync::Notify;

pub enum Reply {
    Text(String),
    Fail(String),
    Panic,
    /// Cancel through the handle, then answer without yielding, so the
    /// result is ready only after the state is already Cancelled.
    CancelThenText(Arc<OnceLock<CancelHandle>>, String),
}

/// Generator that blocks until its gate is opened, then answers with a
/// canned reply.
pub struct FakeGenerator {
    pub calls: Arc<AtomicUsize>,
    pub gate: Arc<Notify>,
    reply: Reply,
}

impl FakeGenerator {
    pub fn new(reply: Reply) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            gate: Arc::new(Notify::new()),
            reply,
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }
}

impl RoadmapGenerator for FakeGenerator {
    fn generate<'a>(
        &'a self,
        _request: &'a RoadmapRequest,
    ) -> BoxFuture<'a, Result<String, BedrockError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Fail(message) => Err(BedrockError::Invocation(message.clone())),
                Reply::Panic => panic!("generator blew up"),
                Reply::CancelThenText(handle, text) => {
                    if let Some(handle) = handle.get() {
                        handle.cancel();
                    }
                    Ok(text.clone())
                }
            }
        })
    }
}
