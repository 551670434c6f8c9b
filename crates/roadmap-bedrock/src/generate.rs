//! The outbound text-generation call.
//!
//! [`RoadmapGenerator`] is the seam between request coordination and the
//! service that produces roadmap text. [`BedrockGenerator`] implements it
//! with a single, non-streaming Converse request.

use std::future::Future;
use std::pin::Pin;

use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use roadmap_core::models::request::RoadmapRequest;
use tracing::info;

use crate::error::BedrockError;
use crate::prompt::{SYSTEM_PROMPT, build_prompt};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Produces raw roadmap text for a validated request.
pub trait RoadmapGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        request: &'a RoadmapRequest,
    ) -> BoxFuture<'a, Result<String, BedrockError>>;
}

pub struct BedrockGenerator {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }

    /// Send the roadmap prompt and return the concatenated text of the reply.
    ///
    /// A reply that carries no text, or only whitespace, is an error.
    pub async fn generate_roadmap(&self, request: &RoadmapRequest) -> Result<String, BedrockError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(build_prompt(request)))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;

        info!(
            model_id = %self.model_id,
            topic = %request.topic,
            days = request.duration_days.get(),
            level = %request.level,
            "requesting roadmap"
        );

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
            .messages(message)
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(BedrockError::EmptyResponse);
        }

        info!(model_id = %self.model_id, text_len = text.len(), "roadmap received");

        Ok(text)
    }
}

impl RoadmapGenerator for BedrockGenerator {
    fn generate<'a>(
        &'a self,
        request: &'a RoadmapRequest,
    ) -> BoxFuture<'a, Result<String, BedrockError>> {
        Box::pin(self.generate_roadmap(request))
    }
}
