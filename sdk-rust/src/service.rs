use crate::{prompt, validator, AdviceResult, ApiResult, LanguageModel, Mood};
use std::sync::Arc;

/// Requests advice for a mood check-in. One model call, no retries.
///
/// Any failure of the model call is reported as
/// [`crate::AdviceError::ApiCommunication`]; problems with the reply content
/// are reported as [`crate::AdviceError::InvalidResponse`].
pub async fn generate_response(
    model: &dyn LanguageModel,
    mood: Mood,
    thoughts: Option<&str>,
) -> AdviceResult<ApiResult> {
    let input = prompt::build_request(mood, thoughts).into_model_input();

    tracing::debug!(
        provider = model.provider(),
        model_id = %model.model_id(),
        %mood,
        has_thoughts = prompt::normalize_thoughts(thoughts).is_some(),
        "Requesting advice"
    );

    let response = model.generate(input).await.map_err(|error| {
        tracing::error!(%error, "Error calling language model");
        error
    })?;

    validator::validate_response(mood, &response.text)
}

/// Shares one language model across concurrent requests.
#[derive(Clone)]
pub struct AdviceService {
    model: Arc<dyn LanguageModel>,
}

impl AdviceService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, mood: Mood, thoughts: Option<&str>) -> AdviceResult<ApiResult> {
        generate_response(self.model.as_ref(), mood, thoughts).await
    }
}
