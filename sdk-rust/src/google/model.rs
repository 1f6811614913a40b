use super::api::{
    Content, GenerateContentConfig, GenerateContentParameters, GenerateContentResponse,
    GenerateContentResponseUsageMetadata, Part as GooglePart,
};
use crate::{
    client_utils, opentelemetry, LanguageModel, LanguageModelError, LanguageModelInput,
    LanguageModelResult, ModelResponse, ModelUsage,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "google";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GoogleModelOptions) -> Self {
        let GoogleModelOptions {
            api_key,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Google header name '{key}': {error}"
                ))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for GoogleModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        opentelemetry::trace_generate(
            self.provider(),
            &self.model_id,
            input,
            |input| async move {
                let params = convert_to_generate_content_parameters(input, &self.model_id);

                let url = format!(
                    "{}/models/{}:generateContent?key={}",
                    self.base_url, self.model_id, self.api_key
                );

                let headers = self.request_headers()?;
                let response: GenerateContentResponse =
                    client_utils::send_json(&self.client, &url, &params, headers).await?;

                map_google_response(response)
            },
        )
        .await
    }
}

pub(crate) fn convert_to_generate_content_parameters(
    input: LanguageModelInput,
    model_id: &str,
) -> GenerateContentParameters {
    let mut config = GenerateContentConfig::default();
    if let Some(response_format) = input.response_format {
        config.response_mime_type = Some("application/json".to_string());
        config.response_json_schema = response_format.schema;
    }

    GenerateContentParameters {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: Some(vec![GooglePart {
                text: Some(input.prompt),
                ..Default::default()
            }]),
        }],
        model: model_id.to_string(),
        generation_config: Some(config),
    }
}

pub(crate) fn map_google_response(
    response: GenerateContentResponse,
) -> LanguageModelResult<ModelResponse> {
    let usage = response
        .usage_metadata
        .as_ref()
        .map(map_google_usage_metadata);

    let Some(candidate) = response.candidates.and_then(|c| c.into_iter().next()) else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map_or_else(
                || "No candidate in response".to_string(),
                |reason| format!("Prompt was blocked: {reason}"),
            );
        return Err(LanguageModelError::Invariant(PROVIDER, reason));
    };

    // Thought parts are not part of the answer.
    let text = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| !part.thought.unwrap_or(false))
        .filter_map(|part| part.text)
        .collect::<String>();

    Ok(ModelResponse { text, usage })
}

fn map_google_usage_metadata(usage: &GenerateContentResponseUsageMetadata) -> ModelUsage {
    ModelUsage {
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0),
    }
}
