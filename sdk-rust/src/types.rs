use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// How the user feels. Drives the prompt and whether support resources may
/// be returned. Parsing ignores letter case and surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Mood {
    Joyful,
    Happy,
    Neutral,
    Sad,
    Depressed,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Self; 5] = [
        Self::Joyful,
        Self::Happy,
        Self::Neutral,
        Self::Sad,
        Self::Depressed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joyful => "Joyful",
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
            Self::Depressed => "Depressed",
        }
    }

    /// Whether a reply for this mood may carry support resources.
    #[must_use]
    pub fn allows_resources(self) -> bool {
        matches!(self, Self::Depressed)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mood: {0}")]
pub struct ParseMoodError(pub String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMoodError(trimmed.to_string()))
    }
}

impl TryFrom<String> for Mood {
    type Error = ParseMoodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A searchable mental health support reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Display name, e.g. "National Suicide Prevention Lifeline".
    pub title: String,
    /// The exact search term used to find the resource.
    pub query: String,
}

impl Resource {
    pub fn new(title: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            query: query.into(),
        }
    }

    /// Web search link for the resource query.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!(
            "https://www.google.com/search?q={}",
            urlencoding::encode(&self.query)
        )
    }
}

/// The validated outcome of one advice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    pub advice: String,
    pub quote: String,
    /// Present only for a depressed mood when the model flagged that support
    /// resources should be shown.
    pub resources: Option<Vec<Resource>>,
}

/// Structured JSON output the model must produce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseFormatJson {
    /// The name of the schema.
    pub name: String,
    /// The description of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// Defines the input parameters for a language model completion.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LanguageModelInput {
    /// The user prompt, sent as a single user message.
    pub prompt: String,
    /// The format that the model must output. Plain text when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormatJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ModelUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Represents the response generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModelResponse {
    /// The raw text returned by the model, before any parsing.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ModelUsage>,
}

impl ModelResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}
