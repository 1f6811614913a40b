use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanguageModelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the provider was unexpected. (e.g. no candidates
    /// returned in a Gemini completion)
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type LanguageModelResult<T> = Result<T, LanguageModelError>;

pub(crate) const EMPTY_RESPONSE: &str = "The AI returned an empty response.";
pub(crate) const MALFORMED_RESPONSE: &str = "The AI's response was malformed.";
pub(crate) const MISSING_FIELDS: &str = "The AI's response was missing required fields.";
const COMMUNICATION_FAILURE: &str =
    "Could not connect to the AI service. Please check your internet connection and try again.";

/// Discriminant of an [`AdviceError`], used by callers to pick display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidResponse,
    ApiCommunication,
    Unknown,
}

impl ErrorKind {
    /// The fixed message shown to the user for this kind of failure.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::InvalidResponse => {
                "The AI's response was a bit scrambled. Could you try rephrasing your thoughts \
                 or simply click the button again?"
            }
            Self::ApiCommunication => {
                "Failed to connect to the AI. Please check your internet connection and try \
                 again. The service may also be busy."
            }
            Self::Unknown => {
                "An unexpected error occurred. We're sorry about that. Please try again in a few \
                 moments."
            }
        }
    }
}

/// A failure of one advice request, classified for the caller.
#[derive(Error, Debug)]
pub enum AdviceError {
    /// The service replied, but the content was empty, unparseable or missing
    /// required fields.
    #[error("{0}")]
    InvalidResponse(String),
    /// The service could not be reached or returned an error.
    #[error("{message}")]
    ApiCommunication {
        message: String,
        #[source]
        source: Option<LanguageModelError>,
    },
    #[error("{0}")]
    Unknown(String),
}

impl AdviceError {
    pub(crate) fn invalid_response(message: &str) -> Self {
        Self::InvalidResponse(message.to_string())
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidResponse(_) => ErrorKind::InvalidResponse,
            Self::ApiCommunication { .. } => ErrorKind::ApiCommunication,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

impl From<LanguageModelError> for AdviceError {
    fn from(error: LanguageModelError) -> Self {
        Self::ApiCommunication {
            message: COMMUNICATION_FAILURE.to_string(),
            source: Some(error),
        }
    }
}

pub type AdviceResult<T> = Result<T, AdviceError>;
