//! Builds the instruction prompt and the structured output schema sent to the
//! language model for one mood check-in.

use crate::{LanguageModelInput, Mood, ResponseFormatJson};
use serde_json::{json, Value};

const SCHEMA_NAME: &str = "mood_advice";

/// The prompt and schema for one advice request.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    pub prompt: String,
    pub schema: Value,
}

impl AdviceRequest {
    #[must_use]
    pub fn into_model_input(self) -> LanguageModelInput {
        LanguageModelInput {
            prompt: self.prompt,
            response_format: Some(ResponseFormatJson {
                name: SCHEMA_NAME.to_string(),
                description: Some(
                    "Supportive advice, an inspirational quote and optional support resources."
                        .to_string(),
                ),
                schema: Some(self.schema),
            }),
        }
    }
}

#[must_use]
pub fn build_request(mood: Mood, thoughts: Option<&str>) -> AdviceRequest {
    AdviceRequest {
        prompt: build_prompt(mood, thoughts),
        schema: response_schema(),
    }
}

/// Returns the thoughts if they contain anything besides whitespace.
#[must_use]
pub fn normalize_thoughts(thoughts: Option<&str>) -> Option<&str> {
    thoughts.map(str::trim).filter(|t| !t.is_empty())
}

#[must_use]
pub fn build_prompt(mood: Mood, thoughts: Option<&str>) -> String {
    let mut prompt =
        format!("You are a compassionate mental health AI assistant. A user is feeling '{mood}'.");

    match normalize_thoughts(thoughts) {
        Some(thoughts) => {
            prompt.push_str(&format!(" They also shared this thought: \"{thoughts}\"."));
        }
        None => prompt.push_str(" They haven't shared any specific thoughts."),
    }

    prompt.push_str(
        " Based on their mood and thoughts, generate a JSON object containing:\n\
         1. \"advice\": A personalized, gentle, and supportive message.\n\
         2. \"quote\": A short, general, and inspirational quote relevant to their mood. \
         It must be different from the advice.\n",
    );

    if mood.allows_resources() {
        prompt.push_str(
            "3. \"showResources\": A boolean, which you will set to true ONLY if their thoughts \
             indicate a crisis or you have a strong reason to believe they need immediate help. \
             Otherwise, set it to false.\n\
             4. \"resources\": A list of 3 searchable resources.\n",
        );
    }

    prompt
}

/// The fixed structured output declaration. Identical for every mood.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "advice": {
                "type": "string",
                "description": "A short, gentle, and supportive piece of advice or comforting message, acknowledging the user's feelings and specific thoughts."
            },
            "quote": {
                "type": "string",
                "description": "A short, general, and inspiring quote relevant to the user's mood. This should be different from the advice."
            },
            "showResources": {
                "type": "boolean",
                "description": "Analyze the user's thoughts for crisis indicators. Set to true ONLY if the user's thoughts suggest a potential crisis, severe distress, or an urgent need for professional help. Otherwise, set to false. This property is only considered when the mood is 'Depressed'."
            },
            "resources": {
                "type": "array",
                "description": "A list of 3-4 searchable mental health resources. This array should always be populated.",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {
                            "type": "string",
                            "description": "The name of the resource, e.g., 'National Suicide Prevention Lifeline'."
                        },
                        "query": {
                            "type": "string",
                            "description": "The exact search term a user can use to find the resource, e.g., 'National Suicide Prevention Lifeline phone number'."
                        }
                    },
                    "required": ["title", "query"]
                }
            }
        },
        "required": ["advice", "quote"]
    })
}
