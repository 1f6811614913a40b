use crate::{AdviceResult, ApiResult, Mood, Resource};
use serde::Serialize;

/// What the mood check-in page shows. Owned by the caller and passed through
/// each transition explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub selected_mood: Option<Mood>,
    pub thoughts: String,
    pub advice: Option<String>,
    pub quote: Option<String>,
    pub resources: Option<Vec<Resource>>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl ViewState {
    /// Picking a mood starts a fresh check-in.
    pub fn select_mood(&mut self, mood: Mood) {
        self.selected_mood = Some(mood);
        self.thoughts.clear();
        self.error = None;
        self.clear_result();
    }

    pub fn set_thoughts(&mut self, thoughts: impl Into<String>) {
        self.thoughts = thoughts.into();
    }

    /// Marks a request as in flight and returns its inputs. Returns `None`
    /// without changing anything when no mood is selected or a request is
    /// already running.
    pub fn begin_request(&mut self) -> Option<(Mood, Option<String>)> {
        if self.is_loading {
            return None;
        }
        let mood = self.selected_mood?;

        self.is_loading = true;
        self.error = None;
        self.clear_result();

        let thoughts = Some(self.thoughts.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Some((mood, thoughts))
    }

    pub fn finish(&mut self, result: AdviceResult<ApiResult>) {
        self.is_loading = false;
        match result {
            Ok(result) => {
                self.advice = Some(result.advice);
                self.quote = Some(result.quote);
                self.resources = result.resources;
            }
            Err(error) => {
                self.error = Some(error.user_message().to_string());
                self.clear_result();
            }
        }
    }

    #[must_use]
    pub fn show_resources(&self) -> bool {
        self.resources.as_ref().is_some_and(|r| !r.is_empty())
    }

    fn clear_result(&mut self) {
        self.advice = None;
        self.quote = None;
        self.resources = None;
    }
}
