use crate::page;
use axum::{
    extract::{rejection::FormRejection, State},
    http::{HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use symbio_sdk::{
    AdviceError, AdviceResult, AdviceService, ApiResult, ErrorKind, Mood, ViewState,
};
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: AdviceService,
}

#[derive(Deserialize)]
struct CheckInForm {
    mood: String,
    #[serde(default)]
    thoughts: Option<String>,
}

#[derive(Deserialize)]
struct AdviceBody {
    mood: Mood,
    thoughts: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    kind: ErrorKind,
    message: String,
    user_message: &'static str,
}

/// JSON rendering of an [`AdviceError`] for API clients.
pub struct ApiError(AdviceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let status = match kind {
            ErrorKind::InvalidResponse => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::ApiCommunication => StatusCode::BAD_GATEWAY,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            kind,
            message: self.0.to_string(),
            user_message: kind.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState, allowed_origin: Option<HeaderValue>) -> Router {
    let app = Router::new()
        .route("/", get(home_handler).post(check_in_handler))
        .route("/api/advice", post(advice_handler))
        .route("/api/moods", get(moods_handler))
        .with_state(state);

    match allowed_origin {
        Some(origin) => app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        ),
        None => app,
    }
}

async fn home_handler() -> Html<String> {
    Html(page::render(&ViewState::default()))
}

async fn check_in_handler(
    State(state): State<AppState>,
    form: Result<Form<CheckInForm>, FormRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Form(form) = form.map_err(|rejection| (StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let mood: Mood = form
        .mood
        .parse()
        .map_err(|error: symbio_sdk::ParseMoodError| (StatusCode::BAD_REQUEST, error.to_string()))?;

    let mut view = ViewState::default();
    view.select_mood(mood);
    view.set_thoughts(form.thoughts.unwrap_or_default());

    if let Some((mood, thoughts)) = view.begin_request() {
        let result = run_check_in(&state.service, mood, thoughts).await;
        view.finish(result);
    }

    Ok(Html(page::render(&view)))
}

async fn advice_handler(
    State(state): State<AppState>,
    Json(body): Json<AdviceBody>,
) -> Result<Json<ApiResult>, ApiError> {
    run_check_in(&state.service, body.mood, body.thoughts)
        .await
        .map(Json)
        .map_err(ApiError)
}

async fn moods_handler() -> Json<Vec<Mood>> {
    Json(Mood::ALL.to_vec())
}

/// Runs one check-in on its own task so a panic surfaces as
/// [`AdviceError::Unknown`] instead of tearing down the connection.
async fn run_check_in(
    service: &AdviceService,
    mood: Mood,
    thoughts: Option<String>,
) -> AdviceResult<ApiResult> {
    let service = service.clone();
    tokio::spawn(async move { service.generate(mood, thoughts.as_deref()).await })
        .await
        .unwrap_or_else(|error| {
            tracing::error!(%error, "Check-in task failed");
            Err(AdviceError::Unknown(error.to_string()))
        })
}
