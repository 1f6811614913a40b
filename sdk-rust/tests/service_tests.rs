use reqwest::StatusCode;
use std::sync::Arc;
use symbio_sdk::{
    generate_response,
    sdk_test::{MockGenerateResult, MockLanguageModel},
    AdviceError, AdviceService, ErrorKind, LanguageModelError, Mood,
};

#[tokio::test]
async fn returns_validated_result() {
    let model = MockLanguageModel::new();
    model.enqueue_generate(MockGenerateResult::text(
        r#"{"advice":"Be gentle with yourself.","quote":"This too shall pass."}"#,
    ));

    let result = generate_response(&model, Mood::Sad, Some("long day"))
        .await
        .expect("generate_response succeeds");

    assert_eq!(result.advice, "Be gentle with yourself.");
    assert_eq!(result.quote, "This too shall pass.");
    assert_eq!(result.resources, None);
}

#[tokio::test]
async fn sends_prompt_and_schema_to_model() {
    let model = MockLanguageModel::new();
    model.enqueue_generate(MockGenerateResult::text(r#"{"advice":"a","quote":"q"}"#));

    generate_response(&model, Mood::Depressed, Some("  everything is heavy  "))
        .await
        .unwrap();

    let inputs = model.tracked_generate_inputs();
    assert_eq!(inputs.len(), 1);
    let input = &inputs[0];
    assert!(input.prompt.contains("'Depressed'"));
    assert!(input.prompt.contains(r#""everything is heavy""#));
    assert!(input.prompt.contains("showResources"));
    assert!(input.response_format.is_some());
}

#[tokio::test]
async fn depressed_result_carries_flagged_resources() {
    let model = MockLanguageModel::new();
    model.enqueue_generate(MockGenerateResult::text(
        r#"{"advice":"a","quote":"q","showResources":true,"resources":[{"title":"Lifeline","query":"crisis lifeline"}]}"#,
    ));

    let result = generate_response(&model, Mood::Depressed, None).await.unwrap();
    let resources = result.resources.expect("resources are present");
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].title, "Lifeline");
    assert_eq!(
        resources[0].search_url(),
        "https://www.google.com/search?q=crisis%20lifeline"
    );
}

#[tokio::test]
async fn model_failure_is_api_communication() {
    let model = MockLanguageModel::new();
    model.enqueue_generate(LanguageModelError::StatusCode(
        StatusCode::TOO_MANY_REQUESTS,
        "quota exceeded".to_string(),
    ));

    let error = generate_response(&model, Mood::Happy, None)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ApiCommunication);
    assert!(matches!(
        error,
        AdviceError::ApiCommunication {
            source: Some(LanguageModelError::StatusCode(code, _)),
            ..
        } if code == StatusCode::TOO_MANY_REQUESTS
    ));
    assert_eq!(
        error.to_string(),
        "Could not connect to the AI service. Please check your internet connection and try again."
    );
}

#[tokio::test]
async fn invariant_failure_is_api_communication() {
    let model = MockLanguageModel::new();
    model.enqueue_generate(LanguageModelError::Invariant(
        "google",
        "No candidate in response".to_string(),
    ));

    let error = generate_response(&model, Mood::Neutral, None)
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ApiCommunication);
}

#[tokio::test]
async fn content_failure_is_never_reclassified() {
    let model = MockLanguageModel::new();
    model.enqueue_generate_results([
        MockGenerateResult::text(""),
        MockGenerateResult::text("not json"),
        MockGenerateResult::text(r#"{"quote":"x"}"#),
    ]);

    for _ in 0..3 {
        let error = generate_response(&model, Mood::Joyful, Some("hi"))
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidResponse);
    }
}

#[tokio::test]
async fn each_invocation_makes_exactly_one_call() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(LanguageModelError::InvalidInput("boom".to_string()));
    model.enqueue_generate(MockGenerateResult::text(r#"{"advice":"a","quote":"q"}"#));

    let service = AdviceService::new(model.clone());

    let first = service.generate(Mood::Sad, None).await;
    assert_eq!(first.unwrap_err().kind(), ErrorKind::ApiCommunication);
    assert_eq!(model.tracked_generate_inputs().len(), 1);

    let second = service.generate(Mood::Sad, None).await;
    assert!(second.is_ok());
    assert_eq!(model.tracked_generate_inputs().len(), 2);
}

#[test]
fn error_kinds_map_to_user_messages() {
    assert!(ErrorKind::InvalidResponse
        .user_message()
        .contains("rephrasing your thoughts"));
    assert!(ErrorKind::ApiCommunication
        .user_message()
        .contains("check your internet connection"));
    assert!(ErrorKind::Unknown
        .user_message()
        .starts_with("An unexpected error occurred."));
    assert_eq!(
        AdviceError::Unknown("panic".to_string()).user_message(),
        ErrorKind::Unknown.user_message()
    );
}
