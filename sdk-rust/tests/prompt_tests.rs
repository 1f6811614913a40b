use symbio_sdk::{
    build_prompt, build_request, prompt::normalize_thoughts, response_schema, Mood,
};

#[test]
fn prompt_without_thoughts_omits_quoted_text() {
    for mood in Mood::ALL {
        for thoughts in [None, Some(""), Some("   \n\t")] {
            let prompt = build_prompt(mood, thoughts);
            assert!(prompt.contains(&format!("A user is feeling '{mood}'.")));
            assert!(prompt.contains("They haven't shared any specific thoughts."));
            assert!(!prompt.contains("They also shared this thought"));
        }
    }
}

#[test]
fn prompt_quotes_trimmed_thoughts_verbatim() {
    for mood in Mood::ALL {
        let prompt = build_prompt(mood, Some("  I had a really tough day at work.  "));
        assert!(prompt.contains(r#"They also shared this thought: "I had a really tough day at work.""#));
        assert!(!prompt.contains("haven't shared"));
    }
}

#[test]
fn prompt_always_requests_advice_and_quote() {
    for mood in Mood::ALL {
        let prompt = build_prompt(mood, None);
        assert!(prompt.starts_with("You are a compassionate mental health AI assistant."));
        assert!(prompt.contains(r#""advice""#));
        assert!(prompt.contains(r#""quote""#));
    }
}

#[test]
fn only_depressed_prompt_requests_resources() {
    for mood in Mood::ALL {
        let prompt = build_prompt(mood, Some("nothing feels right"));
        if mood == Mood::Depressed {
            assert!(prompt.contains(r#""showResources""#));
            assert!(prompt.contains(r#""resources": A list of 3 searchable resources"#));
        } else {
            assert!(!prompt.contains("showResources"), "{mood} prompt: {prompt}");
            assert!(!prompt.contains("resources"), "{mood} prompt: {prompt}");
        }
    }
}

#[test]
fn schema_declares_required_fields() {
    let schema = response_schema();
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"], serde_json::json!(["advice", "quote"]));
    assert_eq!(schema["properties"]["advice"]["type"], "string");
    assert_eq!(schema["properties"]["quote"]["type"], "string");
    assert_eq!(schema["properties"]["showResources"]["type"], "boolean");
    assert_eq!(schema["properties"]["resources"]["type"], "array");
    assert_eq!(
        schema["properties"]["resources"]["items"]["required"],
        serde_json::json!(["title", "query"])
    );
}

#[test]
fn schema_does_not_vary_with_mood() {
    let joyful = build_request(Mood::Joyful, None);
    let depressed = build_request(Mood::Depressed, Some("help"));
    assert_eq!(joyful.schema, depressed.schema);
    assert_ne!(joyful.prompt, depressed.prompt);
}

#[test]
fn model_input_requests_json_output() {
    let request = build_request(Mood::Neutral, Some("meh"));
    let prompt = request.prompt.clone();
    let input = request.into_model_input();

    assert_eq!(input.prompt, prompt);
    let format = input.response_format.expect("a JSON response format");
    assert_eq!(format.name, "mood_advice");
    assert_eq!(format.schema, Some(response_schema()));
}

#[test]
fn normalize_thoughts_treats_blank_as_absent() {
    assert_eq!(normalize_thoughts(None), None);
    assert_eq!(normalize_thoughts(Some("  ")), None);
    assert_eq!(normalize_thoughts(Some(" hi ")), Some("hi"));
}
