// Integration tests for the orchestrator fallback chains.
//
// The two operations surface errors differently on exhaustion (synopsis:
// the ORIGINAL attempt's error, hashtags: the FINAL attempt's); both
// behaviors are pinned here.

mod common;

use std::sync::Arc;

use buddy::genai::GenerationError;
use buddy::models::{RecordKind, SynopsisMode, STABLE_MODEL};
use buddy::orchestrator::{HashtagRequest, Orchestrator, SynopsisRequest};
use buddy::stores::HistoryStore;
use common::mocks::{api_error, ScriptedGenerator};

fn synopsis_request(model_id: &str) -> SynopsisRequest {
    SynopsisRequest {
        script: "INT. KITCHEN - DAY. A creator films a cooking short.".to_string(),
        word_count: 300,
        mode: SynopsisMode::Default,
        title: Some("Ep. 1".to_string()),
        file_name: Some("ep1.txt".to_string()),
        favorites: Vec::new(),
        model_id: model_id.to_string(),
    }
}

fn hashtag_request(model_id: &str) -> HashtagRequest {
    HashtagRequest {
        script: String::new(),
        description: "A travel vlog visiting Kyoto".to_string(),
        amount: 30,
        file_name: None,
        favorites: Vec::new(),
        model_id: model_id.to_string(),
    }
}

#[tokio::test]
async fn test_synopsis_falls_back_to_stable_model() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(api_error(403, "access denied")),
        Ok("fallback synopsis".to_string()),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));

    let request = synopsis_request("gemini-3-pro-preview");
    let generation = orchestrator.generate_synopsis(&request).await.unwrap();

    assert_eq!(generation.content, "fallback synopsis");

    let calls = generator.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].model, "gemini-3-pro-preview");
    assert_eq!(calls[1].model, STABLE_MODEL);
    assert!(calls.iter().all(|c| !c.augmented));
}

#[tokio::test]
async fn test_synopsis_success_records_requested_model_not_fallback() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(api_error(403, "access denied")),
        Ok("fallback synopsis".to_string()),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));
    let mut history = HistoryStore::new();

    let request = synopsis_request("gemini-3-pro-preview");
    let generation = orchestrator.generate_synopsis(&request).await.unwrap();
    history.add(generation.kind, generation.content, generation.params);

    let record = &history.records()[0];
    assert_eq!(record.kind, RecordKind::Synopsis);
    // Params reflect what the caller issued, not the model that served it.
    assert_eq!(record.params.model_id, "gemini-3-pro-preview");
    assert_eq!(record.params.word_count, Some(300));
    assert_eq!(record.params.mode, Some(SynopsisMode::Default));
}

#[tokio::test]
async fn test_synopsis_double_failure_surfaces_first_error() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(api_error(403, "the original failure")),
        Err(api_error(500, "the fallback failure")),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));

    let error = orchestrator
        .generate_synopsis(&synopsis_request("gemini-3-pro-preview"))
        .await
        .unwrap_err();

    match error {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "the original failure");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(generator.calls().len(), 2);
}

#[tokio::test]
async fn test_synopsis_stable_model_fails_without_retry() {
    let generator = Arc::new(ScriptedGenerator::new(vec![Err(api_error(
        500,
        "stable model down",
    ))]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));

    let error = orchestrator
        .generate_synopsis(&synopsis_request(STABLE_MODEL))
        .await
        .unwrap_err();

    match error {
        GenerationError::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(generator.calls().len(), 1);
}

#[tokio::test]
async fn test_synopsis_failure_writes_no_history() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(api_error(403, "a")),
        Err(api_error(500, "b")),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));
    let history = HistoryStore::new();

    let result = orchestrator
        .generate_synopsis(&synopsis_request("gemini-3-pro-preview"))
        .await;

    assert!(result.is_err());
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_hashtags_drop_augmentation_before_model() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(api_error(403, "search tool denied")),
        Ok("#kyoto #travel".to_string()),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));

    let generation = orchestrator
        .generate_hashtags(&hashtag_request("gemini-3-pro-preview"))
        .await
        .unwrap();

    assert_eq!(generation.content, "#kyoto #travel");
    assert_eq!(generation.kind, RecordKind::Hashtags);

    // Same model retried without augmentation; no third attempt.
    let calls = generator.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].model, "gemini-3-pro-preview");
    assert!(calls[0].augmented);
    assert_eq!(calls[1].model, "gemini-3-pro-preview");
    assert!(!calls[1].augmented);
}

#[tokio::test]
async fn test_hashtags_exhaustion_surfaces_final_error() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(api_error(403, "augmented failed")),
        Err(api_error(404, "plain failed")),
        Err(api_error(500, "stable failed")),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));

    let error = orchestrator
        .generate_hashtags(&hashtag_request("gemini-3-pro-preview"))
        .await
        .unwrap_err();

    match error {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "stable failed");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let calls = generator.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2].model, STABLE_MODEL);
    assert!(!calls[2].augmented);
}

#[tokio::test]
async fn test_hashtags_with_stable_model_stop_after_two_attempts() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(api_error(403, "augmented failed")),
        Err(api_error(429, "quota hit")),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));

    let error = orchestrator
        .generate_hashtags(&hashtag_request(STABLE_MODEL))
        .await
        .unwrap_err();

    match error {
        GenerationError::Api { status, .. } => assert_eq!(status, 429),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(generator.calls().len(), 2);
}

#[tokio::test]
async fn test_concurrent_generations_do_not_serialize() {
    // Two requests in flight at once; both complete independently.
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Ok("first".to_string()),
        Ok("second".to_string()),
    ]));
    let orchestrator = Arc::new(Orchestrator::new(Arc::clone(&generator)));

    let a = {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move {
            orchestrator
                .generate_synopsis(&synopsis_request(STABLE_MODEL))
                .await
        })
    };
    let b = {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move {
            orchestrator
                .generate_synopsis(&synopsis_request(STABLE_MODEL))
                .await
        })
    };

    let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
    let mut contents = vec![a.content, b.content];
    contents.sort();
    assert_eq!(contents, vec!["first".to_string(), "second".to_string()]);
}
