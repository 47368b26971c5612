// Golden tests for prompt construction: the wording fed to the model is
// part of the product's observable behavior.

mod common;

use std::sync::Arc;

use buddy::models::{SynopsisMode, STABLE_MODEL};
use buddy::orchestrator::{
    hashtag_prompt, synopsis_prompt, synopsis_system_instruction, HashtagRequest, Orchestrator,
    SynopsisRequest,
};
use common::mocks::ScriptedGenerator;

fn request_with_mode(mode: SynopsisMode) -> SynopsisRequest {
    SynopsisRequest {
        script: "FADE IN.".to_string(),
        word_count: 250,
        mode,
        title: None,
        file_name: None,
        favorites: Vec::new(),
        model_id: STABLE_MODEL.to_string(),
    }
}

#[test]
fn test_synopsis_prompt_embeds_length_title_and_script() {
    let mut request = request_with_mode(SynopsisMode::Default);
    request.title = Some("My Vlog Ep. 1".to_string());

    let prompt = synopsis_prompt(&request);
    assert!(prompt.starts_with("Generate a synopsis for the following script."));
    assert!(prompt.contains("Target Word Count: approximately 250 words."));
    assert!(prompt.contains("Title: My Vlog Ep. 1"));
    assert!(prompt.contains("Style: Standard summary."));
    assert!(prompt.ends_with("SCRIPT:\nFADE IN."));
}

#[test]
fn test_synopsis_prompt_omits_missing_title() {
    let prompt = synopsis_prompt(&request_with_mode(SynopsisMode::Default));
    assert!(!prompt.contains("Title:"));
}

#[test]
fn test_style_directives_per_mode() {
    let descriptive = synopsis_prompt(&request_with_mode(SynopsisMode::Descriptive));
    assert!(descriptive.contains("Explain the script in detail"));

    let suspense = synopsis_prompt(&request_with_mode(SynopsisMode::Suspense));
    assert!(suspense.contains("Do NOT reveal the main resolution or ending"));

    let engaging = synopsis_prompt(&request_with_mode(SynopsisMode::Engaging));
    assert!(engaging.contains("just the highlights"));
}

#[test]
fn test_system_instruction_learning_block() {
    let favorites = vec!["fav one".to_string(), "fav two".to_string()];
    let instruction = synopsis_system_instruction(&favorites);

    assert!(instruction.starts_with("You are a professional content editor assistant."));
    assert!(instruction.contains("Learn from the tone, structure, and vocabulary"));
    // Examples are quoted verbatim between separators.
    assert!(instruction.contains("---\nfav one\n---\nfav two\n---"));
}

#[test]
fn test_hashtag_prompt_embeds_count_description_and_task() {
    let request = HashtagRequest {
        script: "script body".to_string(),
        description: "street food tour".to_string(),
        amount: 45,
        file_name: None,
        favorites: vec!["#food #tour".to_string()],
        model_id: STABLE_MODEL.to_string(),
    };
    let prompt = hashtag_prompt(&request);

    assert!(prompt.contains("generate exactly 45 optimized hashtags"));
    assert!(prompt.contains("User Description: street food tour"));
    assert!(prompt.contains("The user responded positively to these sets"));
    assert!(prompt.contains("#food #tour"));
    assert!(prompt.contains("script body... (truncated for brevity)"));
    assert!(prompt.contains("search grounding (if available)"));
    assert!(prompt.trim_end().ends_with("Return ONLY the hashtags separated by spaces."));
}

#[tokio::test]
async fn test_orchestrator_passes_system_instruction_only_for_synopsis() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Ok("synopsis".to_string()),
        Ok("#tags".to_string()),
    ]));
    let orchestrator = Orchestrator::new(Arc::clone(&generator));

    orchestrator
        .generate_synopsis(&request_with_mode(SynopsisMode::Default))
        .await
        .unwrap();
    orchestrator
        .generate_hashtags(&HashtagRequest {
            script: String::new(),
            description: "desc".to_string(),
            amount: 10,
            file_name: None,
            favorites: Vec::new(),
            model_id: STABLE_MODEL.to_string(),
        })
        .await
        .unwrap();

    let calls = generator.calls();
    assert!(calls[0]
        .system_instruction
        .as_deref()
        .unwrap()
        .contains("professional content editor"));
    assert_eq!(calls[1].system_instruction, None);
}
