//! AI request orchestration: prompt construction, model-selection
//! fallback, and packaging of successful results for the history store.
//!
//! The fallback policy is encoded as an explicit ordered list of attempts
//! plus a surfacing rule, so the exact sequence is visible and testable
//! in isolation from network code. Synopsis and hashtags surface errors
//! differently (original vs final attempt); both paths are pinned by
//! tests and must not be unified.

use std::sync::Arc;

use crate::genai::{GenerationError, GenerationOptions, TextGenerator};
use crate::models::{GenerationParams, RecordKind, SynopsisMode, STABLE_MODEL};

/// Characters of script text embedded in a hashtag prompt for context.
const HASHTAG_SCRIPT_CONTEXT_CHARS: usize = 2000;

/// One step of a fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub model: String,
    pub augmented: bool,
}

/// Which attempt's error is surfaced when every step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePolicy {
    /// The first attempt's error, preserving the original failure context.
    Original,
    /// The last attempt's error.
    Final,
}

/// Ordered attempts for a synopsis generation: the selected model, then
/// the stable model once (unless already selected). Augmentation never
/// applies to synopses.
pub fn synopsis_attempts(model_id: &str) -> Vec<Attempt> {
    let mut attempts = vec![Attempt {
        model: model_id.to_string(),
        augmented: false,
    }];
    if model_id != STABLE_MODEL {
        attempts.push(Attempt {
            model: STABLE_MODEL.to_string(),
            augmented: false,
        });
    }
    attempts
}

/// Ordered attempts for hashtag generation: selected model with search
/// augmentation, the same model without it, then the stable model without
/// it (unless already selected).
pub fn hashtag_attempts(model_id: &str) -> Vec<Attempt> {
    let mut attempts = vec![
        Attempt {
            model: model_id.to_string(),
            augmented: true,
        },
        Attempt {
            model: model_id.to_string(),
            augmented: false,
        },
    ];
    if model_id != STABLE_MODEL {
        attempts.push(Attempt {
            model: STABLE_MODEL.to_string(),
            augmented: false,
        });
    }
    attempts
}

/// Inputs for one synopsis generation.
#[derive(Debug, Clone)]
pub struct SynopsisRequest {
    pub script: String,
    pub word_count: u32,
    pub mode: SynopsisMode,
    pub title: Option<String>,
    pub file_name: Option<String>,
    /// Up to 3 favorited prior synopses, in history order.
    pub favorites: Vec<String>,
    pub model_id: String,
}

impl SynopsisRequest {
    /// Params recorded in history: always the model the caller asked for.
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            mode: Some(self.mode),
            word_count: Some(self.word_count),
            title: self.title.clone(),
            file_name: self.file_name.clone(),
            model_id: self.model_id.clone(),
            ..Default::default()
        }
    }
}

/// Inputs for one hashtag generation.
#[derive(Debug, Clone)]
pub struct HashtagRequest {
    /// May be empty; only a truncated prefix is embedded for context.
    pub script: String,
    /// Required, non-empty.
    pub description: String,
    /// Desired number of hashtags, in `[10, 100]`.
    pub amount: u32,
    pub file_name: Option<String>,
    /// Up to 3 favorited prior hashtag sets, in history order.
    pub favorites: Vec<String>,
    pub model_id: String,
}

impl HashtagRequest {
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            amount: Some(self.amount),
            description: Some(self.description.clone()),
            file_name: self.file_name.clone(),
            model_id: self.model_id.clone(),
            ..Default::default()
        }
    }
}

/// A successful generation ready to be recorded in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub kind: RecordKind,
    pub content: String,
    pub params: GenerationParams,
}

/// System instruction for synopsis generation, optionally extended with
/// favorited examples the model should learn tone and structure from.
pub fn synopsis_system_instruction(favorites: &[String]) -> String {
    let mut instruction = String::from("You are a professional content editor assistant.");
    if !favorites.is_empty() {
        instruction.push_str(
            "\n\nThe user has previously liked the following synopsis styles. \
             Learn from the tone, structure, and vocabulary of these examples \
             to generate the new synopsis:\n\n---\n",
        );
        instruction.push_str(&favorites.join("\n---\n"));
        instruction.push_str("\n---");
    }
    instruction
}

fn synopsis_style_directive(mode: SynopsisMode) -> &'static str {
    match mode {
        SynopsisMode::Descriptive => {
            "Style: Descriptive. Explain the script in detail so the user clearly understands the content."
        }
        SynopsisMode::Suspense => {
            "Style: Suspense. Tell the story but end with a hook. Do NOT reveal the main resolution or ending. Keep the reader guessing."
        }
        SynopsisMode::Engaging => {
            "Style: Engaging. Focus on the most exciting parts to hook the reader. Do not reveal every detail, just the highlights."
        }
        SynopsisMode::Default => "Style: Standard summary.",
    }
}

/// Generation prompt for a synopsis: target length, optional title, the
/// fixed style directive, then the full script.
pub fn synopsis_prompt(request: &SynopsisRequest) -> String {
    let mut prompt = format!(
        "Generate a synopsis for the following script.\nTarget Word Count: approximately {} words.\n",
        request.word_count
    );
    if let Some(title) = request.title.as_deref().filter(|t| !t.is_empty()) {
        prompt.push_str(&format!("Title: {}\n", title));
    }
    prompt.push_str(synopsis_style_directive(request.mode));
    prompt.push_str("\n\nSCRIPT:\n");
    prompt.push_str(&request.script);
    prompt
}

/// Generation prompt for hashtags: desired count, the user's description,
/// the favorites-learning block, and a truncated script excerpt, ending
/// with the instruction to return only space-separated hashtag tokens.
pub fn hashtag_prompt(request: &HashtagRequest) -> String {
    let mut learning_context = String::new();
    if !request.favorites.is_empty() {
        learning_context = format!(
            "User Preferences (Learn from these previously successful hashtag sets):\n\
             The user responded positively to these sets. Note the mix of broad and niche tags:\n{}",
            request.favorites.join("\n")
        );
    }

    let excerpt: String = request
        .script
        .chars()
        .take(HASHTAG_SCRIPT_CONTEXT_CHARS)
        .collect();

    format!(
        "Analyze the following content and generate exactly {amount} optimized hashtags \
         for social media (YouTube/Instagram/TikTok) visibility.\n\n\
         User Description: {description}\n\n\
         {learning_context}\n\n\
         Script Content (for context):\n{excerpt}... (truncated for brevity)\n\n\
         Task:\n\
         1. Identify trending keywords related to this topic using search grounding (if available).\n\
         2. Create a list of {amount} hashtags.\n\
         3. Return ONLY the hashtags separated by spaces.",
        amount = request.amount,
        description = request.description,
        learning_context = learning_context,
        excerpt = excerpt,
    )
}

/// Runs generation requests through the fallback chain.
pub struct Orchestrator<G> {
    generator: Arc<G>,
}

impl<G: TextGenerator> Orchestrator<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> Arc<G> {
        Arc::clone(&self.generator)
    }

    /// Walk an attempt list in order, returning the first success or the
    /// error chosen by the surfacing policy once every step has failed.
    async fn run_attempts(
        &self,
        attempts: &[Attempt],
        prompt: &str,
        system_instruction: Option<&str>,
        policy: SurfacePolicy,
    ) -> Result<String, GenerationError> {
        debug_assert!(!attempts.is_empty());
        let mut first_error: Option<GenerationError> = None;
        let mut last_error: Option<GenerationError> = None;

        for attempt in attempts {
            let options = GenerationOptions {
                system_instruction: system_instruction.map(str::to_string),
                enable_search_augmentation: attempt.augmented,
            };
            match self
                .generator
                .generate_content(&attempt.model, prompt, &options)
                .await
            {
                Ok(text) => return Ok(text),
                Err(err) => {
                    tracing::warn!(
                        model = %attempt.model,
                        augmented = attempt.augmented,
                        error = %err,
                        "generation attempt failed"
                    );
                    if first_error.is_none() {
                        first_error = Some(err);
                    } else {
                        last_error = Some(err);
                    }
                }
            }
        }

        let surfaced = match policy {
            SurfacePolicy::Original => first_error,
            SurfacePolicy::Final => last_error.or(first_error),
        };
        // The attempt list is never empty, so an error is always recorded.
        Err(surfaced.unwrap_or(GenerationError::EmptyResponse))
    }

    /// Generate a synopsis. On failure of the selected model the stable
    /// model is tried once; if that also fails the ORIGINAL error is
    /// surfaced to preserve failure context.
    pub async fn generate_synopsis(
        &self,
        request: &SynopsisRequest,
    ) -> Result<Generation, GenerationError> {
        let system_instruction = synopsis_system_instruction(&request.favorites);
        let prompt = synopsis_prompt(request);
        let attempts = synopsis_attempts(&request.model_id);

        let content = self
            .run_attempts(
                &attempts,
                &prompt,
                Some(&system_instruction),
                SurfacePolicy::Original,
            )
            .await?;

        Ok(Generation {
            kind: RecordKind::Synopsis,
            content,
            params: request.params(),
        })
    }

    /// Generate hashtags. Augmentation is dropped before the model is,
    /// and the FINAL attempt's error is what the caller sees.
    pub async fn generate_hashtags(
        &self,
        request: &HashtagRequest,
    ) -> Result<Generation, GenerationError> {
        let prompt = hashtag_prompt(request);
        let attempts = hashtag_attempts(&request.model_id);

        let content = self
            .run_attempts(&attempts, &prompt, None, SurfacePolicy::Final)
            .await?;

        Ok(Generation {
            kind: RecordKind::Hashtags,
            content,
            params: request.params(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synopsis_attempts_skip_fallback_for_stable_model() {
        let attempts = synopsis_attempts(STABLE_MODEL);
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].model, STABLE_MODEL);
        assert!(!attempts[0].augmented);
    }

    #[test]
    fn test_synopsis_attempts_add_stable_fallback() {
        let attempts = synopsis_attempts("gemini-3-pro-preview");
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[1].model, STABLE_MODEL);
        assert!(attempts.iter().all(|a| !a.augmented));
    }

    #[test]
    fn test_hashtag_attempts_order() {
        let attempts = hashtag_attempts("gemini-3-pro-preview");
        assert_eq!(attempts.len(), 3);
        assert!(attempts[0].augmented);
        assert_eq!(attempts[0].model, "gemini-3-pro-preview");
        assert!(!attempts[1].augmented);
        assert_eq!(attempts[1].model, "gemini-3-pro-preview");
        assert!(!attempts[2].augmented);
        assert_eq!(attempts[2].model, STABLE_MODEL);
    }

    #[test]
    fn test_hashtag_attempts_for_stable_model_stop_at_two() {
        let attempts = hashtag_attempts(STABLE_MODEL);
        assert_eq!(attempts.len(), 2);
        assert!(attempts[0].augmented);
        assert!(!attempts[1].augmented);
    }

    #[test]
    fn test_system_instruction_without_favorites_is_bare() {
        let instruction = synopsis_system_instruction(&[]);
        assert_eq!(instruction, "You are a professional content editor assistant.");
    }

    #[test]
    fn test_system_instruction_quotes_favorites() {
        let favorites = vec!["first example".to_string(), "second example".to_string()];
        let instruction = synopsis_system_instruction(&favorites);
        assert!(instruction.contains("previously liked"));
        assert!(instruction.contains("first example\n---\nsecond example"));
    }

    #[test]
    fn test_hashtag_prompt_truncates_script() {
        let request = HashtagRequest {
            script: "z".repeat(5000),
            description: "travel vlog".to_string(),
            amount: 30,
            file_name: None,
            favorites: Vec::new(),
            model_id: STABLE_MODEL.to_string(),
        };
        let prompt = hashtag_prompt(&request);
        assert!(prompt.contains("... (truncated for brevity)"));
        let embedded = prompt.matches('z').count();
        assert_eq!(embedded, HASHTAG_SCRIPT_CONTEXT_CHARS);
    }
}
