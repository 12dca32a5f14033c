use crate::error::{Error, Result};
use crate::models::question::Question;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Hard cap on the document text embedded in the prompt, counted in
/// characters rather than tokens. Keeps the request within the generation
/// service's input limits.
pub const MAX_CONTENT_CHARS: usize = 3000;

const SYSTEM_PROMPT: &str =
    "You are a quiz generator that outputs only valid JSON arrays containing question objects.";

/// Renders the fixed quiz instruction template around the first
/// `MAX_CONTENT_CHARS` characters of `content`.
pub fn build_prompt(content: &str, num_questions: usize) -> String {
    let trimmed: String = content.chars().take(MAX_CONTENT_CHARS).collect();

    format!(
        r#"Create exactly {num_questions} multiple choice questions based on this content.
For each question, provide:
1. The question text
2. Four answer choices labeled A, B, C, D
3. The correct answer (as the index 0-3)
4. A brief explanation

Format your response precisely as a JSON array of objects with these exact keys:
{{
    "question": "question text",
    "options": ["A", "B", "C", "D"],
    "correct_answer": 0,
    "explanation": "explanation text"
}}

Content for questions: {trimmed}"#
    )
}

/// The generation service answers either with a bare array of question
/// objects or with an object wrapping that array under a "questions" key.
/// The shape is resolved here, once, and never propagated further.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationPayload {
    Bare(Vec<JsonValue>),
    Wrapped { questions: Vec<JsonValue> },
}

impl GenerationPayload {
    fn into_items(self) -> Vec<JsonValue> {
        match self {
            GenerationPayload::Bare(items) => items,
            GenerationPayload::Wrapped { questions } => questions,
        }
    }
}

/// Parses the text payload returned by the generation service into questions.
///
/// Entries that do not parse as a question, carry an option count other than
/// four, or point their answer index outside the options are dropped with a
/// warning; the rest pass through verbatim.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let value: JsonValue = serde_json::from_str(raw).map_err(|e| {
        Error::Parse(format!(
            "Failed to parse the generated questions: {}; raw response: {}",
            e, raw
        ))
    })?;

    let payload: GenerationPayload = serde_json::from_value(value).map_err(|_| {
        Error::Validation("Generated questions are not in the correct format".to_string())
    })?;

    let items = payload.into_items();
    let mut questions = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Question>(item) {
            Ok(q) if q.is_well_formed() => questions.push(q),
            Ok(q) => tracing::warn!("Dropping malformed question at index {}: {:?}", idx, q),
            Err(e) => tracing::warn!("Dropping unparseable question at index {}: {}", idx, e),
        }
    }

    Ok(questions)
}

#[derive(Clone)]
pub struct QuizService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl QuizService {
    pub fn new(api_key: Option<String>, base_url: String, model: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }

    /// Asks the generation service for `num_questions` multiple-choice
    /// questions about `content`. One blocking attempt, no retry.
    pub async fn generate_quiz(&self, content: &str, num_questions: usize) -> Result<Vec<Question>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("OpenAI API key not configured".to_string()))?;

        let prompt = build_prompt(content, num_questions);

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "response_format": { "type": "json_object" }
        });

        tracing::info!("Requesting {} questions from the generation service", num_questions);
        let res = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "Generation service error {}: {}",
                status, text
            )));
        }

        let body: JsonValue = res.json().await?;

        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                Error::Upstream("Generation response carried no message content".to_string())
            })?;

        parse_questions(content)
    }
}
