use anyhow::{Context, Result};
use log::info;
use serde_json::Value;
use std::io::Write;

use crate::api::client::LeetCodeClient;

pub const TITLE_SLUG: &str = "apply-operations-to-make-all-array-elements-equal-to-zero";

/// Borrowed view of `data.question` inside a response document.
struct QuestionFields<'a> {
    question_id: &'a Value,
    title: &'a Value,
    difficulty: Option<&'a Value>,
}

/// Looks up the fixed problem and writes its id, its title, and the full
/// pretty-printed response document to `out`.
pub async fn run<W: Write>(client: &LeetCodeClient, out: &mut W) -> Result<()> {
    let document = client.fetch_question_document(TITLE_SLUG).await?;
    let question = extract_question(&document)?;
    info!(
        "fetched question {} ({})",
        field_text(question.question_id),
        question
            .difficulty
            .map(field_text)
            .unwrap_or_else(|| "unknown difficulty".to_string())
    );

    writeln!(out, "{}", field_text(question.question_id))?;
    writeln!(out, "{}", field_text(question.title))?;
    let pretty =
        serde_json::to_string_pretty(&document).context("Failed to format response document")?;
    writeln!(out, "{}", pretty)?;
    out.flush()?;
    Ok(())
}

// Only absent keys are fatal; present values of any JSON type are accepted.
fn extract_question(document: &Value) -> Result<QuestionFields<'_>> {
    let question = document
        .get("data")
        .and_then(|d| d.get("question"))
        .context("No question data in response")?;
    let question_id = question
        .get("questionId")
        .context("No questionId in question data")?;
    let title = question
        .get("title")
        .context("No title in question data")?;
    Ok(QuestionFields {
        question_id,
        title,
        difficulty: question.get("difficulty"),
    })
}

/// Strings print raw; any other value prints as JSON.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
