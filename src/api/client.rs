use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde_json::Value;

use super::queries::QUESTION_DETAIL_QUERY;
use super::types::{QueryPayload, QuestionVariables};

pub const LEETCODE_GRAPHQL: &str = "https://leetcode.com/graphql/";

#[derive(Clone)]
pub struct LeetCodeClient {
    client: Client,
    endpoint: String,
}

impl LeetCodeClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one `getQuestionDetail` query and returns the response body as
    /// an untyped JSON document. The HTTP status is not inspected.
    pub async fn fetch_question_document(&self, slug: &str) -> Result<Value> {
        let body = QueryPayload {
            query: QUESTION_DETAIL_QUERY,
            variables: QuestionVariables { title_slug: slug },
        };

        debug!("POST {} (titleSlug={})", self.endpoint, slug);
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Referer", format!("https://leetcode.com/problems/{}/", slug))
            .json(&body)
            .send()
            .await
            .context("Failed to send question detail request")?;
        debug!("response status {}", resp.status());

        resp.json()
            .await
            .context("Failed to parse question detail response")
    }
}
