use serde::Serialize;

// Request payload
#[derive(Debug, Serialize)]
pub struct QueryPayload<'a> {
    pub query: &'a str,
    pub variables: QuestionVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionVariables<'a> {
    pub title_slug: &'a str,
}
