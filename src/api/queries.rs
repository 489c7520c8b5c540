pub const QUESTION_DETAIL_QUERY: &str = r#"
query getQuestionDetail($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    title
    difficulty
  }
}
"#;
