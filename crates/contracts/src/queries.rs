use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// LLM backend used to translate natural language into SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    OpenAi,
    Anthropic,
}

/// Request to translate and execute a natural-language question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub llm_provider: LlmProvider,
}

/// Translation/execution result.
///
/// Either `error` is set, or `sql` + `columns` + `rows` describe a
/// successfully executed query. Cell values are schema-less JSON scalars
/// keyed by column name; a missing or null entry means an empty cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<HashMap<String, Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of asking the backend to synthesize an example question.
///
/// `query` and `error` both absent is a valid "nothing generated" outcome,
/// distinct from an explicit error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateQueryResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&LlmProvider::OpenAi).unwrap(),
            "\"openai\""
        );
        assert_eq!(
            serde_json::to_string(&LlmProvider::Anthropic).unwrap(),
            "\"anthropic\""
        );
    }

    #[test]
    fn query_response_decodes_partial_payloads() {
        let failed: QueryResponse = serde_json::from_str(r#"{"error": "ambiguous query"}"#).unwrap();
        assert_eq!(failed.error.as_deref(), Some("ambiguous query"));
        assert!(failed.sql.is_empty());
        assert!(failed.columns.is_empty());
        assert!(failed.rows.is_empty());

        let ok: QueryResponse = serde_json::from_str(
            r#"{"sql": "SELECT 1 AS n", "columns": ["n"], "rows": [{"n": 1}]}"#,
        )
        .unwrap();
        assert!(ok.error.is_none());
        assert_eq!(ok.columns, vec!["n"]);
        assert_eq!(ok.rows.len(), 1);
    }

    #[test]
    fn generation_distinguishes_empty_from_error() {
        let nothing: GenerateQueryResponse = serde_json::from_str("{}").unwrap();
        assert!(nothing.query.is_none() && nothing.error.is_none());

        let failed: GenerateQueryResponse =
            serde_json::from_str(r#"{"error": "no tables loaded"}"#).unwrap();
        assert!(failed.error.is_some());
    }
}
