//! Analysis results and the tolerant parser that produces them.
//!
//! The analysis service is an LLM and its output is untrusted. Every
//! response, and every cache entry, goes through [`AnalysisResult::from_value`]
//! exactly once; it substitutes defaults for missing or mistyped fields so
//! that nothing downstream has to.

use crate::types::Corpus;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// Placeholder for a missing `type` or `conflict`.
pub const NOT_AVAILABLE: &str = "N/A";

/// Message used when the service reply is not JSON.
pub const MALFORMED_RESPONSE: &str =
    "Failed to decode JSON from AI response. The model may have returned an invalid format.";

/// Markdown code-fence markers models like to wrap JSON in.
static CODE_FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```(?:json)?").unwrap());

/// Produces an analysis of a slide corpus.
///
/// Implementations never fail: configuration, transport, and decoding
/// problems come back as [`AnalysisResult::Failure`].
pub trait Analyzer {
    /// Analyze the corpus with at most one request to the service.
    fn analyze(&self, corpus: &Corpus) -> AnalysisResult;
}

/// One reported inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Category, e.g. "Numerical Inconsistency".
    #[serde(rename = "type")]
    pub kind: String,

    /// What contradicts what.
    pub conflict: String,

    /// Quotes supporting the conflict, in the order given.
    pub evidence: Vec<String>,
}

impl Issue {
    /// Create an issue.
    pub fn new(kind: impl Into<String>, conflict: impl Into<String>, evidence: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            conflict: conflict.into(),
            evidence,
        }
    }

    /// Normalize one element of the `issues` array.
    fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(text_of)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        let evidence = match value.get("evidence") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| text_of(item).unwrap_or_else(|| "null".to_string()))
                .collect(),
            Some(Value::String(single)) => vec![single.clone()],
            _ => Vec::new(),
        };

        Self {
            kind: field("type"),
            conflict: field("conflict"),
            evidence,
        }
    }
}

/// Outcome of an analysis: a list of issues or an error message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// The service answered with a (possibly empty) issue list.
    Success { issues: Vec<Issue> },

    /// Configuration, transport, or decoding failed.
    Failure {
        #[serde(rename = "error")]
        message: String,
    },
}

impl AnalysisResult {
    /// A successful result.
    pub fn success(issues: Vec<Issue>) -> Self {
        Self::Success { issues }
    }

    /// A failed result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Whether this is the error variant.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Issues of a successful result; empty for a failure.
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Success { issues } => issues,
            Self::Failure { .. } => &[],
        }
    }

    /// Normalize arbitrary JSON into a result.
    ///
    /// - an object with an `error` key is a failure;
    /// - otherwise `issues` is read, defaulting to empty when absent or not
    ///   an array; a bare top-level array is taken as the issue list;
    /// - any other top-level value is reported as a failure.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                if let Some(error) = map.get("error") {
                    return Self::failure(text_of(error).unwrap_or_default());
                }
                match map.get("issues") {
                    Some(Value::Array(items)) => Self::success(items.iter().map(Issue::from_value).collect()),
                    _ => Self::success(Vec::new()),
                }
            }
            Value::Array(items) => Self::success(items.iter().map(Issue::from_value).collect()),
            other => Self::failure(format!(
                "Unexpected analysis response: expected a JSON object, got {}",
                json_kind(other)
            )),
        }
    }

    /// Parse raw model output, stripping code-fence markers first.
    pub fn from_model_text(raw: &str) -> Self {
        let cleaned = strip_code_fences(raw);
        match serde_json::from_str::<Value>(&cleaned) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                log::debug!("Model output is not JSON: {}", e);
                Self::failure(MALFORMED_RESPONSE)
            }
        }
    }

    /// Serialize as pretty JSON (`{"issues": [...]}` or `{"error": "..."}`).
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Remove every ```` ```json ```` and ```` ``` ```` marker and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE_REGEX.replace_all(raw.trim(), "").trim().to_string()
}

/// Render the corpus as one prompt body, one tagged block per slide.
pub fn corpus_prompt_body(corpus: &Corpus) -> String {
    corpus
        .iter()
        .map(|(number, text)| format!("--- Slide {} ---\n{}", number, text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Textual form of a JSON value; `None` for null.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
