use serde::{Deserialize, Serialize};

/// Detail level requested for an explanation.
///
/// Serialized as the bare tag (`"Beginner"` / `"Advanced"`). The history core
/// only compares modes for equality, so a tag it does not know is kept as
/// `Other` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExplanationMode {
    #[default]
    Beginner,
    Advanced,
    Other(String),
}

impl ExplanationMode {
    pub fn as_str(&self) -> &str {
        match self {
            ExplanationMode::Beginner => "Beginner",
            ExplanationMode::Advanced => "Advanced",
            ExplanationMode::Other(tag) => tag,
        }
    }
}

impl From<String> for ExplanationMode {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Beginner" => ExplanationMode::Beginner,
            "Advanced" => ExplanationMode::Advanced,
            _ => ExplanationMode::Other(tag),
        }
    }
}

impl From<&str> for ExplanationMode {
    fn from(tag: &str) -> Self {
        ExplanationMode::from(tag.to_string())
    }
}

impl From<ExplanationMode> for String {
    fn from(mode: ExplanationMode) -> Self {
        match mode {
            ExplanationMode::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Result payload produced by the AI collaborator for one query.
///
/// Stored and returned unchanged; any field may be missing when the
/// corresponding call failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// One recorded query and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
    /// Trimmed user input, original casing.
    #[serde(rename = "turkishInput")]
    pub query_input: String,
    pub mode: ExplanationMode,
    pub results: ResultPayload,
}

/// Normalizes a query for duplicate comparison: trim, then lowercase.
///
/// Never used for what gets stored.
pub fn normalize_query(input: &str) -> String {
    input.trim().to_lowercase()
}
