//! Response post-processing: filler stripping and structured-result extraction.
//!
//! `clean` removes canned trailing filler phrases from the model reply.
//! `try_parse_structured` extracts an embedded JSON object (fenced or bare) and
//! normalizes it to a field-complete [`StructuredResult`], backfilling
//! documented defaults for missing or type-mismatched fields.

use std::sync::OnceLock;

use chaysh_core::ParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_NAME: &str = "Unknown result";
pub const DEFAULT_DESCRIPTION: &str = "No information available.";
pub const DEFAULT_SOURCE_INFO: &str = "No source info.";

/// A follow-up query the front end can offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub category: String,
}

/// An action button the front end can render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub query: String,
}

impl Action {
    /// The default chat action echoing the original query.
    pub fn ask_more(query: impl Into<String>) -> Self {
        Self {
            kind: "chat".to_string(),
            label: "Ask More".to_string(),
            query: query.into(),
        }
    }
}

/// Normalized, field-complete response shape returned to the caller regardless
/// of what the provider actually produced. All five fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResult {
    pub name: String,
    pub description: Vec<String>,
    pub source_info: String,
    pub suggestions: Vec<Suggestion>,
    pub actions: Vec<Action>,
}

impl StructuredResult {
    /// The deterministic fallback used when the provider fails or its output
    /// cannot be parsed at all.
    pub fn fallback(original_query: &str) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: vec![DEFAULT_DESCRIPTION.to_string()],
            source_info: DEFAULT_SOURCE_INFO.to_string(),
            suggestions: Vec::new(),
            actions: vec![Action::ask_more(original_query)],
        }
    }
}

/// Trailing filler patterns, applied in order, each anchored to the end of the
/// reply. Case-insensitive, dot matches newline.
fn filler_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(?is)(Can you elaborate.*?|Would you like more.*?|What specific aspects.*?|Would you like me to.*?|Is there anything else.*?)$",
            r"(?is)(Let me know if you need.*?|Feel free to ask.*?|I'm here to help.*?)$",
            r"(?is)(Would you like to know.*?|Do you want me to.*?|Should I.*?)$",
            r"(?is)(I hope this helps.*?|Let me know if.*?|Please let me know.*?)$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("filler pattern"))
        .collect()
    })
}

/// Strips canned trailing filler phrases and surrounding whitespace.
/// A pattern not matching is not an error; empty input stays empty.
pub fn clean(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for pattern in filler_patterns() {
        cleaned = pattern.replace(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Extracts an embedded JSON object and normalizes it to a [`StructuredResult`].
///
/// Looks for a ```` ```json ```` fence, then any fence, then the outermost
/// `{...}` span. Missing or type-mismatched fields are backfilled with the
/// documented defaults; a missing or malformed `actions` field defaults to a
/// single chat action echoing `original_query`.
pub fn parse_structured(raw: &str, original_query: &str) -> Result<StructuredResult, ParseError> {
    let block = extract_json_block(raw).ok_or(ParseError::NoJsonBlock)?;
    let value: Value =
        serde_json::from_str(block).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    let obj = match value {
        Value::Object(obj) => obj,
        _ => return Err(ParseError::InvalidJson("expected a JSON object".to_string())),
    };

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let description = match obj.get("description") {
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        Some(Value::Array(items)) => {
            let lines: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                    Value::String(_) | Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            if lines.is_empty() {
                vec![DEFAULT_DESCRIPTION.to_string()]
            } else {
                lines
            }
        }
        _ => vec![DEFAULT_DESCRIPTION.to_string()],
    };

    let source_info = obj
        .get("source_info")
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SOURCE_INFO.to_string());

    let suggestions = match obj.get("suggestions") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    };

    let actions = match obj.get("actions") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => vec![Action::ask_more(original_query)],
    };

    Ok(StructuredResult {
        name,
        description,
        source_info,
        suggestions,
        actions,
    })
}

/// Option form of [`parse_structured`]; absence of parsable JSON is the common
/// plain-text case, not a failure.
pub fn try_parse_structured(raw: &str, original_query: &str) -> Option<StructuredResult> {
    match parse_structured(raw, original_query) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!(error = %e, "no structured result in reply");
            None
        }
    }
}

/// Finds the JSON payload inside a model reply: a ```` ```json ```` fence wins,
/// then any fence whose body starts with `{`, then the outermost brace span.
fn extract_json_block(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let body = &text[start + "```json".len()..];
        if let Some(end) = body.find("```") {
            return Some(body[..end].trim());
        }
    }
    if let Some(start) = text.find("```") {
        let body = &text[start + "```".len()..];
        if let Some(end) = body.find("```") {
            let candidate = body[..end].trim();
            if candidate.starts_with('{') {
                return Some(candidate);
            }
        }
    }
    let open = text.find('{')?;
    let close = text.rfind('}')?;
    if close > open {
        Some(text[open..=close].trim())
    } else {
        None
    }
}
