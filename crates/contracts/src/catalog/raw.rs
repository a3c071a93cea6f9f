//! Raw product payload as the backend actually sends it.
//!
//! Fields are silently optional in the wild and several arrive in more than
//! one shape (plain string, array, object, JSON-encoded string). Each of
//! those is modeled as an explicit untagged union here so the ambiguity is
//! contained to this module; `product::normalize` is the only way out.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: Option<RawId>,
    pub name: Option<String>,
    #[serde(rename = "mainImage")]
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub highlight: Option<RawHighlight>,
    pub specifications: Option<RawTextList>,
    pub highlights: Option<RawTextList>,
    pub price: Option<f64>,
    #[serde(rename = "showPrice")]
    pub show_price: Option<RawFlag>,
    #[serde(default)]
    pub downloads: Vec<RawDownload>,
}

/// Product identifiers come back as either a JSON string or a number.
/// They are opaque keys; both collapse to a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub fn as_key(&self) -> String {
        match self {
            RawId::Text(s) => s.clone(),
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// The `highlight` field: plain string, array of strings, or an object with
/// some subset of `text`/`title`/`description`/`value`. Anything else is
/// caught by the trailing `Value` variant so deserialization never fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawHighlight {
    Text(String),
    Many(Vec<String>),
    Fields {
        text: Option<String>,
        title: Option<String>,
        description: Option<String>,
        value: Option<String>,
    },
    Other(Value),
}

pub(crate) const HIGHLIGHT_FALLBACK: &str = "No highlights available";

impl RawHighlight {
    /// First-matching-field precedence; always terminates with a string.
    pub fn resolve(self) -> String {
        match self {
            RawHighlight::Text(s) => s,
            RawHighlight::Many(items) => items
                .into_iter()
                .next()
                .unwrap_or_else(|| HIGHLIGHT_FALLBACK.to_string()),
            RawHighlight::Fields {
                text,
                title,
                description,
                value,
            } => text
                .or(title)
                .or(description)
                .or(value)
                .unwrap_or_else(|| HIGHLIGHT_FALLBACK.to_string()),
            RawHighlight::Other(_) => HIGHLIGHT_FALLBACK.to_string(),
        }
    }
}

/// `specifications` / `highlights`: already-parsed array or a JSON-encoded
/// string, depending on which backend version wrote the record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTextList {
    Items(Vec<String>),
    Encoded(String),
    Other(Value),
}

impl RawTextList {
    /// Defensive parse: invalid JSON or an unexpected shape yields an empty
    /// list and a warning, never an error.
    pub fn parse(self, field: &str) -> Vec<String> {
        match self {
            RawTextList::Items(items) => items,
            RawTextList::Encoded(text) => match serde_json::from_str::<Vec<String>>(&text) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Discarding unparseable {} payload: {}", field, e);
                    Vec::new()
                }
            },
            RawTextList::Other(Value::Array(values)) => values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            RawTextList::Other(other) => {
                log::warn!("Discarding {} payload of unexpected shape: {}", field, other);
                Vec::new()
            }
        }
    }
}

/// `showPrice` arrives as `true`, `"true"`, `"1"` or `1`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
    Number(i64),
    Other(Value),
}

impl RawFlag {
    pub fn truthy(&self) -> bool {
        match self {
            RawFlag::Bool(b) => *b,
            RawFlag::Text(s) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("true") || s == "1"
            }
            RawFlag::Number(n) => *n == 1,
            RawFlag::Other(_) => false,
        }
    }
}

/// Download entries: `{url, name}` objects or bare URL strings. Entries of
/// any other shape are dropped during normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDownload {
    Entry { url: String, name: Option<String> },
    Link(String),
    Other(Value),
}

/// Lightweight `{id, name}` match from `GET /products/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: RawId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(json: &str) -> String {
        serde_json::from_str::<RawHighlight>(json)
            .unwrap()
            .resolve()
    }

    #[test]
    fn test_highlight_string_passes_through() {
        assert_eq!(highlight(r#""0.01mm resolution""#), "0.01mm resolution");
    }

    #[test]
    fn test_highlight_array_takes_first() {
        assert_eq!(highlight(r#"["first","second"]"#), "first");
        assert_eq!(highlight("[]"), HIGHLIGHT_FALLBACK);
    }

    #[test]
    fn test_highlight_object_precedence() {
        assert_eq!(highlight(r#"{"title":"t","text":"x"}"#), "x");
        assert_eq!(highlight(r#"{"description":"d","value":"v"}"#), "d");
        assert_eq!(highlight(r#"{"value":"v"}"#), "v");
        assert_eq!(highlight(r#"{"unrelated":"field"}"#), HIGHLIGHT_FALLBACK);
    }

    #[test]
    fn test_highlight_other_types_fall_back() {
        assert_eq!(highlight("42"), HIGHLIGHT_FALLBACK);
        assert_eq!(highlight(r#"[1,2,3]"#), HIGHLIGHT_FALLBACK);
    }

    #[test]
    fn test_text_list_parsed_array() {
        let list: RawTextList = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(list.parse("specifications"), vec!["a", "b"]);
    }

    #[test]
    fn test_text_list_encoded_string() {
        let list: RawTextList = serde_json::from_str(r#""[\"Range: 18-35mm\"]""#).unwrap();
        assert_eq!(list.parse("specifications"), vec!["Range: 18-35mm"]);
    }

    #[test]
    fn test_text_list_invalid_json_yields_empty() {
        let list: RawTextList = serde_json::from_str(r#""{not json""#).unwrap();
        assert_eq!(list.parse("specifications"), Vec::<String>::new());
    }

    #[test]
    fn test_text_list_mixed_array_keeps_stringish_items() {
        let list: RawTextList = serde_json::from_str(r#"["a", 5, {"x":1}]"#).unwrap();
        assert_eq!(list.parse("highlights"), vec!["a", "5"]);
    }

    #[test]
    fn test_flag_coercions() {
        for json in [r#"true"#, r#""true""#, r#""TRUE""#, r#""1""#, "1"] {
            let flag: RawFlag = serde_json::from_str(json).unwrap();
            assert!(flag.truthy(), "expected truthy: {}", json);
        }
        for json in [r#"false"#, r#""false""#, r#""yes""#, "0", "null"] {
            let flag: RawFlag = serde_json::from_str(json).unwrap();
            assert!(!flag.truthy(), "expected falsy: {}", json);
        }
    }

    #[test]
    fn test_id_shapes() {
        let text: RawId = serde_json::from_str(r#""abc-1""#).unwrap();
        assert_eq!(text.as_key(), "abc-1");
        let number: RawId = serde_json::from_str("42").unwrap();
        assert_eq!(number.as_key(), "42");
    }
}
