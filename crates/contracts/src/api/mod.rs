//! Wire envelope shared by every backend endpoint.
//!
//! The REST API answers `{success, data, error}` on both happy and failure
//! paths. `ApiEnvelope` models that shape and collapses it into a plain
//! `Result` at the service boundary so components only ever see
//! `Result<T, String>`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Collapse the discriminated wire shape into a `Result`.
    ///
    /// `success: true` without a payload is treated as a malformed response,
    /// not a silent empty value.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "Response marked success but carried no data".to_string())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "Request failed".to_string()))
        }
    }
}

/// Some legacy endpoints (`/home/*`) answer either a bare JSON array or the
/// standard envelope. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaybeEnveloped<T> {
    Wrapped(ApiEnvelope<T>),
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            MaybeEnveloped::Wrapped(envelope) => envelope.into_result(),
            MaybeEnveloped::Bare(data) => Ok(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_envelope_keeps_message() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":false,"error":"Network error"}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Network error");
    }

    #[test]
    fn test_failure_without_message() {
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Request failed");
    }

    #[test]
    fn test_success_without_payload_is_an_error() {
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.into_result().is_err());
    }

    #[test]
    fn test_empty_data_is_not_an_error() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":true,"data":[]}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_envelope_needs_no_default_on_the_payload() {
        // Payload types are plain wire structs; the envelope must not
        // require them to implement Default.
        #[derive(Debug, Clone, Deserialize)]
        struct Payload {
            value: String,
        }

        let env: ApiEnvelope<Payload> =
            serde_json::from_str(r#"{"success":false,"error":"down"}"#).unwrap();
        assert!(env.data.is_none());
        assert_eq!(env.into_result().map(|p| p.value).unwrap_err(), "down");

        let wrapped: MaybeEnveloped<Payload> =
            serde_json::from_str(r#"{"success":true,"data":{"value":"ok"}}"#).unwrap();
        assert_eq!(wrapped.into_result().unwrap().value, "ok");
    }

    #[test]
    fn test_maybe_enveloped_accepts_both_shapes() {
        let bare: MaybeEnveloped<Vec<String>> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(bare.into_result().unwrap(), vec!["a", "b"]);

        let wrapped: MaybeEnveloped<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":["a"]}"#).unwrap();
        assert_eq!(wrapped.into_result().unwrap(), vec!["a"]);
    }
}
