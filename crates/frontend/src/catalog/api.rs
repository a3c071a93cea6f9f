//! Catalog query service.
//!
//! Thin async wrappers over the product endpoints. Every operation collapses
//! network failure, non-2xx status and malformed JSON into the same
//! `Result<_, String>` shape; no raw error ever reaches a component. No
//! retries, no caching, no request deduplication; each call is independent.

use contracts::api::ApiEnvelope;
use contracts::catalog::{normalize, ProductRecord, RawProduct, SearchHit};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

pub const SEARCH_TERM_REQUIRED: &str = "Search term is required";

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        // Failure bodies usually still carry the envelope with a message.
        if let Ok(envelope) = response.json::<ApiEnvelope<serde_json::Value>>().await {
            if let Some(message) = envelope.error {
                return Err(message);
            }
        }
        return Err(format!("HTTP error: {}", status));
    }
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    envelope.into_result()
}

async fn get_products(path: &str) -> Result<Vec<ProductRecord>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let raw: Vec<RawProduct> = read_envelope(response).await?;
    Ok(raw.into_iter().map(normalize).collect())
}

/// Bounded curated set for the homepage strip.
pub async fn fetch_showcase() -> Result<Vec<ProductRecord>, String> {
    get_products("/products/showcase").await
}

/// Full catalog snapshot used by navigation, the category view and the
/// "more products" page.
pub async fn fetch_showcase_all() -> Result<Vec<ProductRecord>, String> {
    get_products("/products/showcaseall").await
}

/// Single full record for the detail page.
pub async fn fetch_by_id(id: &str) -> Result<ProductRecord, String> {
    let url = api_url(&format!("/products/{}", urlencoding::encode(id)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let raw: RawProduct = read_envelope(response).await?;
    Ok(normalize(raw))
}

/// Public variant of the single-record endpoint.
pub async fn fetch_public_by_id(id: &str) -> Result<ProductRecord, String> {
    let url = api_url(&format!("/products/public/{}", urlencoding::encode(id)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let raw: RawProduct = read_envelope(response).await?;
    Ok(normalize(raw))
}

/// Lightweight name search. A blank term is rejected before any network
/// call is made.
pub async fn search_products(term: &str) -> Result<Vec<SearchHit>, String> {
    let term = validate_search_term(term)?;
    let url = api_url(&format!(
        "/products/search?name={}",
        urlencoding::encode(term)
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_envelope(response).await
}

/// Trimmed, non-empty search term or the standard rejection message.
pub fn validate_search_term(term: &str) -> Result<&str, String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        Err(SEARCH_TERM_REQUIRED.to_string())
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_terms_are_rejected() {
        assert_eq!(
            validate_search_term("   ").unwrap_err(),
            SEARCH_TERM_REQUIRED
        );
        assert_eq!(validate_search_term("").unwrap_err(), SEARCH_TERM_REQUIRED);
    }

    #[test]
    fn test_terms_are_trimmed() {
        assert_eq!(validate_search_term("  caliper ").unwrap(), "caliper");
    }
}
