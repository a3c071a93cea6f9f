//! Supporting content endpoints for the non-catalog pages, plus the three
//! write endpoints (enquiry, distributor application, newsletter).

use contracts::api::{ApiEnvelope, MaybeEnveloped};
use contracts::content::{
    AboutContent, DistributorApplication, EnquiryRequest, FooterContent, HomeImage,
    OfficeAddress, SubscribeRequest,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

async fn get_enveloped<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(failure_message(response).await);
    }
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    envelope.into_result()
}

/// The `/home/*` endpoints answer either a bare array or the standard
/// envelope depending on backend version; accept both.
async fn get_home_images(path: &str) -> Result<Vec<HomeImage>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(failure_message(response).await);
    }
    let payload: MaybeEnveloped<Vec<HomeImage>> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    payload.into_result()
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(failure_message(response).await);
    }
    Ok(())
}

async fn failure_message(response: Response) -> String {
    let status = response.status();
    if let Ok(envelope) = response.json::<ApiEnvelope<serde_json::Value>>().await {
        if let Some(message) = envelope.error {
            return message;
        }
    }
    format!("HTTP error: {}", status)
}

pub async fn fetch_footer() -> Result<FooterContent, String> {
    get_enveloped("/footer").await
}

pub async fn fetch_about() -> Result<AboutContent, String> {
    get_enveloped("/about").await
}

pub async fn fetch_carousel() -> Result<Vec<HomeImage>, String> {
    get_home_images("/home/carousel").await
}

pub async fn fetch_top_images() -> Result<Vec<HomeImage>, String> {
    get_home_images("/home/topImages").await
}

pub async fn fetch_bottom_images() -> Result<Vec<HomeImage>, String> {
    get_home_images("/home/bottomImages").await
}

pub async fn fetch_active_addresses() -> Result<Vec<OfficeAddress>, String> {
    get_enveloped("/addresses/active").await
}

pub async fn submit_enquiry(enquiry: &EnquiryRequest) -> Result<(), String> {
    post_json("/enquiries", enquiry).await
}

pub async fn submit_distributor_application(
    application: &DistributorApplication,
) -> Result<(), String> {
    post_json("/distributor", application).await
}

pub async fn subscribe(email: &str) -> Result<(), String> {
    let request = SubscribeRequest {
        email: email.trim().to_string(),
    };
    post_json("/subscribe", &request).await
}
