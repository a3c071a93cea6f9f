//! Supporting content payloads for the non-catalog pages: footer, about,
//! home imagery, office addresses, and the write-side request bodies
//! (enquiry, distributor application, newsletter subscription).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterContent {
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutContent {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub profile: Option<String>,
    #[serde(rename = "bannerImage")]
    pub banner_image: Option<String>,
}

/// Slide/band entry for the home page (`/home/carousel`, `/home/topImages`,
/// `/home/bottomImages`).
#[derive(Debug, Clone, Deserialize)]
pub struct HomeImage {
    pub url: String,
    pub title: Option<String>,
}

/// Active office from `GET /addresses/active`.
#[derive(Debug, Clone, Deserialize)]
pub struct OfficeAddress {
    pub title: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EnquiryRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub country: String,
    pub comments: String,
    pub subscribe: bool,
    /// Set when the form was opened from a product detail page.
    #[serde(rename = "productId", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DistributorApplication {
    pub company: String,
    #[serde(rename = "contactName")]
    pub contact_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub channels: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_serializes_camel_case() {
        let enquiry = EnquiryRequest {
            full_name: "Jo Field".to_string(),
            email: "jo@example.com".to_string(),
            product_id: Some("42".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&enquiry).unwrap();
        assert_eq!(json["fullName"], "Jo Field");
        assert_eq!(json["productId"], "42");
    }

    #[test]
    fn test_enquiry_omits_absent_product() {
        let json = serde_json::to_value(EnquiryRequest::default()).unwrap();
        assert!(json.get("productId").is_none());
    }

    #[test]
    fn test_footer_tolerates_sparse_payload() {
        let footer: FooterContent = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert_eq!(footer.email.as_deref(), Some("x@y.z"));
        assert!(footer.phone.is_none());
    }
}
