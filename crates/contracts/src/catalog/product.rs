//! Canonical product shape and the normalizer that produces it.
//!
//! `normalize` is the single boundary between the backend's loosely-shaped
//! payload and everything the UI renders. It is pure, never panics, and no
//! raw union type leaks past it.

use crate::catalog::raw::{RawDownload, RawProduct, HIGHLIGHT_FALLBACK};

pub const UNNAMED_PRODUCT: &str = "Unnamed Product";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Opaque stable key; empty only when the backend sent no id at all.
    pub id: String,
    pub name: String,
    pub main_image: String,
    pub images: Vec<String>,
    /// Trimmed; absent/blank collapses to [`UNCATEGORIZED`], so every record
    /// belongs to exactly one category bucket.
    pub category: String,
    /// Trimmed; `None` when absent or blank after trimming.
    pub subcategory: Option<String>,
    pub highlight: String,
    pub specifications: Vec<String>,
    pub highlights: Vec<String>,
    pub price: Option<f64>,
    pub show_price: bool,
    pub downloads: Vec<DownloadLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadLink {
    pub url: String,
    pub name: String,
}

impl ProductRecord {
    /// Gallery for the detail page: the image list, or the main image alone
    /// when the backend sent no gallery.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.main_image.clone()]
        } else {
            self.images.clone()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Display name for a bare download URL: its last path segment.
fn name_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(url)
        .to_string()
}

pub fn normalize(raw: RawProduct) -> ProductRecord {
    let images: Vec<String> = raw
        .images
        .into_iter()
        .filter(|url| !url.trim().is_empty())
        .collect();

    let main_image = non_blank(raw.main_image)
        .or_else(|| images.first().cloned())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let downloads = raw
        .downloads
        .into_iter()
        .filter_map(|entry| match entry {
            RawDownload::Entry { url, name } => {
                let name = non_blank(name).unwrap_or_else(|| name_from_url(&url));
                Some(DownloadLink { url, name })
            }
            RawDownload::Link(url) => {
                let name = name_from_url(&url);
                Some(DownloadLink { url, name })
            }
            RawDownload::Other(value) => {
                log::warn!("Discarding download entry of unexpected shape: {}", value);
                None
            }
        })
        .collect();

    ProductRecord {
        id: raw.id.map(|id| id.as_key()).unwrap_or_default(),
        name: non_blank(raw.name).unwrap_or_else(|| UNNAMED_PRODUCT.to_string()),
        main_image,
        images,
        category: non_blank(raw.category).unwrap_or_else(|| UNCATEGORIZED.to_string()),
        subcategory: non_blank(raw.subcategory),
        highlight: raw
            .highlight
            .map(|h| h.resolve())
            .unwrap_or_else(|| HIGHLIGHT_FALLBACK.to_string()),
        specifications: raw
            .specifications
            .map(|list| list.parse("specifications"))
            .unwrap_or_default(),
        highlights: raw
            .highlights
            .map(|list| list.parse("highlights"))
            .unwrap_or_default(),
        price: raw.price,
        show_price: raw.show_price.map(|flag| flag.truthy()).unwrap_or(false),
        downloads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_json(json: &str) -> ProductRecord {
        normalize(serde_json::from_str::<RawProduct>(json).unwrap())
    }

    #[test]
    fn test_empty_object_normalizes_to_defaults() {
        let record = normalize_json("{}");
        assert_eq!(record.id, "");
        assert_eq!(record.name, UNNAMED_PRODUCT);
        assert_eq!(record.main_image, PLACEHOLDER_IMAGE);
        assert_eq!(record.category, UNCATEGORIZED);
        assert_eq!(record.subcategory, None);
        assert_eq!(record.highlight, "No highlights available");
        assert!(record.specifications.is_empty());
        assert!(!record.show_price);
    }

    #[test]
    fn test_full_record() {
        let record = normalize_json(
            r#"{
                "id": 7,
                "name": "Vernier Caliper",
                "mainImage": "https://cdn.example.com/caliper.png",
                "images": ["a.png", "b.png"],
                "category": " Dimension ",
                "subcategory": "Laser",
                "highlight": {"title": "0.02mm accuracy"},
                "specifications": "[\"Range: 0-150mm\",\"Graduation: 0.02mm\"]",
                "highlights": ["Hardened stainless frame"],
                "price": 212.0,
                "showPrice": "true",
                "downloads": ["https://cdn.example.com/manuals/511-711.pdf"]
            }"#,
        );
        assert_eq!(record.id, "7");
        assert_eq!(record.category, "Dimension");
        assert_eq!(record.subcategory.as_deref(), Some("Laser"));
        assert_eq!(record.highlight, "0.02mm accuracy");
        assert_eq!(record.specifications.len(), 2);
        assert_eq!(record.price, Some(212.0));
        assert!(record.show_price);
        assert_eq!(record.downloads[0].name, "511-711.pdf");
    }

    #[test]
    fn test_blank_category_collapses_to_sentinel() {
        let record = normalize_json(r#"{"category": "   "}"#);
        assert_eq!(record.category, UNCATEGORIZED);
    }

    #[test]
    fn test_blank_subcategory_is_absent() {
        let record = normalize_json(r#"{"subcategory": " "}"#);
        assert_eq!(record.subcategory, None);
    }

    #[test]
    fn test_main_image_falls_back_to_gallery() {
        let record = normalize_json(r#"{"images": ["first.png", "second.png"]}"#);
        assert_eq!(record.main_image, "first.png");
    }

    #[test]
    fn test_invalid_specifications_never_fail() {
        let record = normalize_json(r#"{"specifications": "{not json"}"#);
        assert!(record.specifications.is_empty());
    }

    #[test]
    fn test_gallery_defaults_to_main_image() {
        let record = normalize_json(r#"{"mainImage": "only.png"}"#);
        assert_eq!(record.gallery(), vec!["only.png"]);
    }

    #[test]
    fn test_download_entry_with_name() {
        let record = normalize_json(
            r#"{"downloads": [{"url": "https://x/y.pdf", "name": "Datasheet"}, {"bogus": 1}]}"#,
        );
        assert_eq!(record.downloads.len(), 1);
        assert_eq!(record.downloads[0].name, "Datasheet");
    }
}
