//! DTOs for link creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// `original_url` is required but not validated: a bare host is given an
/// `https://` scheme and an empty string is accepted.
#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    pub original_url: String,
}

/// Public view of a link record.
///
/// `updated_at` is always serialized, as `null` when unset.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            short_url: link.short_code.unwrap_or_default(),
            original_url: link.original_url,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_response_serializes_null_updated_at() {
        let link = Link::new(
            1,
            0,
            Some("00001".to_string()),
            "https://example.com".to_string(),
            Utc::now(),
            None,
        );

        let json = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(json["short_url"], "00001");
        assert_eq!(json["original_url"], "https://example.com");
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_null());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_create_request_requires_original_url() {
        assert!(serde_json::from_str::<CreateUrlRequest>(r#"{}"#).is_err());

        let req: CreateUrlRequest = serde_json::from_str(r#"{"original_url":""}"#).unwrap();
        assert_eq!(req.original_url, "");
    }
}
