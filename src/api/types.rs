//! Wire types for the extraction API.

use serde::{Deserialize, Serialize};

use crate::config::TransferMode;

/// Request body for the metadata probe endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProbePayload<'a> {
    pub identifier: &'a str,
    pub mode: TransferMode,
}

/// Request body for the single item download endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SingleDownloadPayload<'a> {
    pub identifier: &'a str,
    pub mode: TransferMode,
}

/// Request body for the collection download endpoint.
///
/// The collection endpoint infers the mode and takes only the identifier.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionDownloadPayload<'a> {
    pub identifier: &'a str,
}

/// Descriptive metadata returned by a successful probe.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeInfo {
    #[serde(rename = "type")]
    pub kind: TransferMode,

    pub title: Option<String>,
    pub uploader: Option<String>,

    /// Present for single items only.
    pub thumbnail: Option<String>,

    /// Present for collections only.
    pub video_count: Option<u64>,

    /// Preview of the first collection entries.
    #[serde(default)]
    pub videos: Vec<ProbeEntry>,
}

/// One entry in a collection preview.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeEntry {
    pub title: Option<String>,
    pub url: Option<String>,
    pub id: Option<String>,
}

/// Structured error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_payload_shape() {
        let payload = serde_json::to_value(ProbePayload {
            identifier: "https://example.com/watch?v=abc",
            mode: TransferMode::Collection,
        })
        .unwrap();

        assert_eq!(
            payload,
            serde_json::json!({
                "identifier": "https://example.com/watch?v=abc",
                "mode": "collection",
            })
        );
    }

    #[test]
    fn test_collection_payload_omits_mode() {
        let payload = serde_json::to_value(CollectionDownloadPayload {
            identifier: "https://example.com/playlist?list=xyz",
        })
        .unwrap();

        assert_eq!(
            payload,
            serde_json::json!({"identifier": "https://example.com/playlist?list=xyz"})
        );
    }

    #[test]
    fn test_decode_single_probe_info() {
        let info: ProbeInfo = serde_json::from_str(
            r#"{
                "type": "single",
                "title": "Some Video",
                "uploader": "Some Channel",
                "thumbnail": "https://example.com/thumb.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(info.kind, TransferMode::Single);
        assert_eq!(info.title.as_deref(), Some("Some Video"));
        assert!(info.thumbnail.is_some());
        assert!(info.video_count.is_none());
        assert!(info.videos.is_empty());
    }

    #[test]
    fn test_decode_collection_probe_info() {
        let info: ProbeInfo = serde_json::from_str(
            r#"{
                "type": "collection",
                "title": "Mix",
                "uploader": "Someone",
                "video_count": 12,
                "videos": [
                    {"title": "First", "url": "https://example.com/1", "id": "a1"},
                    {"title": null, "url": null, "id": "a2"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(info.kind, TransferMode::Collection);
        assert_eq!(info.video_count, Some(12));
        assert_eq!(info.videos.len(), 2);
        assert_eq!(info.videos[0].title.as_deref(), Some("First"));
    }

    #[test]
    fn test_decode_error_body() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "No URL provided"}"#).unwrap();
        assert_eq!(body.error, "No URL provided");
    }
}
