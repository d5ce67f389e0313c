//! Filename resolution from response metadata.

use regex::Regex;

use crate::config::TransferMode;

/// Extract the suggested filename from a Content-Disposition value.
///
/// Looks for the `filename="<name>"` attribute and returns the captured name
/// verbatim. When the header is absent or does not match, falls back to the
/// mode default. Always returns a usable, non-empty name.
pub fn resolve_filename(disposition: Option<&str>, mode: TransferMode) -> String {
    // Same pattern the server advertises: attachment; filename="<name>"
    let pattern = Regex::new(r#"filename="([^"]+)""#).unwrap();

    if let Some(header) = disposition {
        if let Some(captures) = pattern.captures(header) {
            if let Some(name) = captures.get(1) {
                return name.as_str().to_string();
            }
        }
    }

    mode.default_filename().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_quoted_filename() {
        let header = r#"attachment; filename="My Video.mp4""#;
        assert_eq!(
            resolve_filename(Some(header), TransferMode::Single),
            "My Video.mp4"
        );
    }

    #[test]
    fn test_resolve_returns_capture_verbatim() {
        // The captured name is not sanitized at this layer.
        let header = r#"attachment; filename="weird name?!.mp4""#;
        assert_eq!(
            resolve_filename(Some(header), TransferMode::Single),
            "weird name?!.mp4"
        );
    }

    #[test]
    fn test_missing_header_uses_mode_default() {
        assert_eq!(resolve_filename(None, TransferMode::Single), "video.mp4");
        assert_eq!(
            resolve_filename(None, TransferMode::Collection),
            "playlist.zip"
        );
    }

    #[test]
    fn test_unparseable_header_uses_mode_default() {
        assert_eq!(
            resolve_filename(Some("attachment"), TransferMode::Collection),
            "playlist.zip"
        );
        assert_eq!(
            resolve_filename(Some(r#"attachment; filename="""#), TransferMode::Single),
            "video.mp4"
        );
    }

    #[test]
    fn test_never_returns_empty() {
        for header in [None, Some(""), Some("attachment; filename=")] {
            for mode in [TransferMode::Single, TransferMode::Collection] {
                assert!(!resolve_filename(header, mode).is_empty());
            }
        }
    }
}
