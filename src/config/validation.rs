//! Configuration and request validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.server.base_url)?;
    Ok(())
}

/// Validate the extraction server base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::MissingConfig("server.base_url".to_string()));
    }

    let parsed = Url::parse(base_url).map_err(|e| Error::ConfigValidation {
        field: "server.base_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", base_url, e),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "server.base_url".to_string(),
            message: format!(
                "Unsupported scheme '{}'. Only http and https are supported.",
                parsed.scheme()
            ),
        });
    }

    Ok(())
}

/// Validate a resource identifier before any network activity.
///
/// The identifier is whatever the extraction backend accepts, usually a media
/// page URL. The only local requirement is that it is non-empty.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(Error::Validation(
            "Please enter a video or playlist URL".to_string(),
        ));
    }

    Ok(())
}
