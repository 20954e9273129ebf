use crate::config::RunConfig;
use crate::ConfigError;
use url::Url;

/// Validates the entire run configuration
pub fn validate(config: &RunConfig) -> Result<(), ConfigError> {
    validate_output_dir(config)?;
    validate_http_url(&config.feed_url)?;
    validate_http_url(&config.render_service)?;
    Ok(())
}

/// Validates the output directory: absolute, present, and a directory
///
/// The directory is never created implicitly; artifacts land directly in it.
fn validate_output_dir(config: &RunConfig) -> Result<(), ConfigError> {
    let dir = &config.output_dir;
    let display = dir.display().to_string();

    if !dir.is_absolute() {
        return Err(ConfigError::RelativeOutputDir(display));
    }

    if !dir.exists() {
        return Err(ConfigError::MissingOutputDir(display));
    }

    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(display));
    }

    Ok(())
}

/// Validates that a URL uses an HTTP scheme
fn validate_http_url(url: &Url) -> Result<(), ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
