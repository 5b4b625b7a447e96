use thiserror::Error;

/// Errors that can occur while loading and validating the configuration file.
///
/// All of them are terminal from the loader's point of view: a configuration
/// that cannot be fully loaded is never returned partially populated. The
/// caller decides whether to exit, retry or prompt.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("failed to read the configuration file: {0}")]
    SourceUnreadable(#[from] std::io::Error),

    /// The file content does not match the expected JSON schema.
    #[error("failed to decode the configuration file: {0}")]
    DecodeFailure(#[from] serde_json::Error),

    /// One or more required parameters are empty after decoding.
    ///
    /// Carries the display names of every empty parameter, in check order,
    /// so a single report covers all of them at once.
    #[error("configuration is incomplete, missing required parameters: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}
