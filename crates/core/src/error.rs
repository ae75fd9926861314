#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid base URL '{0}': expected an http:// or https:// origin")]
    InvalidBaseUrl(String),
}
