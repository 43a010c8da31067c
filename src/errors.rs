use std::io;
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum LarderError {
    #[error("No access token configured: authenticate before calling the API")]
    NotAuthenticated,
    #[error("OAuth authentication is not supported yet")]
    UnsupportedAuthMode,
    #[error("Can't serialize json: {0}")]
    SerializeJson(serde_json::Error),
    #[error("Can't deserialize json: {0}")]
    DeserializeJson(serde_json::Error),
    #[error("Can't parse url")]
    ParseUrl(#[from] ParseError),
    #[error("Can't create client: {0}")]
    CreateClient(reqwest::Error),
    #[error("Can't execute request: {0}")]
    HttpResponse(reqwest::Error),
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { status: String, url: String },
    #[error("Can't parse response body: {0}")]
    ParseHttpResponse(reqwest::Error),
    #[error("The API does not support {operation} for a {entity}")]
    Unsupported {
        entity: &'static str,
        operation: String,
    },
    #[error("Invalid {entity}: {reason}")]
    Validation {
        entity: &'static str,
        reason: String,
    },
    #[error("Can't address an entity that has never been persisted (missing id)")]
    MissingId,
    #[error("Can't create file at {path}: {err}")]
    CreateFile { path: String, err: String },
    #[error("Can't write to file at {path}: {err}")]
    WriteFile { path: String, err: String },
    #[error("Can't rename file from {from} to {to}: {err}")]
    RenameFile {
        from: String,
        to: String,
        err: String,
    },
    #[error("Can't flush file: {0}")]
    FlushFile(io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
