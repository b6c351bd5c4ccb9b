use thiserror::Error;

/// Custom error types for the library.
#[derive(Error, Debug)]
pub enum SageError {
    /// A required request field was empty or missing.
    #[error("{0}")]
    InvalidInput(String),
    #[error("Only SELECT queries are allowed")]
    NonSelectQuery,
    /// The setup script failed; no query was run against the store.
    #[error("Setup SQL error: {0}")]
    Setup(String),
    /// A statement in a query sequence failed. Earlier statements stay applied.
    #[error("Error in query '{statement}': {message}")]
    Statement { statement: String, message: String },
    #[error("Query did not return a result set: {0}")]
    NotRowReturning(String),
    #[error("Storage connection error: {0}")]
    StoreConnection(String),
    #[error("Storage operation failed: {0}")]
    StoreOperation(String),
    /// The review model answered, but not with the JSON shape we asked for.
    #[error("Failed to parse {stage} response: {source}")]
    ReviewParse {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Problem source '{0}' is not configured")]
    UnconfiguredSource(String),
    #[error("Request to problem source failed: {0}")]
    SourceRequest(reqwest::Error),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
