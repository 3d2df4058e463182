use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("No request handler matched request type {request_type}")]
    NoMatchingHandler { request_type: String },

    #[error("Interceptor error: {0}")]
    Interceptor(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Missing field in request: {0}")]
    MissingField(&'static str),

    #[error("Handler fault: {0}")]
    Fault(String),
}

pub type Result<T> = std::result::Result<T, SkillError>;
