use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifyError {
    #[error("model failed to load: {0}")]
    ModelLoad(String),

    #[error("classification failed: {0}")]
    Classify(String),

    #[error("not ready: {0}")]
    NotReady(&'static str),

    #[error("image identifier stopped receiving messages")]
    Disconnected,
}
