#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    #[error("cannot train on an empty catalog")]
    EmptyCorpus,

    #[error("duplicate catalog record id {0:?}")]
    DuplicateRecordId(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown strategy {0:?} (expected `vector_space` or `keyword`)")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
